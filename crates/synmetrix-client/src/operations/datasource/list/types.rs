use serde::{Deserialize, Serialize};
use synmetrix_graphql::Maybe;

use crate::shared::{DatasourcesBoolExp, DatasourcesOrderBy, Timestamptz, Uuid};

/// Every argument is optional; an unset argument is left out of the request
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DatasourcesVariables {
    #[serde(rename = "where", skip_serializing_if = "Maybe::is_unset")]
    pub filter: Maybe<DatasourcesBoolExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub limit: Maybe<i64>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub offset: Maybe<i64>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub order_by: Maybe<Vec<DatasourcesOrderBy>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DatasourcesData {
    pub datasources: Vec<ListedDataSource>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ListedDataSource {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub db_type: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub team_id: Option<Uuid>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub updated_at: Option<Timestamptz>,
    pub branches: Vec<ListedBranch>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ListedBranch {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub status: Option<String>,
}
