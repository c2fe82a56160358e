use serde::Serialize;
use synmetrix_graphql::Maybe;

use super::{Jsonb, Uuid};

/// `datasources_insert_input`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DatasourcesInsertInput {
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    /// Database kind, such as `POSTGRES`
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub db_type: Maybe<String>,
    /// Connection parameters, stored as given
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub db_params: Maybe<Jsonb>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub team_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<Uuid>,
}

/// `branches_insert_input`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct BranchesInsertInput {
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    /// `active`, `created` or `archived`
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub status: Maybe<String>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub datasource_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<Uuid>,
}

/// `versions_insert_input`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct VersionsInsertInput {
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub branch_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub checksum: Maybe<String>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub dataschemas: Maybe<DataschemasArrRelInsertInput>,
}

/// `dataschemas_arr_rel_insert_input`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DataschemasArrRelInsertInput {
    pub data: Vec<DataschemasInsertInput>,
}

/// `dataschemas_insert_input`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DataschemasInsertInput {
    /// File name of the model
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    /// Model source, uploaded verbatim
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub code: Maybe<String>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub datasource_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub branch_id: Maybe<Uuid>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub version_id: Maybe<Uuid>,
}
