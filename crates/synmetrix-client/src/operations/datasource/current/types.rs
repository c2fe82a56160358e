use serde::{Deserialize, Serialize};

use crate::shared::{Jsonb, Timestamptz, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CurrentDataSourceVariables {
    pub id: Uuid,
}

impl CurrentDataSourceVariables {
    pub fn new(id: impl Into<Uuid>) -> CurrentDataSourceVariables {
        CurrentDataSourceVariables { id: id.into() }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentDataSourceData {
    pub datasources_by_pk: Option<DataSourceDetails>,
}

/// A datasource with its connection settings and every branch
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DataSourceDetails {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub db_type: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub db_params: Option<Jsonb>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub team_id: Option<Uuid>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub updated_at: Option<Timestamptz>,
    pub branches: Vec<DataSourceBranch>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DataSourceBranch {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub status: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
}
