use serde::{Deserialize, Serialize};

use crate::shared::{DatasourcesInsertInput, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CreateDataSourceVariables {
    pub object: DatasourcesInsertInput,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreateDataSourceData {
    /// `None` when permissions filtered out the inserted row
    pub insert_datasources_one: Option<CreatedDataSource>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreatedDataSource {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
}
