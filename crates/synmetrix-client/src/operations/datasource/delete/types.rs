use serde::{Deserialize, Serialize};

use crate::shared::Uuid;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DeleteDataSourceVariables {
    pub id: Uuid,
}

impl DeleteDataSourceVariables {
    pub fn new(id: impl Into<Uuid>) -> DeleteDataSourceVariables {
        DeleteDataSourceVariables { id: id.into() }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DeleteDataSourceData {
    /// `None` when there was nothing to delete
    pub delete_datasources_by_pk: Option<DeletedDataSource>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DeletedDataSource {
    pub id: Uuid,
}
