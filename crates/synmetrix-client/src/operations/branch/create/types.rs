use serde::{Deserialize, Serialize};

use crate::shared::{BranchesInsertInput, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CreateBranchVariables {
    pub object: BranchesInsertInput,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreateBranchData {
    /// `None` when permissions filtered out the inserted row
    pub insert_branches_one: Option<CreatedBranch>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreatedBranch {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub status: Option<String>,
}
