use serde::{Deserialize, Serialize};

use crate::shared::{Timestamptz, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CurrentVersionVariables {
    pub branch_id: Uuid,
}

impl CurrentVersionVariables {
    pub fn new(branch_id: impl Into<Uuid>) -> CurrentVersionVariables {
        CurrentVersionVariables {
            branch_id: branch_id.into(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentVersionData {
    /// The newest version, or nothing for a branch without versions
    pub versions: Vec<LatestVersion>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LatestVersion {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub checksum: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub branch_id: Option<Uuid>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
    pub dataschemas: Vec<VersionDataschema>,
}

/// A data model stored in a version
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct VersionDataschema {
    pub id: Uuid,
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub code: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub checksum: Option<String>,
}
