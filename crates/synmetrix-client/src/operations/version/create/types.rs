use serde::{Deserialize, Serialize};

use crate::shared::{Timestamptz, Uuid, VersionsInsertInput};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CreateVersionVariables {
    pub object: VersionsInsertInput,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CreateVersionData {
    pub insert_versions_one: Option<CreatedVersion>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CreatedVersion {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub checksum: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub branch_id: Option<Uuid>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
}
