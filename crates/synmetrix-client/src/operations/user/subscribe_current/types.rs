use serde::{Deserialize, Serialize};

use crate::shared::{Timestamptz, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SubCurrentUserVariables {
    pub id: Uuid,
}

impl SubCurrentUserVariables {
    pub fn new(id: impl Into<Uuid>) -> SubCurrentUserVariables {
        SubCurrentUserVariables { id: id.into() }
    }
}

/// One update pushed by the server
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SubCurrentUserData {
    pub users_by_pk: Option<WatchedUser>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WatchedUser {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub avatar_url: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub updated_at: Option<Timestamptz>,
}
