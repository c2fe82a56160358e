use serde::{Deserialize, Serialize};

use crate::shared::{Timestamptz, Uuid};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CurrentUserVariables {
    pub id: Uuid,
}

impl CurrentUserVariables {
    pub fn new(id: impl Into<Uuid>) -> CurrentUserVariables {
        CurrentUserVariables { id: id.into() }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentUserData {
    /// `None` when no user has the id, or the session may not see it
    pub users_by_pk: Option<UserProfile>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub avatar_url: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub created_at: Option<Timestamptz>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub updated_at: Option<Timestamptz>,
    pub members: Vec<Membership>,
}

/// The user's seat in a team
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Membership {
    pub id: Uuid,
    pub team: MembershipTeam,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MembershipTeam {
    pub id: Uuid,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
}
