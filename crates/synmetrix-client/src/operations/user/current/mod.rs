mod runner;
mod types;

pub use runner::{CurrentUser, run};
pub use types::{CurrentUserData, CurrentUserVariables, Membership, MembershipTeam, UserProfile};
