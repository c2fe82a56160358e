mod runner;
mod types;

pub use runner::{SubCurrentUser, run};
pub use types::{SubCurrentUserData, SubCurrentUserVariables, WatchedUser};
