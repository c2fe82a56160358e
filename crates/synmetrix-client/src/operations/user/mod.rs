/// the user a session belongs to
pub mod current;

/// live updates of a user
pub mod subscribe_current;
