/// version creation, with the data models it holds
pub mod create;

/// latest version of a branch
pub mod current;
