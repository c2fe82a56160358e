/// operations on `users`
pub mod user;

/// operations on `datasources`
pub mod datasource;

/// operations on `branches`
pub mod branch;

/// operations on `versions`
pub mod version;
