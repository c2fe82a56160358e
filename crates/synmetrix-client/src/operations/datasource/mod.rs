/// a single datasource by id
pub mod current;

/// filtered, paged datasource listing
pub mod list;

/// datasource creation
pub mod create;

/// datasource removal
pub mod delete;
