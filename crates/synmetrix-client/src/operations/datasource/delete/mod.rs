mod runner;
mod types;

pub use runner::{DeleteDataSource, run};
pub use types::{DeleteDataSourceData, DeleteDataSourceVariables, DeletedDataSource};
