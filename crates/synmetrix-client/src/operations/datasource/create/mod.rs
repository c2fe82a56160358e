mod runner;
mod types;

pub use runner::{CreateDataSource, run};
pub use types::{CreateDataSourceData, CreateDataSourceVariables, CreatedDataSource};
