mod runner;
mod types;

pub use runner::{CurrentDataSource, run};
pub use types::{
    CurrentDataSourceData, CurrentDataSourceVariables, DataSourceBranch, DataSourceDetails,
};
