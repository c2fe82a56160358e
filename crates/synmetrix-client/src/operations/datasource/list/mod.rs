mod runner;
mod types;

pub use runner::{Datasources, run};
pub use types::{DatasourcesData, DatasourcesVariables, ListedBranch, ListedDataSource};
