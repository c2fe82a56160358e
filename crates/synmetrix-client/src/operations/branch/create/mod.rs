mod runner;
mod types;

pub use runner::{CreateBranch, run};
pub use types::{CreateBranchData, CreateBranchVariables, CreatedBranch};
