mod runner;
mod types;

pub use runner::{CreateVersion, run};
pub use types::{CreateVersionData, CreateVersionVariables, CreatedVersion};
