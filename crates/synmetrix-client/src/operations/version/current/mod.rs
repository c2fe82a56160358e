mod runner;
mod types;

pub use runner::{CurrentVersion, run};
pub use types::{CurrentVersionData, CurrentVersionVariables, LatestVersion, VersionDataschema};
