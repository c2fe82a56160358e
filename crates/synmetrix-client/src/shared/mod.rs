mod filters;
mod inputs;
mod scalars;

pub use filters::{
    BranchesBoolExp, DatasourcesBoolExp, DatasourcesOrderBy, OrderBy, StringComparisonExp,
    UuidComparisonExp,
};
pub use inputs::{
    BranchesInsertInput, DataschemasArrRelInsertInput, DataschemasInsertInput,
    DatasourcesInsertInput, VersionsInsertInput,
};
pub use scalars::{Jsonb, Timestamptz, Uuid};
