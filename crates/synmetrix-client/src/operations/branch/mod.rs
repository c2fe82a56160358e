/// branch creation
pub mod create;
