pub(crate) mod output;
mod token;
pub(crate) mod upload_data_models;
mod whoami;

pub use output::SynmetrixOutput;
pub use token::Token;
pub use upload_data_models::UploadDataModels;
pub use whoami::Whoami;
