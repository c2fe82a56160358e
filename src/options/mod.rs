mod api;
mod credentials;

pub(crate) use api::ApiOpt;
pub(crate) use credentials::CredentialsOpt;
