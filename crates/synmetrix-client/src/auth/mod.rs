//! Access token parsing and the REST auth service

mod client;
pub(crate) mod token;
mod types;

pub use client::AuthClient;
pub use token::{AccessTokenClaims, TokenDecodingError, parse_access_token};
pub use types::{AuthError, AuthTokens};
