use http::StatusCode;
use serde::{Deserialize, Serialize};
use synmetrix_http::HttpServiceError;

use super::token::{AccessTokenClaims, TokenDecodingError};

/// A freshly issued token pair together with the identity it carries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthTokens {
    /// JWT to send as `Authorization: Bearer`
    pub access_token: String,
    /// Token that buys the next access token
    pub refresh_token: String,
    /// `exp` of the access token
    pub access_token_expires_at: i64,
    /// `x-hasura-user-id` of the access token
    pub user_id: Option<String>,
    /// Roles the access token may assume
    pub allowed_roles: Vec<String>,
    /// Role used when a request selects none
    pub default_role: Option<String>,
}

impl AuthTokens {
    pub(crate) fn new(
        access_token: String,
        refresh_token: String,
        claims: AccessTokenClaims,
    ) -> AuthTokens {
        AuthTokens {
            access_token,
            refresh_token,
            access_token_expires_at: claims.access_token_expires_at,
            user_id: claims.user_id,
            allowed_roles: claims.allowed_roles,
            default_role: claims.default_role,
        }
    }
}

/// Body fields the auth service uses to report a refusal
#[derive(Deserialize, Debug, Default)]
pub(crate) struct AuthErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub(crate) status_code: Option<u16>,
}

/// Body of a successful login, registration or refresh
#[derive(Deserialize, Debug)]
pub(crate) struct TokenBody {
    pub(crate) jwt_token: String,
    pub(crate) refresh_token: String,
}

/// Body of a magic link request, which carries tokens only on some deployments
#[derive(Deserialize, Debug, Default)]
pub(crate) struct MagicLinkBody {
    #[serde(default)]
    pub(crate) jwt_token: Option<String>,
    #[serde(default)]
    pub(crate) refresh_token: Option<String>,
}

/// Errors from the auth service
#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    /// The service answered with an `error` field
    #[error("{error}: {message}")]
    Server {
        /// Error code, such as `invalid_credentials`
        error: String,
        /// Human readable description, possibly empty
        message: String,
        /// Status reported in the body, falling back to the HTTP status
        status_code: Option<u16>,
    },
    /// The service answered with a non-success status and no `error` field
    #[error("auth service responded with {status_code}: {body}")]
    BadStatus {
        /// The HTTP status
        status_code: StatusCode,
        /// The response body as text
        body: String,
    },
    /// A success response could not be read
    #[error("auth service sent an unreadable response ({status_code}): {error}")]
    InvalidResponse {
        /// The HTTP status
        status_code: StatusCode,
        /// The source error
        error: serde_json::Error,
        /// The response body as text
        body: String,
    },
    /// The issued access token could not be read
    #[error(transparent)]
    Token(#[from] TokenDecodingError),
    /// The request never got an answer
    #[error(transparent)]
    Transport(#[from] HttpServiceError),
    /// The request could not be assembled
    #[error("could not build the request: {0}")]
    Request(#[from] http::Error),
    /// The configured base URL cannot be used
    #[error("invalid auth URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl AuthError {
    /// The service's error code, when it sent one
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Server { error, .. } => Some(error),
            _ => None,
        }
    }
}
