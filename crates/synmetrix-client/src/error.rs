use synmetrix_graphql::{GraphQLServiceError, OperationKind};
use synmetrix_http::HttpServiceError;
use thiserror::Error;

use crate::auth::{AuthError, TokenDecodingError};

/// SynmetrixClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum SynmetrixClientError {
    /// An operation failed on its way to the server, was rejected by it, or
    /// came back in a shape the client does not understand.
    #[error(transparent)]
    Operation(#[from] GraphQLServiceError),

    /// The HTTP stack could not be built
    #[error("could not set up the HTTP client: {0}")]
    HttpClient(#[from] HttpServiceError),

    /// A bearer token could not be decoded.
    #[error(transparent)]
    TokenDecoding(#[from] TokenDecodingError),

    /// The auth service refused a request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// An operation was handed to the transport that cannot carry it.
    #[error("{kind} operations cannot be sent with {method}")]
    UnsupportedOperationKind {
        /// The operation's kind
        kind: OperationKind,
        /// The client method that refused it
        method: &'static str,
    },

    /// Tried to build a [`http::HeaderMap`] with an invalid header value.
    #[error("invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Tried to build a [`http::HeaderMap`] with an invalid header name.
    #[error("invalid header name")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    /// The configured endpoint cannot be used.
    #[error("invalid endpoint \"{url}\": {reason}")]
    InvalidEndpoint {
        /// The endpoint as given
        url: String,
        /// What is wrong with it
        reason: String,
    },
}

impl SynmetrixClientError {
    /// The request never produced a usable response
    pub fn is_transport(&self) -> bool {
        match self {
            SynmetrixClientError::Operation(err) => err.is_transport(),
            SynmetrixClientError::HttpClient(_) => true,
            _ => false,
        }
    }

    /// The server rejected the operation, see [`GraphQLServiceError::graphql_errors`]
    pub fn is_graphql(&self) -> bool {
        matches!(self, SynmetrixClientError::Operation(err) if err.is_graphql())
    }

    /// The response did not match the operation's expected shape
    pub fn is_decoding(&self) -> bool {
        matches!(self, SynmetrixClientError::Operation(err) if err.is_decoding())
    }
}
