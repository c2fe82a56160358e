use std::fmt;

use bytes::Bytes;
use http::{StatusCode, uri::InvalidUri};
use synmetrix_http::HttpServiceError;
use tokio_tungstenite::tungstenite;

/// The error list a server attached to a response, exactly as it was sent
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrors(pub Vec<graphql_client::Error>);

impl GraphQLErrors {
    /// The `message` of every error, in server order
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|err| err.message.as_str()).collect()
    }

    /// Consumes the wrapper, returning the server's list
    pub fn into_inner(self) -> Vec<graphql_client::Error> {
        self.0
    }
}

impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Errors that may occur while dispatching an operation.
///
/// Every variant falls in one of three families, see [`GraphQLServiceError::is_transport`],
/// [`GraphQLServiceError::is_graphql`] and [`GraphQLServiceError::is_decoding`].
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError {
    /// The underlying HTTP service failed to deliver the request
    #[error("Transport error: {}", .0)]
    Transport(#[from] HttpServiceError),
    /// The websocket carrying a subscription failed
    #[error("WebSocket error: {}", .0)]
    WebSocket(Box<tungstenite::Error>),
    /// The server closed a subscription connection abnormally
    #[error("Connection closed by the server ({code:?}): {reason}")]
    ConnectionClosed {
        /// Close code, when the server sent a close frame
        code: Option<u16>,
        /// Close reason, possibly empty
        reason: String,
    },
    /// The server broke the subscription protocol
    #[error("Subscription protocol error: {}", .0)]
    Protocol(String),
    /// The body was not a GraphQL response at all
    #[error("Malformed response with status {status_code}: {error}")]
    MalformedResponse {
        /// The source error
        error: serde_json::Error,
        /// The raw response body
        data: Bytes,
        /// The [`StatusCode`] of the response
        status_code: StatusCode,
    },
    /// The server answered with a non-success status and no GraphQL errors
    #[error("Bad status code: {status_code}")]
    BadStatusCode {
        /// The [`StatusCode`] of the response
        status_code: StatusCode,
        /// The raw response body
        data: Bytes,
    },
    /// [`http`]-related error, probably from header-related tasks
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// Error that occurs from a failure to parse a [`http::Uri`] from a [`url::Url`]
    #[error("Unable to convert URL to URI.")]
    InvalidUri(#[from] InvalidUri),
    /// The server reported errors for the operation
    #[error("GraphQL errors: {}", .0)]
    GraphQL(GraphQLErrors),
    /// There was no data field provided in the response
    #[error("No data field provided")]
    NoData,
    /// The `data` field did not match the shape the operation expects
    #[error("Response data does not match the expected shape: {error}")]
    Decoding {
        /// The source error
        error: serde_json::Error,
        /// The `data` that was attempted to be deserialized
        data: serde_json::Value,
    },
    /// The operation's variables could not be serialized
    #[error("Serialization error: {}", .0)]
    Serialization(serde_json::Error),
}

impl From<tungstenite::Error> for GraphQLServiceError {
    fn from(err: tungstenite::Error) -> Self {
        GraphQLServiceError::WebSocket(Box::new(err))
    }
}

impl GraphQLServiceError {
    /// The request never produced a usable GraphQL response
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            GraphQLServiceError::Transport(_)
                | GraphQLServiceError::WebSocket(_)
                | GraphQLServiceError::ConnectionClosed { .. }
                | GraphQLServiceError::Protocol(_)
                | GraphQLServiceError::MalformedResponse { .. }
                | GraphQLServiceError::BadStatusCode { .. }
                | GraphQLServiceError::Http(_)
                | GraphQLServiceError::InvalidUri(_)
        )
    }

    /// The server rejected the operation
    pub const fn is_graphql(&self) -> bool {
        matches!(self, GraphQLServiceError::GraphQL(_))
    }

    /// The client's idea of the schema no longer matches the server's
    pub const fn is_decoding(&self) -> bool {
        matches!(
            self,
            GraphQLServiceError::Decoding { .. } | GraphQLServiceError::NoData
        )
    }

    /// The server's error list, when the server rejected the operation
    pub const fn graphql_errors(&self) -> Option<&GraphQLErrors> {
        match self {
            GraphQLServiceError::GraphQL(errors) => Some(errors),
            _ => None,
        }
    }
}
