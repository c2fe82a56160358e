/// Failures produced while carrying a request to the server and reading the reply
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    TimedOut,
    /// The response body could not be decoded
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The request or response body could not be read
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A connection to the server could not be established
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything the underlying client reports that does not fit above
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether the connection to the server failed
    pub const fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
    /// Whether the request timed out
    pub const fn is_timeout(&self) -> bool {
        matches!(self, HttpServiceError::TimedOut)
    }
    /// Whether the response could not be decoded
    pub const fn is_decode(&self) -> bool {
        matches!(self, HttpServiceError::Decode(_))
    }
}
