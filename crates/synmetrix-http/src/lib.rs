#![warn(missing_docs)]

//! [`tower`] services that carry HTTP requests to the Synmetrix backend

use std::time::Duration;

/// Installs ring as the default rustls crypto provider for every binary that
/// links this crate, so both reqwest and the websocket transport can do TLS.
#[ctor::ctor]
fn install_ring_crypto_provider() {
    // .ok() because the provider may already be installed, and that's the only
    // case that causes this to error
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();
}

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
pub use http_body::Body;
pub use http_body_util::{BodyExt, Empty, Full};
use tower::{timeout::error::Elapsed, util::BoxCloneSyncService};

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;
pub mod service;

pub use error::HttpServiceError;
pub use reqwest::ReqwestService;

/// Default amount of time a single request may take before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Ease-of-use synonym for the request type this crate operates on
pub type HttpRequest = http::Request<Full<Bytes>>;
/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse<T = Full<Bytes>> = http::Response<T>;
/// Ease-of-use synonym for the [`tower::Service`] type this crate provides.
///
/// `Send + Sync`, so a client holding one can be shared across tasks.
pub type HttpService = BoxCloneSyncService<HttpRequest, HttpResponse, HttpServiceError>;

/// Configuration object for constructing an [`HttpService`].
/// This is intended to be agnostic to the underlying implementation
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    timeout: Option<Duration>,
}

impl HttpServiceConfig {
    /// The timeout to apply to each request, falling back to [`DEFAULT_TIMEOUT`]
    pub fn timeout_or_default(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<Elapsed>() {
            Ok(_) => HttpServiceError::TimedOut,
            Err(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => *err,
                Err(err) => match err.downcast::<::reqwest::Error>() {
                    Ok(err) => HttpServiceError::from(*err),
                    Err(err) => HttpServiceError::Unexpected(err),
                },
            },
        }
    }
}
