use std::{collections::HashMap, time::Duration};

use buildstructor::buildstructor;
use derive_getters::Getters;
use http::HeaderMap;
use url::Url;

use crate::{SynmetrixClientError, headers};

/// Path of the GraphQL endpoint below a Synmetrix base URL
pub const GRAPHQL_PATH: &str = "/v1/graphql";

/// Everything a [`crate::SynmetrixClient`] needs to reach the API.
///
/// Immutable once built; clients share it read-only.
#[derive(Clone, Debug, Getters)]
pub struct ClientConfig {
    endpoint: Url,
    ws_endpoint: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

#[buildstructor]
impl ClientConfig {
    /// Builds a configuration.
    ///
    /// The websocket endpoint defaults to `endpoint` with `http` swapped for
    /// `ws` (and `https` for `wss`).
    #[builder]
    pub fn new(
        endpoint: Url,
        ws_endpoint: Option<Url>,
        access_token: Option<String>,
        admin_secret: Option<String>,
        role: Option<String>,
        headers: HashMap<String, String>,
        timeout: Option<Duration>,
    ) -> Result<ClientConfig, SynmetrixClientError> {
        let ws_endpoint = match ws_endpoint {
            Some(ws_endpoint) => ws_endpoint,
            None => websocket_endpoint(&endpoint)?,
        };
        let headers = headers::build(
            &headers,
            access_token.as_deref(),
            admin_secret.as_deref(),
            role.as_deref(),
        )?;
        Ok(ClientConfig {
            endpoint,
            ws_endpoint,
            headers,
            timeout,
        })
    }
}

/// The GraphQL endpoint below a Synmetrix base URL such as `https://app.synmetrix.org`
pub fn endpoint_from_base_url(base_url: &str) -> Result<Url, SynmetrixClientError> {
    let joined = format!("{}{GRAPHQL_PATH}", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|err| SynmetrixClientError::InvalidEndpoint {
        url: base_url.to_string(),
        reason: err.to_string(),
    })
}

fn websocket_endpoint(endpoint: &Url) -> Result<Url, SynmetrixClientError> {
    let scheme = match endpoint.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(SynmetrixClientError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme \"{other}\""),
            });
        }
    };
    let mut ws_endpoint = endpoint.clone();
    ws_endpoint
        .set_scheme(scheme)
        .map_err(|()| SynmetrixClientError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: format!("cannot switch to \"{scheme}\""),
        })?;
    Ok(ws_endpoint)
}
