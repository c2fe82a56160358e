use std::collections::HashMap;

use http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{AUTHORIZATION, InvalidHeaderValue},
};

use crate::SynmetrixClientError;

/// Header carrying the Hasura admin secret
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";
/// Header selecting the Hasura role a request runs as
pub const ROLE_HEADER: &str = "x-hasura-role";

/// An `Authorization: Bearer` value, marked sensitive so it never shows up in debug output
pub fn bearer(access_token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Function for building a [`HeaderMap`] for requests to the Synmetrix API.
///
/// `extra` headers are added first, so the credentials always win over an
/// extra header of the same name.
pub fn build(
    extra: &HashMap<String, String>,
    access_token: Option<&str>,
    admin_secret: Option<&str>,
    role: Option<&str>,
) -> Result<HeaderMap, SynmetrixClientError> {
    let mut headers = HeaderMap::new();

    for (key, value) in extra {
        let header_key = HeaderName::from_bytes(key.as_bytes())?;
        let header_value = HeaderValue::from_str(value)?;
        headers.insert(header_key, header_value);
    }

    if let Some(access_token) = access_token {
        headers.insert(AUTHORIZATION, bearer(access_token)?);
    }

    if let Some(admin_secret) = admin_secret {
        let mut secret = HeaderValue::from_str(admin_secret)?;
        secret.set_sensitive(true);
        headers.insert(ADMIN_SECRET_HEADER, secret);
    }

    if let Some(role) = role {
        headers.insert(ROLE_HEADER, HeaderValue::from_str(role)?);
    }

    Ok(headers)
}
