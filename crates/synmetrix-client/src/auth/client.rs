use bytes::Bytes;
use http::{HeaderValue, Method, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use http_body_util::Full;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use synmetrix_http::{
    HttpService, HttpServiceConfig, HttpServiceError, ReqwestService, body::body_to_bytes,
};
use tower::{Service, ServiceExt};
use url::Url;

use super::{
    token::parse_access_token,
    types::{AuthError, AuthErrorBody, AuthTokens, MagicLinkBody, TokenBody},
};
use crate::headers::bearer;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the Synmetrix auth service (`<base_url>/auth/...`).
///
/// Tokens are returned to the caller and never kept; every call that needs
/// one takes it as an argument.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    service: HttpService,
}

impl AuthClient {
    /// Creates a client that sends its requests through `service`
    pub fn new(base_url: &str, service: HttpService) -> AuthClient {
        tracing::debug!(base_url, "initialized auth client");
        AuthClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            service,
        }
    }

    /// Creates a client backed by its own reqwest connection pool
    pub fn from_base_url(base_url: &str) -> Result<AuthClient, AuthError> {
        let service = ReqwestService::builder()
            .config(HttpServiceConfig::default())
            .build()
            .map_err(HttpServiceError::from)?;
        Ok(AuthClient::new(base_url, service.into()))
    }

    /// The base URL the auth paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticates with email and password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        cookie: bool,
    ) -> Result<AuthTokens, AuthError> {
        tracing::info!(email, "logging in");
        let body = json!({ "email": email, "password": password, "cookie": cookie });
        let (status_code, data) = self
            .send(Method::POST, self.url("/auth/login", &[])?, None, Some(body))
            .await?;
        issue(status_code, data)
    }

    /// Creates an account and authenticates as it
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        cookie: bool,
    ) -> Result<AuthTokens, AuthError> {
        tracing::info!(email, "registering");
        let body = json!({ "email": email, "password": password, "cookie": cookie });
        let (status_code, data) = self
            .send(Method::POST, self.url("/auth/register", &[])?, None, Some(body))
            .await?;
        issue(status_code, data)
    }

    /// Asks the service to email a sign-in link.
    ///
    /// Returns tokens only when the service hands them out right away.
    pub async fn send_magic_link(&self, email: &str) -> Result<Option<AuthTokens>, AuthError> {
        tracing::info!(email, "requesting magic link");
        let body = json!({ "email": email, "cookie": false });
        let (status_code, data) = self
            .send(Method::POST, self.url("/auth/register", &[])?, None, Some(body))
            .await?;
        let body = MagicLinkBody::deserialize(&data).map_err(|error| AuthError::InvalidResponse {
            status_code,
            error,
            body: data.to_string(),
        })?;
        match (body.jwt_token, body.refresh_token) {
            (Some(access_token), Some(refresh_token)) => {
                let claims = parse_access_token(&access_token)?;
                Ok(Some(AuthTokens::new(access_token, refresh_token, claims)))
            }
            _ => Ok(None),
        }
    }

    /// Trades a refresh token for a new token pair
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
        tracing::debug!("refreshing access token");
        let url = self.url("/auth/token/refresh", &[("refresh_token", refresh_token)])?;
        let (status_code, data) = self.send(Method::GET, url, None, None).await?;
        issue(status_code, data)
    }

    /// Ends the session of `refresh_token`, or every session of the user when `all_sessions` is set
    pub async fn logout(
        &self,
        access_token: &str,
        refresh_token: &str,
        all_sessions: bool,
    ) -> Result<(), AuthError> {
        tracing::info!(all_sessions, "logging out");
        let url = self.url("/auth/logout", &[("refresh_token", refresh_token)])?;
        self.send(
            Method::POST,
            url,
            Some(access_token),
            Some(json!({ "all": all_sessions })),
        )
        .await?;
        Ok(())
    }

    /// Changes the password of the user `access_token` belongs to
    pub async fn change_password(
        &self,
        access_token: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        tracing::info!("changing password");
        let body = json!({ "old_password": old_password, "new_password": new_password });
        self.send(
            Method::POST,
            self.url("/auth/change-password", &[])?,
            Some(access_token),
            Some(body),
        )
        .await?;
        Ok(())
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, AuthError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        access_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), AuthError> {
        let mut req = http::Request::builder().method(method).uri(url.as_str());
        if let Some(access_token) = access_token {
            req = req.header(AUTHORIZATION, bearer(access_token).map_err(http::Error::from)?);
        }
        let body = match body {
            Some(body) => {
                req = req.header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                Bytes::from(body.to_string())
            }
            None => Bytes::new(),
        };
        let req = req.body(Full::new(body))?;

        let mut service = self.service.clone();
        let mut resp = service.ready().await?.call(req).await?;
        let status_code = resp.status();
        let bytes = body_to_bytes(resp.body_mut())
            .await
            .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
        tracing::debug!(status = %status_code, url = %url.path(), "auth service responded");

        validate(status_code, &bytes)
            .map(|data| (status_code, data))
            .inspect_err(|err| tracing::debug!(error = %err, "auth request failed"))
    }
}

fn validate(status_code: StatusCode, bytes: &Bytes) -> Result<Value, AuthError> {
    if status_code.is_success() && (status_code == StatusCode::NO_CONTENT || bytes.is_empty()) {
        return Ok(Value::Object(Map::new()));
    }

    let parsed = serde_json::from_slice::<Value>(bytes);
    if let Ok(value) = &parsed {
        let refusal = AuthErrorBody::deserialize(value).unwrap_or_default();
        if let Some(error) = refusal.error {
            return Err(AuthError::Server {
                error,
                message: refusal.message.unwrap_or_default(),
                status_code: refusal.status_code.or(Some(status_code.as_u16())),
            });
        }
    }

    let body = String::from_utf8_lossy(bytes).into_owned();
    if !status_code.is_success() {
        return Err(AuthError::BadStatus { status_code, body });
    }
    parsed.map_err(|error| AuthError::InvalidResponse {
        status_code,
        error,
        body,
    })
}

fn issue(status_code: StatusCode, data: Value) -> Result<AuthTokens, AuthError> {
    let tokens = TokenBody::deserialize(&data).map_err(|error| AuthError::InvalidResponse {
        status_code,
        error,
        body: data.to_string(),
    })?;
    let claims = parse_access_token(&tokens.jwt_token)?;
    Ok(AuthTokens::new(tokens.jwt_token, tokens.refresh_token, claims))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use http::StatusCode;
    use httpmock::{
        Method::{GET, POST},
        MockServer,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;
    use tracing_test::traced_test;

    use super::AuthClient;
    use crate::auth::{AuthError, TokenDecodingError, token::tests::access_token};

    fn client(server: &MockServer) -> AuthClient {
        AuthClient::from_base_url(&format!("{}/", server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn login_returns_parsed_tokens() -> Result<()> {
        let server = MockServer::start_async().await;
        let jwt = access_token("abc-123");
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login").json_body(json!({
                    "email": "user@example.com",
                    "password": "hunter2",
                    "cookie": false
                }));
                then.status(200)
                    .json_body(json!({ "jwt_token": jwt, "refresh_token": "refresh-1" }));
            })
            .await;

        let tokens = client(&server)
            .login("user@example.com", "hunter2", false)
            .await?;

        mock.assert_async().await;
        assert_eq!(tokens.access_token, access_token("abc-123"));
        assert_eq!(tokens.refresh_token, "refresh-1");
        assert_eq!(tokens.user_id.as_deref(), Some("abc-123"));
        assert_eq!(tokens.allowed_roles, vec!["user", "owner"]);
        assert_eq!(tokens.default_role.as_deref(), Some("user"));
        assert_eq!(tokens.access_token_expires_at, 1_900_000_000);
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    async fn refusals_carry_the_server_message() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401).json_body(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid email or password",
                    "statusCode": 401
                }));
            })
            .await;

        let result = client(&server).login("user@example.com", "wrong", false).await;

        assert_that!(result).is_err().matches(|err| {
            matches!(
                err,
                AuthError::Server { error, message, status_code: Some(401) }
                    if error == "invalid_credentials" && message == "Invalid email or password"
            )
        });
        assert!(logs_contain("auth request failed"));
        Ok(())
    }

    #[tokio::test]
    async fn refresh_sends_the_token_as_a_query_parameter() -> Result<()> {
        let server = MockServer::start_async().await;
        let jwt = access_token("abc-123");
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/auth/token/refresh")
                    .query_param("refresh_token", "refresh-1");
                then.status(200)
                    .json_body(json!({ "jwt_token": jwt, "refresh_token": "refresh-2" }));
            })
            .await;

        let tokens = client(&server).refresh_token("refresh-1").await?;

        mock.assert_async().await;
        assert_eq!(tokens.refresh_token, "refresh-2");
        Ok(())
    }

    #[tokio::test]
    async fn logout_accepts_no_content() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/logout")
                    .query_param("refresh_token", "refresh-1")
                    .header("authorization", "Bearer access-1")
                    .json_body(json!({ "all": true }));
                then.status(204);
            })
            .await;

        client(&server).logout("access-1", "refresh-1", true).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn change_password_sends_both_passwords() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/change-password")
                    .header("authorization", "Bearer access-1")
                    .json_body(json!({ "old_password": "old", "new_password": "new" }));
                then.status(200).json_body(json!({}));
            })
            .await;

        client(&server)
            .change_password("access-1", "old", "new")
            .await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn magic_link_without_tokens_is_not_an_error() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/register")
                    .json_body(json!({ "email": "user@example.com", "cookie": false }));
                then.status(200).json_body(json!({ "magicLink": true }));
            })
            .await;

        let tokens = client(&server).send_magic_link("user@example.com").await?;

        assert_that!(tokens).is_none();
        Ok(())
    }

    #[tokio::test]
    async fn plain_text_failures_keep_status_and_body() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/register");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let result = client(&server)
            .register("user@example.com", "hunter2", false)
            .await;

        assert_that!(result).is_err().matches(|err| {
            matches!(
                err,
                AuthError::BadStatus { status_code, body }
                    if *status_code == StatusCode::BAD_GATEWAY && body == "Bad Gateway"
            )
        });
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_success_is_an_invalid_response() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200).body("<html>welcome</html>");
            })
            .await;

        let result = client(&server).login("user@example.com", "hunter2", false).await;

        assert_that!(result)
            .is_err()
            .matches(|err| matches!(err, AuthError::InvalidResponse { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn issued_tokens_must_be_readable() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200)
                    .json_body(json!({ "jwt_token": "not-a-token", "refresh_token": "refresh-1" }));
            })
            .await;

        let result = client(&server).login("user@example.com", "hunter2", false).await;

        assert_that!(result)
            .is_err()
            .matches(|err| matches!(err, AuthError::Token(TokenDecodingError::Malformed(_))));
        Ok(())
    }
}
