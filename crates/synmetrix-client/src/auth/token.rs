use std::sync::LazyLock;

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Serialize;
use serde_json::{Map, Value};

/// Namespaces a Hasura deployment may put its session claims under
const HASURA_NAMESPACES: [&str; 2] = ["hasura", "https://hasura.io/jwt/claims"];

static KEY: LazyLock<DecodingKey> = LazyLock::new(|| DecodingKey::from_secret(&[]));

// The backend authenticates tokens; here they are only read.
static UNVERIFIED: LazyLock<Validation> = LazyLock::new(|| {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
});

/// Failures while reading claims out of a bearer token
#[derive(thiserror::Error, Debug)]
pub enum TokenDecodingError {
    /// The token is not a well-formed JWT
    #[error("malformed access token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
    /// A claim every access token carries is absent
    #[error("access token has no \"{0}\" claim")]
    MissingClaim(&'static str),
    /// A claim is present but has the wrong type
    #[error("access token claim \"{claim}\" is invalid: expected {expected}")]
    InvalidClaim {
        /// The claim's name
        claim: &'static str,
        /// What the claim should have held
        expected: &'static str,
    },
}

/// Identity claims read from an access token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessTokenClaims {
    /// `x-hasura-user-id`
    pub user_id: Option<String>,
    /// `exp`, seconds since the epoch
    pub access_token_expires_at: i64,
    /// Roles the token may assume
    pub allowed_roles: Vec<String>,
    /// Role used when a request selects none
    pub default_role: Option<String>,
    /// Every claim in the payload
    #[serde(skip)]
    pub claims: Map<String, Value>,
}

/// Decodes the payload of `token` without checking its signature.
///
/// Fails when the token is not a JWT, when `exp` is absent, or when a Hasura
/// claim has the wrong type. Missing Hasura claims are reported as empty.
pub fn parse_access_token(token: &str) -> Result<AccessTokenClaims, TokenDecodingError> {
    let claims = decode::<Map<String, Value>>(token, &KEY, &UNVERIFIED)?.claims;

    let access_token_expires_at = claims
        .get("exp")
        .ok_or(TokenDecodingError::MissingClaim("exp"))?
        .as_i64()
        .ok_or(TokenDecodingError::InvalidClaim {
            claim: "exp",
            expected: "an integer timestamp",
        })?;

    let hasura = HASURA_NAMESPACES
        .iter()
        .find_map(|namespace| claims.get(*namespace))
        .and_then(Value::as_object);

    let (user_id, allowed_roles, default_role) = match hasura {
        Some(hasura) => (
            string_claim(hasura, &["x-hasura-user-id"], "x-hasura-user-id")?,
            roles_claim(hasura)?,
            string_claim(
                hasura,
                &["default_role", "x-hasura-default-role"],
                "default_role",
            )?,
        ),
        None => (None, Vec::new(), None),
    };

    Ok(AccessTokenClaims {
        user_id,
        access_token_expires_at,
        allowed_roles,
        default_role,
        claims,
    })
}

fn string_claim(
    hasura: &Map<String, Value>,
    keys: &[&str],
    claim: &'static str,
) -> Result<Option<String>, TokenDecodingError> {
    match keys.iter().find_map(|key| hasura.get(*key)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(TokenDecodingError::InvalidClaim {
            claim,
            expected: "a string",
        }),
    }
}

fn roles_claim(hasura: &Map<String, Value>) -> Result<Vec<String>, TokenDecodingError> {
    let invalid = TokenDecodingError::InvalidClaim {
        claim: "allowed_roles",
        expected: "a list of strings",
    };
    match ["allowed_roles", "x-hasura-allowed-roles"]
        .iter()
        .find_map(|key| hasura.get(*key))
    {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(roles)) => roles
            .iter()
            .map(|role| role.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(invalid),
        Some(_) => Err(invalid),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use speculoos::prelude::*;

    use super::{TokenDecodingError, parse_access_token};

    pub(crate) fn sign(claims: &Value, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    pub(crate) fn access_token(user_id: &str) -> String {
        sign(
            &json!({
                "sub": user_id,
                "exp": 1_900_000_000,
                "hasura": {
                    "x-hasura-user-id": user_id,
                    "allowed_roles": ["user", "owner"],
                    "default_role": "user"
                }
            }),
            "server-side-secret",
        )
    }

    #[test]
    fn reads_hasura_claims_without_the_signing_key() {
        let claims = parse_access_token(&access_token("abc-123")).unwrap();

        assert_eq!(claims.user_id.as_deref(), Some("abc-123"));
        assert_eq!(claims.access_token_expires_at, 1_900_000_000);
        assert_eq!(claims.allowed_roles, vec!["user", "owner"]);
        assert_eq!(claims.default_role.as_deref(), Some("user"));
        assert_eq!(claims.claims["sub"], json!("abc-123"));
    }

    #[test]
    fn reads_prefixed_role_claims() {
        let token = sign(
            &json!({
                "exp": 1_900_000_000,
                "hasura": {
                    "x-hasura-user-id": "abc-123",
                    "x-hasura-allowed-roles": ["user"],
                    "x-hasura-default-role": "user"
                }
            }),
            "anything",
        );
        let claims = parse_access_token(&token).unwrap();
        assert_eq!(claims.allowed_roles, vec!["user"]);
        assert_eq!(claims.default_role.as_deref(), Some("user"));
    }

    #[test]
    fn expired_tokens_are_still_read() {
        let token = sign(&json!({ "exp": 1 }), "anything");
        let claims = parse_access_token(&token).unwrap();
        assert_eq!(claims.access_token_expires_at, 1);
        assert_that!(claims.user_id).is_none();
        assert_that!(claims.allowed_roles).is_empty();
    }

    #[rstest]
    #[case::garbage("not-a-token")]
    #[case::empty("")]
    #[case::two_segments("eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjF9")]
    #[case::bad_base64("eyJhbGciOiJIUzI1NiJ9.!!!.c2ln")]
    fn malformed_tokens_are_rejected(#[case] token: &str) {
        assert_that!(parse_access_token(token))
            .is_err()
            .matches(|err| matches!(err, TokenDecodingError::Malformed(_)));
    }

    #[test]
    fn truncated_tokens_are_rejected() {
        let token = access_token("abc-123");
        let truncated = &token[..token.len() / 2];
        assert_that!(parse_access_token(truncated)).is_err();
    }

    #[test]
    fn missing_expiry_is_rejected() {
        let token = sign(&json!({ "hasura": { "x-hasura-user-id": "abc-123" } }), "anything");
        assert_that!(parse_access_token(&token))
            .is_err()
            .matches(|err| matches!(err, TokenDecodingError::MissingClaim("exp")));
    }

    #[test]
    fn mistyped_roles_are_rejected() {
        let token = sign(
            &json!({ "exp": 1, "hasura": { "allowed_roles": "user" } }),
            "anything",
        );
        assert_that!(parse_access_token(&token))
            .is_err()
            .matches(|err| matches!(err, TokenDecodingError::InvalidClaim { claim: "allowed_roles", .. }));
    }
}
