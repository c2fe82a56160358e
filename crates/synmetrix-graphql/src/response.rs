use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{GraphQLErrors, GraphQLServiceError};

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse<T> = graphql_client::Response<T>;

/// Turns an HTTP reply into the raw `data` of a successful operation, or the matching error
pub(crate) fn classify_http(
    status_code: StatusCode,
    body: Bytes,
) -> Result<Value, GraphQLServiceError> {
    let envelope: GraphQLResponse<Value> = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status_code.is_success() => {
            return Err(GraphQLServiceError::BadStatusCode {
                status_code,
                data: body,
            });
        }
        Err(error) => {
            return Err(GraphQLServiceError::MalformedResponse {
                error,
                data: body,
                status_code,
            });
        }
    };

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        return Err(GraphQLServiceError::GraphQL(GraphQLErrors(errors)));
    }
    if !status_code.is_success() {
        return Err(GraphQLServiceError::BadStatusCode {
            status_code,
            data: body,
        });
    }
    envelope.data.ok_or(GraphQLServiceError::NoData)
}

/// Same as [`classify_http`] for envelopes that arrive without a status, such as websocket `next` payloads
pub(crate) fn classify_payload(
    envelope: GraphQLResponse<Value>,
) -> Result<Value, GraphQLServiceError> {
    match envelope.errors.filter(|errors| !errors.is_empty()) {
        Some(errors) => Err(GraphQLServiceError::GraphQL(GraphQLErrors(errors))),
        None => envelope.data.ok_or(GraphQLServiceError::NoData),
    }
}

/// Decodes raw `data` into the shape an operation expects
pub fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, GraphQLServiceError> {
    match T::deserialize(&data) {
        Ok(decoded) => Ok(decoded),
        Err(error) => Err(GraphQLServiceError::Decoding { error, data }),
    }
}
