//! Messages of the `graphql-transport-ws` subprotocol
//!
//! See <https://github.com/enisdenjo/graphql-ws/blob/master/PROTOCOL.md>

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::GraphQLResponse;

/// Value of the `Sec-WebSocket-Protocol` header
pub const SUBPROTOCOL: &str = "graphql-transport-ws";

/// A connection carries exactly one subscription, always under this id
pub(crate) const SUBSCRIPTION_ID: &str = "1";

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ClientMessage<'a> {
    ConnectionInit {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Subscribe {
        id: &'a str,
        payload: Value,
    },
    Pong {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Complete {
        id: &'a str,
    },
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ServerMessage {
    ConnectionAck {},
    Next {
        id: String,
        payload: GraphQLResponse<Value>,
    },
    Error {
        id: String,
        payload: Vec<graphql_client::Error>,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default)]
        payload: Option<Value>,
    },
    Pong {},
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{ClientMessage, ServerMessage};

    #[test]
    fn client_messages_are_tagged_by_type() {
        let init = ClientMessage::ConnectionInit {
            payload: Some(json!({ "headers": { "x-hasura-role": "user" } })),
        };
        assert_eq!(
            serde_json::to_value(&init).unwrap(),
            json!({ "type": "connection_init", "payload": { "headers": { "x-hasura-role": "user" } } })
        );

        let pong = ClientMessage::Pong { payload: None };
        assert_eq!(serde_json::to_value(&pong).unwrap(), json!({ "type": "pong" }));

        let complete = ClientMessage::Complete { id: "1" };
        assert_eq!(
            serde_json::to_value(&complete).unwrap(),
            json!({ "type": "complete", "id": "1" })
        );
    }

    #[test]
    fn server_messages_are_read_by_type() {
        let next: ServerMessage = serde_json::from_value(json!({
            "type": "next",
            "id": "1",
            "payload": { "data": { "users_by_pk": null } }
        }))
        .unwrap();
        assert!(matches!(next, ServerMessage::Next { ref id, .. } if id == "1"));

        let ack: ServerMessage =
            serde_json::from_value(json!({ "type": "connection_ack", "payload": {} })).unwrap();
        assert!(matches!(ack, ServerMessage::ConnectionAck {}));

        let error: ServerMessage = serde_json::from_value(json!({
            "type": "error",
            "id": "1",
            "payload": [{ "message": "subscription not allowed" }]
        }))
        .unwrap();
        assert!(matches!(error, ServerMessage::Error { ref payload, .. } if payload.len() == 1));
    }
}
