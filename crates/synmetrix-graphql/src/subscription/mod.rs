//! GraphQL subscriptions over a websocket
//!
//! Each subscription owns one connection speaking `graphql-transport-ws`.
//! The connection is opened on the first poll of the returned stream and
//! closed when the stream ends or is dropped.

use std::{mem, time::Duration};

use futures::{SinkExt, StreamExt, future, stream, stream::BoxStream};
use graphql_client::{GraphQLQuery, QueryBody};
use http::{HeaderMap, HeaderValue, header::SEC_WEBSOCKET_PROTOCOL};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};
use synmetrix_http::{DEFAULT_TIMEOUT, HttpServiceError};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream,
    tungstenite::{
        Message,
        client::IntoClientRequest,
        protocol::{CloseFrame, frame::coding::CloseCode},
    },
};
use url::Url;

use crate::{
    GraphQLErrors, GraphQLServiceError, RawOperation, request::OperationPayload,
    response::{classify_payload, decode_data},
};

mod protocol;

pub use protocol::SUBPROTOCOL;
use protocol::{ClientMessage, SUBSCRIPTION_ID, ServerMessage};

/// A lazy, non-restartable stream with one item per `next` message
pub type GraphQLStream<T> = BoxStream<'static, Result<T, GraphQLServiceError>>;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens subscriptions against one websocket endpoint
#[derive(Clone, Debug)]
pub struct GraphQLSubscriber {
    url: Url,
    headers: HeaderMap,
    timeout: Duration,
}

impl GraphQLSubscriber {
    /// Creates a subscriber that sends `headers` with every connection
    pub fn new(url: Url, headers: HeaderMap) -> GraphQLSubscriber {
        GraphQLSubscriber {
            url,
            headers,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Limits how long connecting and waiting for `connection_ack` may take
    pub fn with_timeout(mut self, timeout: Duration) -> GraphQLSubscriber {
        self.timeout = timeout;
        self
    }

    /// The websocket endpoint
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Subscribes to a compiled-in operation, decoding each payload
    pub fn subscribe<Q>(&self, variables: Q::Variables) -> GraphQLStream<Q::ResponseData>
    where
        Q: GraphQLQuery,
        Q::ResponseData: Send + 'static,
    {
        self.subscribe_body(&Q::build_query(variables))
    }

    /// Subscribes to an already built operation body, decoding each payload into `T`
    pub fn subscribe_body<V, T>(&self, body: &QueryBody<V>) -> GraphQLStream<T>
    where
        V: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let payload = serde_json::to_value(OperationPayload::from(body));
        self.open(payload, body.operation_name)
            .map(|item| item.and_then(decode_data::<T>))
            .boxed()
    }

    /// Subscribes to a runtime-assembled operation, yielding each raw `data`
    pub fn subscribe_raw(&self, operation: RawOperation) -> GraphQLStream<Value> {
        let payload = serde_json::to_value(operation.payload());
        self.open(payload, &operation.name)
    }

    fn open(
        &self,
        payload: Result<Value, serde_json::Error>,
        operation: &str,
    ) -> GraphQLStream<Value> {
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                return stream::once(future::ready(Err(GraphQLServiceError::Serialization(err))))
                    .boxed();
            }
        };
        let handshake = Handshake {
            url: self.url.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
            payload,
            operation: operation.to_string(),
        };
        stream::unfold(State::Pending(Box::new(handshake)), step).boxed()
    }
}

enum State {
    Pending(Box<Handshake>),
    Open(Connection),
    Done,
}

/// An acknowledged subscription
///
/// Dropping it before the server ends the subscription sends `complete` and
/// closes the socket on the current tokio runtime.
struct Connection {
    socket: Option<Box<Socket>>,
    operation: String,
}

impl Connection {
    async fn close(&mut self) {
        if let Some(mut socket) = self.socket.take() {
            close(&mut socket).await;
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        let Some(mut socket) = self.socket.take() else {
            return;
        };
        let operation = mem::take(&mut self.operation);
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    let complete = ClientMessage::Complete {
                        id: SUBSCRIPTION_ID,
                    };
                    if let Err(err) = send(&mut socket, &complete).await {
                        tracing::trace!(operation = %operation, error = %err, "could not complete subscription");
                    }
                    close(&mut socket).await;
                    tracing::trace!(operation = %operation, "subscription cancelled");
                });
            }
            Err(_) => {
                tracing::trace!(operation = %operation, "subscription dropped outside a runtime");
            }
        }
    }
}

enum Received {
    Item(Result<Value, GraphQLServiceError>),
    Fatal(GraphQLServiceError),
    End,
}

async fn step(state: State) -> Option<(Result<Value, GraphQLServiceError>, State)> {
    let mut connection = match state {
        State::Pending(handshake) => {
            let operation = handshake.operation.clone();
            match (*handshake).connect().await {
                Ok(socket) => Connection {
                    socket: Some(Box::new(socket)),
                    operation,
                },
                Err(err) => {
                    tracing::debug!(operation = %operation, error = %err, "subscription failed to start");
                    return Some((Err(err), State::Done));
                }
            }
        }
        State::Open(connection) => connection,
        State::Done => return None,
    };
    let socket = connection.socket.as_mut()?;

    match receive(socket).await {
        Received::Item(item) => Some((item, State::Open(connection))),
        Received::Fatal(err) => {
            tracing::debug!(operation = %connection.operation, error = %err, "subscription failed");
            connection.close().await;
            Some((Err(err), State::Done))
        }
        Received::End => {
            tracing::trace!(operation = %connection.operation, "subscription completed");
            connection.close().await;
            None
        }
    }
}

async fn receive(socket: &mut Socket) -> Received {
    loop {
        let text = match socket.next().await {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Close(frame))) => {
                return match closed(frame) {
                    Some(err) => Received::Fatal(err),
                    None => Received::End,
                };
            }
            Some(Ok(Message::Binary(_))) => {
                return Received::Fatal(GraphQLServiceError::Protocol(
                    "unexpected binary message".to_string(),
                ));
            }
            // websocket-level pings are answered by tungstenite itself
            Some(Ok(_)) => continue,
            Some(Err(err)) => return Received::Fatal(err.into()),
            None => return Received::Fatal(dropped()),
        };

        match serde_json::from_str::<ServerMessage>(&text) {
            Ok(ServerMessage::Next { id, payload }) if id == SUBSCRIPTION_ID => {
                return Received::Item(classify_payload(payload));
            }
            Ok(ServerMessage::Error { id, payload }) if id == SUBSCRIPTION_ID => {
                return Received::Fatal(GraphQLServiceError::GraphQL(GraphQLErrors(payload)));
            }
            Ok(ServerMessage::Complete { id }) if id == SUBSCRIPTION_ID => return Received::End,
            Ok(ServerMessage::Ping { payload }) => {
                if let Err(err) = send(socket, &ClientMessage::Pong { payload }).await {
                    return Received::Fatal(err);
                }
            }
            Ok(
                ServerMessage::Next { id, .. }
                | ServerMessage::Error { id, .. }
                | ServerMessage::Complete { id },
            ) => tracing::trace!(id = %id, "ignoring message for an unknown subscription"),
            Ok(ServerMessage::ConnectionAck {} | ServerMessage::Pong {}) => {}
            Err(err) => {
                return Received::Fatal(GraphQLServiceError::Protocol(format!(
                    "unreadable message: {err}"
                )));
            }
        }
    }
}

/// `None` when the server closed normally
fn closed(frame: Option<CloseFrame>) -> Option<GraphQLServiceError> {
    match frame {
        None => None,
        Some(frame) if frame.code == CloseCode::Normal => None,
        Some(frame) => Some(GraphQLServiceError::ConnectionClosed {
            code: Some(u16::from(frame.code)),
            reason: frame.reason.to_string(),
        }),
    }
}

fn dropped() -> GraphQLServiceError {
    GraphQLServiceError::ConnectionClosed {
        code: None,
        reason: "connection dropped before the subscription completed".to_string(),
    }
}

async fn close(socket: &mut Socket) {
    if let Err(err) = socket.close(None).await {
        tracing::trace!(error = %err, "websocket already closed");
    }
}

async fn send(socket: &mut Socket, message: &ClientMessage<'_>) -> Result<(), GraphQLServiceError> {
    let text = serde_json::to_string(message).map_err(GraphQLServiceError::Serialization)?;
    socket.send(Message::Text(text.into())).await?;
    Ok(())
}

struct Handshake {
    url: Url,
    headers: HeaderMap,
    timeout: Duration,
    payload: Value,
    operation: String,
}

impl Handshake {
    async fn connect(self) -> Result<Socket, GraphQLServiceError> {
        let timeout = self.timeout;
        tokio::time::timeout(timeout, self.handshake())
            .await
            .map_err(|_| GraphQLServiceError::Transport(HttpServiceError::TimedOut))?
    }

    async fn handshake(self) -> Result<Socket, GraphQLServiceError> {
        let mut request = self.url.as_str().into_client_request()?;
        request
            .headers_mut()
            .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(SUBPROTOCOL));
        for (name, value) in self.headers.iter() {
            request.headers_mut().insert(name.clone(), value.clone());
        }

        tracing::trace!(url = %self.url, operation = %self.operation, "opening subscription");
        let (mut socket, _) = tokio_tungstenite::connect_async(request).await?;

        let init = ClientMessage::ConnectionInit {
            payload: Some(init_payload(&self.headers)),
        };
        send(&mut socket, &init).await?;

        loop {
            let text = match socket.next().await {
                Some(Ok(Message::Text(text))) => text,
                Some(Ok(Message::Close(frame))) => {
                    // the server refused the connection, even a normal close is an error here
                    return Err(closed(frame).unwrap_or_else(dropped));
                }
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => return Err(dropped()),
            };
            match serde_json::from_str::<ServerMessage>(&text) {
                Ok(ServerMessage::ConnectionAck {}) => break,
                Ok(ServerMessage::Ping { payload }) => {
                    send(&mut socket, &ClientMessage::Pong { payload }).await?;
                }
                Ok(other) => {
                    return Err(GraphQLServiceError::Protocol(format!(
                        "expected connection_ack, received {other:?}"
                    )));
                }
                Err(err) => {
                    return Err(GraphQLServiceError::Protocol(format!(
                        "unreadable message: {err}"
                    )));
                }
            }
        }

        let subscribe = ClientMessage::Subscribe {
            id: SUBSCRIPTION_ID,
            payload: self.payload,
        };
        send(&mut socket, &subscribe).await?;
        Ok(socket)
    }
}

/// Hasura reads the connection's headers from the `connection_init` payload
fn init_payload(headers: &HeaderMap) -> Value {
    let headers: Map<String, Value> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), Value::from(value)))
        })
        .collect();
    json!({ "headers": headers })
}
