#![warn(missing_docs)]

//! Provides GraphQL middleware for HTTP services, and GraphQL subscriptions over websockets

use std::{fmt, str::FromStr};

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{HeaderValue, Method, Uri};
use http_body_util::Full;
use serde::Serialize;
use serde_json::Value;
use synmetrix_http::{
    HttpRequest, HttpResponse, HttpServiceError, body::body_to_bytes, service::ResponseFuture,
};
use tower::{Layer, Service};
use url::Url;

mod error;
mod maybe;
mod request;
mod response;
pub mod subscription;

pub use error::{GraphQLErrors, GraphQLServiceError};
pub use maybe::Maybe;
pub use request::{GraphQLRequest, OperationKind, RawOperation, Variables};
pub use response::{GraphQLResponse, decode_data};

use request::OperationPayload;

const JSON_CONTENT_TYPE: &str = "application/json";

/// [`Layer`] that wraps a service with GraphQL middleware
#[derive(Clone, Debug, Default)]
pub struct GraphQLLayer {
    endpoint: Option<Url>,
}

impl GraphQLLayer {
    /// Constructs a new [`GraphQLLayer`]
    pub const fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer {
            endpoint: Some(endpoint),
        }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// Middleware that turns operations into HTTP requests and replies into `data`.
///
/// Accepts both compiled-in operations ([`GraphQLRequest`], answered with the
/// decoded [`GraphQLQuery::ResponseData`]) and [`RawOperation`]s (answered with
/// the raw `data` JSON). Each call is sent exactly once.
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    inner: S,
    endpoint: Option<Url>,
}

impl<S> GraphQLService<S> {
    /// Constructs a new [`GraphQLService`]
    pub const fn new(endpoint: Option<Url>, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

fn build_request<V: Serialize>(
    endpoint: Option<&Url>,
    payload: &OperationPayload<'_, V>,
) -> Result<HttpRequest, GraphQLServiceError> {
    let body = Bytes::from(serde_json::to_vec(payload).map_err(GraphQLServiceError::Serialization)?);
    let req = http::Request::builder();
    let req = match endpoint {
        Some(url) => req.uri(Uri::from_str(url.as_str())?),
        None => req,
    };
    let req = req
        .method(Method::POST)
        .header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )
        .body(Full::new(body))?;
    Ok(req)
}

async fn send<S>(
    mut client: S,
    operation_name: &str,
    req: HttpRequest,
) -> Result<Value, GraphQLServiceError>
where
    S: Service<HttpRequest, Response = HttpResponse, Error = HttpServiceError>,
{
    tracing::trace!(operation = operation_name, "sending operation");
    let mut resp = client.call(req).await?;
    let status_code = resp.status();
    let body = body_to_bytes(resp.body_mut())
        .await
        .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
    tracing::trace!(operation = operation_name, status = %status_code, "received reply");
    response::classify_http(status_code, body).inspect_err(|err| {
        tracing::debug!(operation = operation_name, error = %err, "operation failed");
    })
}

impl<Q, S> Service<GraphQLRequest<Q>> for GraphQLService<S>
where
    Q: GraphQLQuery + Send + Sync + 'static,
    Q::Variables: Send,
    Q::ResponseData: Send + fmt::Debug,
    S: Service<HttpRequest, Response = HttpResponse, Error = HttpServiceError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = Q::ResponseData;
    type Error = GraphQLServiceError;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(GraphQLServiceError::Transport)
    }

    fn call(&mut self, req: GraphQLRequest<Q>) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let client = synmetrix_http::service::replace_ready_service(&mut self.inner);
        let url = self.endpoint.clone();

        let fut = async move {
            let body = Q::build_query(req.into_inner());
            let http_req = build_request(url.as_ref(), &OperationPayload::from(&body))?;
            let data = send(client, body.operation_name, http_req).await?;
            decode_data::<Q::ResponseData>(data)
        };
        Box::pin(fut)
    }
}

impl<S> Service<RawOperation> for GraphQLService<S>
where
    S: Service<HttpRequest, Response = HttpResponse, Error = HttpServiceError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = Value;
    type Error = GraphQLServiceError;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(GraphQLServiceError::Transport)
    }

    fn call(&mut self, req: RawOperation) -> Self::Future {
        let client = synmetrix_http::service::replace_ready_service(&mut self.inner);
        let url = self.endpoint.clone();

        let fut = async move {
            let http_req = build_request(url.as_ref(), &req.payload())?;
            send(client, &req.name, http_req).await
        };
        Box::pin(fut)
    }
}
