use graphql_client::GraphQLQuery;
use serde_json::Value;
use synmetrix_graphql::{
    GraphQLLayer, GraphQLRequest, GraphQLService, OperationKind, RawOperation,
    subscription::{GraphQLStream, GraphQLSubscriber},
};
use synmetrix_http::{
    HttpService, HttpServiceConfig, ReqwestService, extend_headers::ExtendHeadersLayer,
};
use tower::{Service, ServiceBuilder, ServiceExt};

use crate::{ClientConfig, SynmetrixClientError};

/// Client for the Synmetrix GraphQL API.
///
/// Cheap to clone; clones share the connection pool. The client holds no
/// session state beyond the headers it was configured with.
#[derive(Clone, Debug)]
pub struct SynmetrixClient {
    config: ClientConfig,
    service: GraphQLService<HttpService>,
    subscriber: GraphQLSubscriber,
}

impl SynmetrixClient {
    /// Creates a client backed by its own reqwest connection pool
    pub fn new(config: ClientConfig) -> Result<SynmetrixClient, SynmetrixClientError> {
        let http_config = HttpServiceConfig::builder()
            .and_timeout(*config.timeout())
            .build();
        let http_service = ReqwestService::builder()
            .config(http_config)
            .build()
            .map_err(synmetrix_http::HttpServiceError::from)?;
        Ok(SynmetrixClient::with_http_service(
            config,
            http_service.into(),
        ))
    }

    /// Creates a client that sends queries and mutations through `http_service`
    pub fn with_http_service(config: ClientConfig, http_service: HttpService) -> SynmetrixClient {
        let http_service = HttpService::new(
            ServiceBuilder::new()
                .layer(ExtendHeadersLayer::new(config.headers().clone()))
                .service(http_service),
        );
        let service = ServiceBuilder::new()
            .layer(GraphQLLayer::new(config.endpoint().clone()))
            .service(http_service);
        let mut subscriber =
            GraphQLSubscriber::new(config.ws_endpoint().clone(), config.headers().clone());
        if let Some(timeout) = config.timeout() {
            subscriber = subscriber.with_timeout(*timeout);
        }
        SynmetrixClient {
            config,
            service,
            subscriber,
        }
    }

    /// The configuration this client was built with
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a compiled-in query or mutation and decodes its `data`
    pub async fn post<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, SynmetrixClientError>
    where
        Q: GraphQLQuery + Send + Sync + 'static,
        Q::Variables: Send,
        Q::ResponseData: Send + std::fmt::Debug,
    {
        let mut service = self.service.clone();
        let service = ServiceExt::<GraphQLRequest<Q>>::ready(&mut service).await?;
        let data = service.call(GraphQLRequest::<Q>::new(variables)).await?;
        Ok(data)
    }

    /// Sends a runtime-assembled query or mutation, returning its raw `data`
    pub async fn execute(&self, operation: RawOperation) -> Result<Value, SynmetrixClientError> {
        if operation.kind == OperationKind::Subscription {
            return Err(SynmetrixClientError::UnsupportedOperationKind {
                kind: operation.kind,
                method: "execute",
            });
        }
        let mut service = self.service.clone();
        let service = ServiceExt::<RawOperation>::ready(&mut service).await?;
        Ok(service.call(operation).await?)
    }

    /// Opens a compiled-in subscription; nothing connects until the stream is polled
    pub fn subscribe<Q>(
        &self,
        variables: Q::Variables,
    ) -> Result<GraphQLStream<Q::ResponseData>, SynmetrixClientError>
    where
        Q: GraphQLQuery,
        Q::ResponseData: Send + 'static,
    {
        let body = Q::build_query(variables);
        match OperationKind::of_document(body.query) {
            Some(OperationKind::Subscription) => Ok(self.subscriber.subscribe_body(&body)),
            kind => Err(SynmetrixClientError::UnsupportedOperationKind {
                kind: kind.unwrap_or(OperationKind::Query),
                method: "subscribe",
            }),
        }
    }

    /// Opens a runtime-assembled subscription
    pub fn subscribe_raw(
        &self,
        operation: RawOperation,
    ) -> Result<GraphQLStream<Value>, SynmetrixClientError> {
        if operation.kind != OperationKind::Subscription {
            return Err(SynmetrixClientError::UnsupportedOperationKind {
                kind: operation.kind,
                method: "subscribe_raw",
            });
        }
        Ok(self.subscriber.subscribe_raw(operation))
    }
}
