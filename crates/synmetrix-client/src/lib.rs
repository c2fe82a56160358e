//! Typed client for the Synmetrix GraphQL API and its auth service.

/// Access token parsing and the REST auth service
pub mod auth;
mod client;
mod config;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// One module per backend operation
pub mod operations;

/// Input, filter and scalar types shared across operations
pub mod shared;

pub use client::SynmetrixClient;
pub use config::{ClientConfig, GRAPHQL_PATH, endpoint_from_base_url};
pub use error::SynmetrixClientError;

pub use synmetrix_graphql::{
    GraphQLErrors, GraphQLServiceError, Maybe, OperationKind, RawOperation, Variables,
    subscription::GraphQLStream,
};
