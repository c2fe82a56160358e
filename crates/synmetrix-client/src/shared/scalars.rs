//! Hasura scalars as they travel over the wire

/// `uuid`, kept in its textual form
pub type Uuid = String;

/// `timestamptz`, an ISO 8601 timestamp with offset
pub type Timestamptz = String;

/// `jsonb`, arbitrary JSON
pub type Jsonb = serde_json::Value;
