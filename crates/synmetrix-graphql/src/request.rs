use std::{collections::BTreeMap, fmt};

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::Maybe;

/// Which transport an operation travels over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Sent over HTTP
    Query,
    /// Sent over HTTP
    Mutation,
    /// Sent over a websocket
    Subscription,
}

impl OperationKind {
    /// The kind of the first operation `document` defines.
    ///
    /// A document opening with a bare selection set is a query. Fragment
    /// definitions are skipped. Returns `None` when no operation is defined.
    pub fn of_document(document: &str) -> Option<OperationKind> {
        let mut depth = 0usize;
        let mut in_fragment = false;
        let mut chars = document.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            match c {
                '#' => {
                    for (_, c) in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                '"' => {
                    while let Some((_, c)) = chars.next() {
                        match c {
                            '\\' => {
                                chars.next();
                            }
                            '"' => break,
                            _ => {}
                        }
                    }
                }
                '{' if depth == 0 && !in_fragment => return Some(OperationKind::Query),
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        in_fragment = false;
                    }
                }
                c if depth == 0 && (c.is_ascii_alphabetic() || c == '_') => {
                    let mut end = start + c.len_utf8();
                    while let Some(&(at, c)) = chars.peek() {
                        if !(c.is_ascii_alphanumeric() || c == '_') {
                            break;
                        }
                        end = at + c.len_utf8();
                        chars.next();
                    }
                    match &document[start..end] {
                        _ if in_fragment => {}
                        "query" => return Some(OperationKind::Query),
                        "mutation" => return Some(OperationKind::Mutation),
                        "subscription" => return Some(OperationKind::Subscription),
                        "fragment" => in_fragment = true,
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        None
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// Variables for an operation assembled at runtime.
///
/// Entries holding [`Maybe::Unset`] are dropped when the map is serialized,
/// entries holding [`Maybe::Null`] are sent as `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables(BTreeMap<String, Maybe<Value>>);

impl Variables {
    /// An empty set of variables
    pub fn new() -> Variables {
        Variables::default()
    }

    /// Adds a variable, returning the map for chaining
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Maybe<Value>>) -> Variables {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a variable
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Maybe<Value>>) {
        self.0.insert(name.into(), value.into());
    }

    /// Looks up a variable, whatever its state
    pub fn get(&self, name: &str) -> Option<&Maybe<Value>> {
        self.0.get(name)
    }

    /// Number of variables that will actually be sent
    pub fn len(&self) -> usize {
        self.0.values().filter(|value| !value.is_unset()).count()
    }

    /// Whether nothing will be sent
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>> FromIterator<(K, Maybe<Value>)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, Maybe<Value>)>>(iter: I) -> Self {
        Variables(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.0.iter().filter(|(_, value)| !value.is_unset()) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// An operation whose document and variables are only known at runtime
#[derive(Clone, Debug, PartialEq)]
pub struct RawOperation {
    /// Transport selector
    pub kind: OperationKind,
    /// Sent as `operationName`
    pub name: String,
    /// GraphQL document text
    pub document: String,
    /// Variables, possibly holding unset entries
    pub variables: Variables,
}

impl RawOperation {
    /// Creates an operation with no variables
    pub fn new(kind: OperationKind, name: impl Into<String>, document: impl Into<String>) -> Self {
        RawOperation {
            kind,
            name: name.into(),
            document: document.into(),
            variables: Variables::new(),
        }
    }

    /// Replaces the operation's variables
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub(crate) fn payload(&self) -> OperationPayload<'_, &Variables> {
        OperationPayload {
            query: &self.document,
            variables: &self.variables,
            operation_name: &self.name,
        }
    }
}

/// Wrapper around [`GraphQLQuery::Variables`] for a compiled-in operation
pub struct GraphQLRequest<Q: GraphQLQuery> {
    variables: Q::Variables,
}

impl<Q> fmt::Debug for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:?}", self.variables)
    }
}

impl<Q> PartialEq for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl<Q: GraphQLQuery> GraphQLRequest<Q> {
    /// Constructs a new [`GraphQLRequest`]
    pub fn new(variables: Q::Variables) -> GraphQLRequest<Q> {
        GraphQLRequest { variables }
    }

    /// Consumes the [`GraphQLRequest`] and produces the inner [`GraphQLQuery::Variables`] object
    pub fn into_inner(self) -> Q::Variables {
        self.variables
    }
}

/// The body of a GraphQL-over-HTTP request, and the payload of a websocket `subscribe`
#[derive(Serialize, Debug)]
pub(crate) struct OperationPayload<'a, V> {
    pub(crate) query: &'a str,
    pub(crate) variables: V,
    #[serde(rename = "operationName")]
    pub(crate) operation_name: &'a str,
}

impl<'a, V> From<&'a QueryBody<V>> for OperationPayload<'a, &'a V> {
    fn from(body: &'a QueryBody<V>) -> Self {
        OperationPayload {
            query: body.query,
            variables: &body.variables,
            operation_name: body.operation_name,
        }
    }
}
