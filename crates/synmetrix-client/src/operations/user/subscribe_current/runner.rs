use graphql_client::{GraphQLQuery, QueryBody};
use synmetrix_graphql::subscription::GraphQLStream;

use super::types::{SubCurrentUserData, SubCurrentUserVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `subscription SubCurrentUser`
pub struct SubCurrentUser;

impl GraphQLQuery for SubCurrentUser {
    type Variables = SubCurrentUserVariables;
    type ResponseData = SubCurrentUserData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("subscribe_current_subscription.graphql"),
            operation_name: "SubCurrentUser",
        }
    }
}

/// Follows a user, yielding its state every time the server pushes one.
///
/// Nothing is sent until the stream is first polled; dropping it closes the
/// connection.
pub fn run(
    variables: SubCurrentUserVariables,
    client: &SynmetrixClient,
) -> Result<GraphQLStream<SubCurrentUserData>, SynmetrixClientError> {
    client.subscribe::<SubCurrentUser>(variables)
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use graphql_client::GraphQLQuery;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;
    use url::Url;

    use super::{SubCurrentUser, run};
    use crate::{
        ClientConfig, SynmetrixClient, operations::user::subscribe_current::SubCurrentUserVariables,
    };

    #[test]
    fn builds_a_subscription_document() {
        let body = SubCurrentUser::build_query(SubCurrentUserVariables::new("abc-123"));

        assert_that!(body.query.trim_start()).starts_with("subscription SubCurrentUser(");
        assert_eq!(body.operation_name, "SubCurrentUser");
        assert_eq!(
            serde_json::to_value(&body.variables).unwrap(),
            json!({ "id": "abc-123" })
        );
    }

    #[tokio::test]
    async fn refused_connections_surface_on_first_poll() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ClientConfig::builder()
            .endpoint(Url::parse(&format!("http://{addr}/v1/graphql")).unwrap())
            .build()
            .unwrap();
        let client = SynmetrixClient::new(config).unwrap();

        let mut stream = run(SubCurrentUserVariables::new("abc-123"), &client).unwrap();

        let first = stream.next().await;
        assert_that!(first)
            .is_some()
            .matches(|item| matches!(item, Err(err) if err.is_transport()));
        assert_that!(stream.next().await).is_none();
    }
}
