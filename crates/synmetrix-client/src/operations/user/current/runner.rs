use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CurrentUserData, CurrentUserVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `query CurrentUser`
pub struct CurrentUser;

impl GraphQLQuery for CurrentUser {
    type Variables = CurrentUserVariables;
    type ResponseData = CurrentUserData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("current_query.graphql"),
            operation_name: "CurrentUser",
        }
    }
}

/// Fetches a user together with the teams they belong to
pub async fn run(
    variables: CurrentUserVariables,
    client: &SynmetrixClient,
) -> Result<CurrentUserData, SynmetrixClientError> {
    client.post::<CurrentUser>(variables).await
}
