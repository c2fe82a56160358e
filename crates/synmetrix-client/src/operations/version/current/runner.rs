use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CurrentVersionData, CurrentVersionVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `query CurrentVersion`
pub struct CurrentVersion;

impl GraphQLQuery for CurrentVersion {
    type Variables = CurrentVersionVariables;
    type ResponseData = CurrentVersionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("current_query.graphql"),
            operation_name: "CurrentVersion",
        }
    }
}

/// Fetches the latest version of a branch with its data models
pub async fn run(
    variables: CurrentVersionVariables,
    client: &SynmetrixClient,
) -> Result<CurrentVersionData, SynmetrixClientError> {
    client.post::<CurrentVersion>(variables).await
}
