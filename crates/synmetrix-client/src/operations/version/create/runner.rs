use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CreateVersionData, CreateVersionVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `mutation CreateVersion`
pub struct CreateVersion;

impl GraphQLQuery for CreateVersion {
    type Variables = CreateVersionVariables;
    type ResponseData = CreateVersionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("create_mutation.graphql"),
            operation_name: "CreateVersion",
        }
    }
}

/// Records a new version of a branch, inserting its data models in the same mutation
pub async fn run(
    variables: CreateVersionVariables,
    client: &SynmetrixClient,
) -> Result<CreateVersionData, SynmetrixClientError> {
    client.post::<CreateVersion>(variables).await
}
