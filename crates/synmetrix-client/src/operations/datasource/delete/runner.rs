use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{DeleteDataSourceData, DeleteDataSourceVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `mutation DeleteDataSource`
pub struct DeleteDataSource;

impl GraphQLQuery for DeleteDataSource {
    type Variables = DeleteDataSourceVariables;
    type ResponseData = DeleteDataSourceData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("delete_mutation.graphql"),
            operation_name: "DeleteDataSource",
        }
    }
}

/// Deletes a datasource with everything that hangs off it
pub async fn run(
    variables: DeleteDataSourceVariables,
    client: &SynmetrixClient,
) -> Result<DeleteDataSourceData, SynmetrixClientError> {
    client.post::<DeleteDataSource>(variables).await
}
