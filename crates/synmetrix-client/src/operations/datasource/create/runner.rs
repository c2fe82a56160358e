use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CreateDataSourceData, CreateDataSourceVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `mutation CreateDataSource`
pub struct CreateDataSource;

impl GraphQLQuery for CreateDataSource {
    type Variables = CreateDataSourceVariables;
    type ResponseData = CreateDataSourceData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("create_mutation.graphql"),
            operation_name: "CreateDataSource",
        }
    }
}

/// Registers a new datasource
pub async fn run(
    variables: CreateDataSourceVariables,
    client: &SynmetrixClient,
) -> Result<CreateDataSourceData, SynmetrixClientError> {
    client.post::<CreateDataSource>(variables).await
}
