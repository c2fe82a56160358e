use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CreateBranchData, CreateBranchVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `mutation CreateBranch`
pub struct CreateBranch;

impl GraphQLQuery for CreateBranch {
    type Variables = CreateBranchVariables;
    type ResponseData = CreateBranchData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("create_mutation.graphql"),
            operation_name: "CreateBranch",
        }
    }
}

/// Opens a branch on a datasource
pub async fn run(
    variables: CreateBranchVariables,
    client: &SynmetrixClient,
) -> Result<CreateBranchData, SynmetrixClientError> {
    client.post::<CreateBranch>(variables).await
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use httpmock::{Method::POST, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use synmetrix_graphql::Maybe;

    use super::run;
    use crate::{
        operations::{
            branch::create::CreateBranchVariables,
            test_support::{client, request_body},
        },
        shared::BranchesInsertInput,
    };

    #[tokio::test]
    async fn creates_an_active_branch() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/graphql").json_body(request_body(
                    include_str!("create_mutation.graphql"),
                    "CreateBranch",
                    json!({
                        "object": {
                            "name": "main",
                            "status": "active",
                            "datasource_id": "ds-1",
                            "user_id": "u-1"
                        }
                    }),
                ));
                then.status(200).json_body(json!({
                    "data": { "insert_branches_one": { "id": "br-1", "name": "main", "status": "active" } }
                }));
            })
            .await;

        let variables = CreateBranchVariables {
            object: BranchesInsertInput {
                name: Maybe::Value("main".to_string()),
                status: Maybe::Value("active".to_string()),
                datasource_id: Maybe::Value("ds-1".to_string()),
                user_id: Maybe::Value("u-1".to_string()),
            },
        };
        let data = run(variables, &client(&server)).await?;

        mock.assert_async().await;
        let branch = data.insert_branches_one.unwrap();
        assert_eq!(branch.id, "br-1");
        assert_eq!(branch.status.as_deref(), Some("active"));
        Ok(())
    }
}
