use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{CurrentDataSourceData, CurrentDataSourceVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `query CurrentDataSource`
pub struct CurrentDataSource;

impl GraphQLQuery for CurrentDataSource {
    type Variables = CurrentDataSourceVariables;
    type ResponseData = CurrentDataSourceData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("current_query.graphql"),
            operation_name: "CurrentDataSource",
        }
    }
}

/// Fetches one datasource and its branches
pub async fn run(
    variables: CurrentDataSourceVariables,
    client: &SynmetrixClient,
) -> Result<CurrentDataSourceData, SynmetrixClientError> {
    client.post::<CurrentDataSource>(variables).await
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use httpmock::{Method::POST, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::run;
    use crate::operations::{
        datasource::current::CurrentDataSourceVariables,
        test_support::{client, request_body},
    };

    #[tokio::test]
    async fn decodes_datasource_with_branches() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/graphql").json_body(request_body(
                    include_str!("current_query.graphql"),
                    "CurrentDataSource",
                    json!({ "id": "ds-1" }),
                ));
                then.status(200).json_body(json!({
                    "data": {
                        "datasources_by_pk": {
                            "id": "ds-1",
                            "name": "Warehouse",
                            "db_type": "POSTGRES",
                            "db_params": { "host": "db.internal", "port": 5432 },
                            "team_id": "t-1",
                            "created_at": "2024-01-01T00:00:00+00:00",
                            "updated_at": "2024-01-01T00:00:00+00:00",
                            "branches": [
                                { "id": "br-1", "name": "main", "status": "active", "created_at": null }
                            ]
                        }
                    }
                }));
            })
            .await;

        let data = run(CurrentDataSourceVariables::new("ds-1"), &client(&server)).await?;

        mock.assert_async().await;
        let datasource = data.datasources_by_pk.unwrap();
        assert_eq!(datasource.db_type.as_deref(), Some("POSTGRES"));
        assert_eq!(datasource.db_params, Some(json!({ "host": "db.internal", "port": 5432 })));
        assert_eq!(datasource.branches.len(), 1);
        assert_eq!(datasource.branches[0].status.as_deref(), Some("active"));
        Ok(())
    }
}
