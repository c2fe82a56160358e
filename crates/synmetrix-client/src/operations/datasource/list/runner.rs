use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{DatasourcesData, DatasourcesVariables};
use crate::{SynmetrixClient, SynmetrixClientError};

/// `query Datasources`
pub struct Datasources;

impl GraphQLQuery for Datasources {
    type Variables = DatasourcesVariables;
    type ResponseData = DatasourcesData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("list_query.graphql"),
            operation_name: "Datasources",
        }
    }
}

/// Lists the datasources the session can see
pub async fn run(
    variables: DatasourcesVariables,
    client: &SynmetrixClient,
) -> Result<DatasourcesData, SynmetrixClientError> {
    client.post::<Datasources>(variables).await
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use httpmock::{Method::POST, MockServer};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use synmetrix_graphql::Maybe;

    use super::run;
    use crate::{
        operations::{
            datasource::list::DatasourcesVariables,
            test_support::{client, request_body},
        },
        shared::{
            BranchesBoolExp, DatasourcesBoolExp, DatasourcesOrderBy, OrderBy, UuidComparisonExp,
        },
    };

    fn branch_filter() -> DatasourcesVariables {
        DatasourcesVariables {
            filter: DatasourcesBoolExp {
                id: UuidComparisonExp::equals("ds-1").into(),
                branches: BranchesBoolExp {
                    id: UuidComparisonExp::equals("br-1").into(),
                    ..Default::default()
                }
                .into(),
                ..Default::default()
            }
            .into(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::nothing_set(DatasourcesVariables::default(), json!({}))]
    #[case::explicit_null_filter(
        DatasourcesVariables { filter: Maybe::Null, limit: Maybe::Value(10), ..Default::default() },
        json!({ "where": null, "limit": 10 })
    )]
    #[case::paged_and_ordered(
        DatasourcesVariables {
            offset: Maybe::Value(20),
            order_by: vec![DatasourcesOrderBy { created_at: OrderBy::Desc.into(), ..Default::default() }].into(),
            ..Default::default()
        },
        json!({ "offset": 20, "order_by": [{ "created_at": "desc" }] })
    )]
    #[case::nested_branch_filter(
        branch_filter(),
        json!({ "where": { "id": { "_eq": "ds-1" }, "branches": { "id": { "_eq": "br-1" } } } })
    )]
    #[tokio::test]
    async fn sends_only_the_arguments_that_were_set(
        #[case] variables: DatasourcesVariables,
        #[case] expected: Value,
    ) -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/graphql").json_body(request_body(
                    include_str!("list_query.graphql"),
                    "Datasources",
                    expected,
                ));
                then.status(200).json_body(json!({ "data": { "datasources": [] } }));
            })
            .await;

        let data = run(variables, &client(&server)).await?;

        mock.assert_async().await;
        assert!(data.datasources.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn decodes_branches_of_each_datasource() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/graphql");
                then.status(200).json_body(json!({
                    "data": {
                        "datasources": [
                            {
                                "id": "ds-1",
                                "name": "Warehouse",
                                "db_type": "POSTGRES",
                                "team_id": "t-1",
                                "created_at": "2024-01-01T00:00:00+00:00",
                                "updated_at": "2024-01-01T00:00:00+00:00",
                                "branches": [{ "id": "br-1", "name": "main", "status": "active" }]
                            },
                            {
                                "id": "ds-2",
                                "name": "Events",
                                "db_type": "CLICKHOUSE",
                                "team_id": null,
                                "created_at": "2024-02-01T00:00:00+00:00",
                                "updated_at": "2024-02-01T00:00:00+00:00",
                                "branches": []
                            }
                        ]
                    }
                }));
            })
            .await;

        let data = run(branch_filter(), &client(&server)).await?;

        let branch_ids: Vec<&str> = data
            .datasources
            .iter()
            .flat_map(|datasource| datasource.branches.iter())
            .map(|branch| branch.id.as_str())
            .collect();
        assert_eq!(branch_ids, vec!["br-1"]);
        Ok(())
    }
}
