use anyhow::Context;
use clap::Parser;
use synmetrix_client::{
    auth::parse_access_token,
    operations::user::current::{self, CurrentUserVariables},
};

use crate::{
    Result,
    command::SynmetrixOutput,
    options::{ApiOpt, CredentialsOpt},
};

#[derive(Debug, Parser)]
pub struct Whoami {
    #[command(flatten)]
    api: ApiOpt,

    #[command(flatten)]
    credentials: CredentialsOpt,
}

impl Whoami {
    pub async fn run(&self) -> Result<SynmetrixOutput> {
        let access_token = self.credentials.access_token(&self.api).await?;
        let claims = parse_access_token(&access_token)?;
        let user_id = claims
            .user_id
            .clone()
            .context("the access token does not name a user")?;

        let client = self.api.client(&access_token)?;
        let data = current::run(CurrentUserVariables::new(user_id), &client).await?;

        Ok(SynmetrixOutput::Whoami {
            claims,
            user: data.users_by_pk,
        })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::POST, MockServer};
    use serde_json::json;
    use speculoos::prelude::*;

    use super::Whoami;
    use crate::{
        command::{SynmetrixOutput, test_support::access_token},
        options::{ApiOpt, CredentialsOpt},
    };

    #[tokio::test]
    async fn looks_up_the_token_owner() {
        let server = MockServer::start_async().await;
        let token = access_token("u-1");
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/graphql")
                    .header("authorization", format!("Bearer {token}"))
                    .json_body_includes(json!({ "variables": { "id": "u-1" } }).to_string());
                then.status(200).json_body(json!({
                    "data": {
                        "users_by_pk": {
                            "id": "u-1",
                            "display_name": "Alice",
                            "avatar_url": null,
                            "created_at": "2024-01-01T00:00:00+00:00",
                            "updated_at": "2024-01-01T00:00:00+00:00",
                            "members": [{ "id": "m-1", "team": { "id": "t-1", "name": "Analytics" } }]
                        }
                    }
                }));
            })
            .await;

        let whoami = Whoami {
            api: ApiOpt {
                base_url: server.base_url(),
            },
            credentials: CredentialsOpt {
                access_token: Some(access_token("u-1")),
                login: None,
                password: None,
            },
        };
        let output = whoami.run().await.unwrap();

        mock.assert_async().await;
        assert_that!(output).matches(|output| {
            matches!(
                output,
                SynmetrixOutput::Whoami { user: Some(user), .. }
                    if user.display_name.as_deref() == Some("Alice")
            )
        });
    }
}
