use clap::{Parser, Subcommand};
use synmetrix_client::auth::parse_access_token;

use crate::{Result, command::SynmetrixOutput, options::ApiOpt};

#[derive(Debug, Parser)]
pub struct Token {
    #[command(subcommand)]
    command: TokenCommand,
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Print the claims of an access token. The signature is not checked.
    Decode {
        /// The access token
        #[arg(env = "SYNMETRIX_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Trade a refresh token for a new token pair
    Refresh {
        #[command(flatten)]
        api: ApiOpt,

        /// The refresh token
        #[arg(long = "refresh-token", env = "SYNMETRIX_REFRESH_TOKEN", hide_env_values = true)]
        refresh_token: String,
    },
}

impl Token {
    pub async fn run(&self) -> Result<SynmetrixOutput> {
        match &self.command {
            TokenCommand::Decode { token } => {
                Ok(SynmetrixOutput::TokenClaims(parse_access_token(token)?))
            }
            TokenCommand::Refresh { api, refresh_token } => {
                let tokens = api.auth_client()?.refresh_token(refresh_token).await?;
                Ok(SynmetrixOutput::Tokens(tokens))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;

    use super::{Token, TokenCommand};
    use crate::{command::{SynmetrixOutput, test_support::access_token}, options::ApiOpt};

    #[tokio::test]
    async fn decode_reads_claims_offline() {
        let token = Token {
            command: TokenCommand::Decode {
                token: access_token("u-1"),
            },
        };

        let output = token.run().await.unwrap();

        assert_that!(output).matches(|output| {
            matches!(output, SynmetrixOutput::TokenClaims(claims) if claims.user_id.as_deref() == Some("u-1"))
        });
    }

    #[tokio::test]
    async fn decode_rejects_garbage() {
        let token = Token {
            command: TokenCommand::Decode {
                token: "garbage".to_string(),
            },
        };
        assert_that!(token.run().await).is_err();
    }

    #[tokio::test]
    async fn refresh_returns_the_new_pair() {
        let server = MockServer::start_async().await;
        let jwt = access_token("u-1");
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/auth/token/refresh")
                    .query_param("refresh_token", "r-1");
                then.status(200)
                    .json_body(json!({ "jwt_token": jwt, "refresh_token": "r-2" }));
            })
            .await;
        let token = Token {
            command: TokenCommand::Refresh {
                api: ApiOpt {
                    base_url: server.base_url(),
                },
                refresh_token: "r-1".to_string(),
            },
        };

        let output = token.run().await.unwrap();

        match output {
            SynmetrixOutput::Tokens(tokens) => {
                assert_eq!(tokens.refresh_token, "r-2");
                assert_eq!(tokens.user_id.as_deref(), Some("u-1"));
            }
            other => panic!("unexpected output {other:?}"),
        }
    }
}
