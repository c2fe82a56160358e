use anyhow::anyhow;
use clap::Parser;

use super::ApiOpt;
use crate::Result;

#[derive(Clone, Parser)]
pub struct CredentialsOpt {
    /// JWT access token
    #[arg(long = "access-token", env = "SYNMETRIX_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Email to log in with when no access token is given
    #[arg(long, env = "SYNMETRIX_LOGIN", requires = "password")]
    pub login: Option<String>,

    /// Password to log in with when no access token is given
    #[arg(long, env = "SYNMETRIX_PASSWORD", hide_env_values = true, requires = "login")]
    pub password: Option<String>,
}

impl std::fmt::Debug for CredentialsOpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsOpt")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CredentialsOpt {
    /// The given access token, or a fresh one obtained by logging in
    pub(crate) async fn access_token(&self, api: &ApiOpt) -> Result<String> {
        match (&self.access_token, &self.login, &self.password) {
            (Some(access_token), _, _) => Ok(access_token.clone()),
            (None, Some(login), Some(password)) => {
                tracing::info!("Authenticating user...");
                let tokens = api
                    .auth_client()?
                    .login(login, password, false)
                    .await
                    .inspect_err(|err| tracing::error!("Authentication failed: {err}"))?;
                tracing::info!("Authentication successful");
                Ok(tokens.access_token)
            }
            _ => Err(anyhow!(
                "Either an access token or a login and password must be provided"
            )),
        }
    }
}
