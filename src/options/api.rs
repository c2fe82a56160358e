use clap::Parser;
use synmetrix_client::{
    ClientConfig, SynmetrixClient, auth::AuthClient, endpoint_from_base_url,
};

use crate::Result;

#[derive(Debug, Clone, Parser)]
pub struct ApiOpt {
    /// Base URL of the Synmetrix deployment, such as https://app.synmetrix.org
    #[arg(long = "base-url", env = "SYNMETRIX_BASE_URL")]
    pub base_url: String,
}

impl ApiOpt {
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// A GraphQL client acting as the owner of `access_token`
    pub(crate) fn client(&self, access_token: &str) -> Result<SynmetrixClient> {
        let config = ClientConfig::builder()
            .endpoint(endpoint_from_base_url(self.base_url())?)
            .access_token(access_token)
            .build()?;
        tracing::debug!(endpoint = %config.endpoint(), "initialized GraphQL client");
        Ok(SynmetrixClient::new(config)?)
    }

    pub(crate) fn auth_client(&self) -> Result<AuthClient> {
        Ok(AuthClient::from_base_url(self.base_url())?)
    }
}
