mod models;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use chrono::NaiveDateTime;
use clap::Parser;
use synmetrix_client::{
    Maybe, SynmetrixClient,
    auth::parse_access_token,
    operations::{
        datasource::{
            current::{self as current_datasource, CurrentDataSourceVariables},
            list::{self as datasources, DatasourcesVariables},
        },
        version::create::{self as create_version, CreateVersionVariables},
    },
    shared::{
        BranchesBoolExp, DataschemasArrRelInsertInput, DataschemasInsertInput,
        DatasourcesBoolExp, UuidComparisonExp, VersionsInsertInput,
    },
};

use self::models::{DataModel, checksum, discover};
use crate::{
    Result,
    command::SynmetrixOutput,
    options::{ApiOpt, CredentialsOpt},
};

/// Where an upload writes its log when no `--log-file` is given
pub(crate) fn default_log_file(now: NaiveDateTime) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("logs/cube_upload_{}.log", now.format("%Y%m%d_%H%M%S")))
}

#[derive(Debug, Parser)]
pub struct UploadDataModels {
    #[command(flatten)]
    api: ApiOpt,

    /// Datasource the models describe
    #[arg(long = "datasource-id", env = "SYNMETRIX_DATASOURCE_ID")]
    datasource_id: String,

    /// Branch of the datasource that receives the new version
    #[arg(long = "branch-id", env = "SYNMETRIX_BRANCH_ID")]
    branch_id: String,

    /// Directory holding the `.yml`/`.yaml` cube definitions
    #[arg(long = "data-models-path", env = "SYNMETRIX_DATA_MODELS_PATH")]
    data_models_path: Utf8PathBuf,

    #[command(flatten)]
    credentials: CredentialsOpt,
}

impl UploadDataModels {
    pub async fn run(&self) -> Result<SynmetrixOutput> {
        tracing::info!("Starting cube model upload from {}", self.data_models_path);
        if !self.data_models_path.exists() {
            tracing::error!("Models path not found: {}", self.data_models_path);
            bail!("Models path not found: {}", self.data_models_path);
        }

        let access_token = self.credentials.access_token(&self.api).await?;
        let user_id = parse_access_token(&access_token)?
            .user_id
            .context("the access token does not name a user")?;
        let client = self.api.client(&access_token)?;

        if !verify_branch(&client, &self.datasource_id, &self.branch_id).await? {
            bail!(
                "Branch {} not found for datasource {}",
                self.branch_id,
                self.datasource_id
            );
        }

        let discovery = discover(&self.data_models_path)?;
        if discovery.files.is_empty() {
            tracing::warn!("No YAML model files found");
            return Ok(SynmetrixOutput::NothingToUpload {
                reason: "No YAML model files found".to_string(),
            });
        }
        if discovery.models.is_empty() {
            tracing::warn!("No valid models found");
            return Ok(SynmetrixOutput::NothingToUpload {
                reason: "No valid models found".to_string(),
            });
        }

        let output = self
            .upload(&client, &discovery.models, &user_id)
            .await
            .inspect_err(|err| tracing::error!("Upload failed: {err:#}"))?;
        tracing::info!("Successfully uploaded {} models", discovery.models.len());
        Ok(output)
    }

    async fn upload(
        &self,
        client: &SynmetrixClient,
        models: &[DataModel],
        user_id: &str,
    ) -> Result<SynmetrixOutput> {
        tracing::info!("Uploading {} cube models...", models.len());
        let checksum = checksum(models);

        let data = models
            .iter()
            .map(|model| {
                tracing::debug!(name = %model.name, path = %model.path, "adding model");
                DataschemasInsertInput {
                    name: Maybe::Value(model.name.clone()),
                    code: Maybe::Value(model.code.clone()),
                    user_id: Maybe::Value(user_id.to_string()),
                    datasource_id: Maybe::Value(self.datasource_id.clone()),
                    ..Default::default()
                }
            })
            .collect();
        let variables = CreateVersionVariables {
            object: VersionsInsertInput {
                user_id: Maybe::Value(user_id.to_string()),
                checksum: Maybe::Value(checksum.clone()),
                branch_id: Maybe::Value(self.branch_id.clone()),
                dataschemas: Maybe::Value(DataschemasArrRelInsertInput { data }),
            },
        };

        let result = create_version::run(variables, client).await?;
        tracing::info!("Upload successful");
        tracing::debug!(?result, "created version");

        Ok(SynmetrixOutput::Uploaded {
            models: models.iter().map(|model| model.name.clone()).collect(),
            checksum,
            version: result.insert_versions_one,
        })
    }
}

/// Whether `branch_id` belongs to `datasource_id`
async fn verify_branch(
    client: &SynmetrixClient,
    datasource_id: &str,
    branch_id: &str,
) -> Result<bool> {
    tracing::info!("Verifying branch {branch_id} for datasource {datasource_id}");

    let datasource =
        current_datasource::run(CurrentDataSourceVariables::new(datasource_id), client).await?;
    if datasource.datasources_by_pk.is_none() {
        tracing::error!("Datasource {datasource_id} not found");
        return Ok(false);
    }

    let variables = DatasourcesVariables {
        filter: Maybe::Value(DatasourcesBoolExp {
            id: Maybe::Value(UuidComparisonExp::equals(datasource_id)),
            branches: Maybe::Value(BranchesBoolExp {
                id: Maybe::Value(UuidComparisonExp::equals(branch_id)),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    let found = datasources::run(variables, client).await?;
    let has_branch = found
        .datasources
        .iter()
        .flat_map(|datasource| &datasource.branches)
        .any(|branch| branch.id == branch_id);

    if has_branch {
        tracing::info!("Branch verification successful");
    } else {
        tracing::error!("Branch {branch_id} not found for datasource {datasource_id}");
    }
    Ok(has_branch)
}
