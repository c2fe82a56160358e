use camino::{Utf8Path, Utf8PathBuf};
use md5::{Digest, Md5};
use serde_yaml::Value;

use crate::Result;

const EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// A cube definition file, uploaded verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataModel {
    /// File name, which becomes the model's name
    pub(crate) name: String,
    pub(crate) path: Utf8PathBuf,
    pub(crate) code: String,
}

/// What a scan of the models directory turned up
#[derive(Debug, Default)]
pub(crate) struct Discovery {
    /// Every `.yml` and `.yaml` file, valid or not
    pub(crate) files: Vec<Utf8PathBuf>,
    /// The files that define cubes
    pub(crate) models: Vec<DataModel>,
}

/// Collects the YAML files directly inside `dir` (`.yml` first, then `.yaml`,
/// each in name order) and keeps those whose top level is a mapping with a
/// `cubes` key.
///
/// Files that cannot be read or parsed are logged and skipped.
pub(crate) fn discover(dir: &Utf8Path) -> Result<Discovery> {
    let mut discovery = Discovery::default();
    if !dir.is_dir() {
        return Ok(discovery);
    }

    let mut entries: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    for extension in EXTENSIONS {
        discovery.files.extend(
            entries
                .iter()
                .filter(|path| path.extension() == Some(extension))
                .cloned(),
        );
    }
    tracing::info!("Found {} YAML files", discovery.files.len());

    for path in &discovery.files {
        let name = path.file_name().unwrap_or(path.as_str()).to_string();
        tracing::info!("Processing: {name}");
        match load(path) {
            Ok(Some(code)) => {
                tracing::info!("Validated: {name}");
                discovery.models.push(DataModel {
                    name,
                    path: path.clone(),
                    code,
                });
            }
            Ok(None) => {}
            Err(err) => tracing::error!("Error processing {name}: {err:#}"),
        }
    }
    Ok(discovery)
}

fn load(path: &Utf8Path) -> Result<Option<String>> {
    let code = std::fs::read_to_string(path)?;
    let document: Value = match serde_yaml::from_str(&code) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!("YAML parse error in {path}: {err}");
            return Ok(None);
        }
    };
    let Some(mapping) = document.as_mapping() else {
        tracing::warn!("Invalid format in {path}");
        return Ok(None);
    };
    if !mapping.contains_key("cubes") {
        tracing::warn!("No cubes found in {path}");
        return Ok(None);
    }
    Ok(Some(code))
}

/// MD5 of every model's code, concatenated in upload order, as lowercase hex
pub(crate) fn checksum(models: &[DataModel]) -> String {
    let mut hasher = Md5::new();
    for model in models {
        hasher.update(model.code.as_bytes());
    }
    hex::encode(hasher.finalize())
}
