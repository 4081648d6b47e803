//! Client configuration for the `bw` binary.
//!
//! Layers, lowest precedence first: built-in defaults, `brightworld.ron` (or
//! the file named by `--config`), `BRIGHTWORLD_API_BASE`, `--base-url`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use brightworld_client::{ClientSettings, SettingsError};
use brightworld_logging::{bw_debug, bw_info};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "brightworld.ron";
pub const BASE_URL_ENV: &str = "BRIGHTWORLD_API_BASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    base_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    max_body_bytes: Option<u64>,
}

impl ConfigFile {
    fn apply(self, settings: &mut ClientSettings) {
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(secs) = self.connect_timeout_secs {
            settings.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(secs);
        }
        if let Some(max_body_bytes) = self.max_body_bytes {
            settings.max_body_bytes = max_body_bytes;
        }
    }
}

/// Resolves client settings.
///
/// An explicit `config_path` must exist; the default file is optional.
pub fn load_settings(
    config_path: Option<&Path>,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    let file = match config_path {
        Some(path) => Some(read_config(path)?),
        None => {
            let default_path = Path::new(CONFIG_FILENAME);
            if default_path.is_file() {
                Some(read_config(default_path)?)
            } else {
                bw_debug!("No {} in current directory; using defaults", CONFIG_FILENAME);
                None
            }
        }
    };
    if let Some(file) = file {
        file.apply(&mut settings);
    }

    if let Some(base_url) = env_base_url.filter(|url| !url.trim().is_empty()) {
        settings.base_url = base_url;
    }
    if let Some(base_url) = cli_base_url {
        settings.base_url = base_url;
    }

    settings.validate()?;
    bw_info!("Using API base {}", settings.normalized_base());
    Ok(settings)
}

fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
