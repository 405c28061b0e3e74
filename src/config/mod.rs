pub mod types;

use crate::error::{ConfigError, Result, ValidatorError};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".template-validator.toml";

/// Get the global config file path (~/.template-validator.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.template-validator.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<types::Config> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}

/// Load configuration.
///
/// An explicit path must exist and parse: the user asked for that file, so
/// silently running with other settings would hide the mistake. Otherwise the
/// local config in `search_dir` is tried, then the global one, then defaults.
/// Discovered files are optional, so one that cannot be read or parsed is
/// skipped with a warning and the search continues.
pub fn load_config(explicit: Option<&Path>, search_dir: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let content = fs::read_to_string(path)?;
        return parse_config(&content);
    }

    let candidates = search_dir
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        let loaded = fs::read_to_string(&candidate)
            .map_err(ValidatorError::from)
            .and_then(|c| parse_config(&c));
        match loaded {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring {}: {}", candidate.display(), e),
        }
    }

    Ok(types::Config::default())
}
