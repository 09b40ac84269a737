use std::fs;
use std::path::{Path, PathBuf};

use super::core::HdbmatchConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".hdbmatch.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with the file it came from, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: HdbmatchConfig,
    pub source: Option<PathBuf>,
}

/// Parse configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<HdbmatchConfig> {
    Ok(toml::from_str::<HdbmatchConfig>(contents)?)
}

/// Read and parse a configuration file the user named explicitly.
pub fn load_config_from_path(path: &Path) -> Result<HdbmatchConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered config path; unreadable or invalid files are skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<HdbmatchConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<config dir>/hdbmatch/config.toml`, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hdbmatch").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config directory.
pub fn discover_config_from(start: PathBuf, user_config: Option<PathBuf>) -> LoadedConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config)
        .find_map(|path| {
            try_load_config_from_path(&path).map(|config| LoadedConfig {
                config,
                source: Some(path),
            })
        })
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig::default()
        })
}

/// Load configuration: an explicit path must parse, discovery never fails.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        return Ok(LoadedConfig {
            config: load_config_from_path(path)?,
            source: Some(path.to_path_buf()),
        });
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok(LoadedConfig::default());
        }
    };
    Ok(discover_config_from(current, user_config_path()))
}
