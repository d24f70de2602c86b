use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AssessConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".assessmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<AssessConfig, String> {
    let config = toml::from_str::<AssessConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Relative framework paths are resolved against the config file's directory.
fn anchor_paths(mut config: AssessConfig, config_path: &Path) -> AssessConfig {
    if let (Some(framework), Some(dir)) = (config.framework.as_ref(), config_path.parent()) {
        if framework.is_relative() {
            config.framework = Some(dir.join(framework));
        }
    }
    config
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AssessConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(anchor_paths(config, config_path))
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Load an explicitly requested config file; failures are errors, not fallbacks.
pub fn load_config_from_path(config_path: &Path) -> Result<AssessConfig> {
    let contents = read_config_file(config_path)
        .map_err(|e| Error::input(config_path, format!("cannot read config: {e}")))?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    Ok(anchor_paths(config, config_path))
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Per-user config location, e.g. `~/.config/assessmap/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assessmap").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config, falling back to defaults.
pub fn load_config_from(start: PathBuf) -> AssessConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AssessConfig::default()
        })
}

pub fn load_config() -> AssessConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AssessConfig::default()
        }
    }
}
