//! Settings loading from disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::schema::EditorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Where a bad setting came from.
const INLINE_ORIGIN: &str = "inline settings";
const OVERRIDE_ORIGIN: &str = "command-line overrides";

/// Why the editor settings could not be used.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The settings text is not TOML matching the expected sections.
    Parse { origin: String, source: toml::de::Error },
    /// Well-formed settings with values the editor cannot work with.
    Invalid {
        origin: String,
        errors: Vec<ValidationError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read settings file {}: {source}", path.display())
            }
            ConfigError::Parse { origin, source } => {
                write!(f, "{origin} is not a valid settings file: {source}")
            }
            ConfigError::Invalid { origin, errors } => {
                write!(f, "{origin} rejected: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

fn parse_from(content: &str, origin: &str) -> Result<EditorConfig, ConfigError> {
    let config: EditorConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    check(&config, origin)?;
    Ok(config)
}

fn check(config: &EditorConfig, origin: &str) -> Result<(), ConfigError> {
    validate_config(config).map_err(|errors| ConfigError::Invalid {
        origin: origin.to_string(),
        errors,
    })
}

/// Parse and validate settings from TOML text.
pub fn parse_config(content: &str) -> Result<EditorConfig, ConfigError> {
    parse_from(content, INLINE_ORIGIN)
}

/// Load and validate settings from a TOML file.
pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_from(&content, &format!("settings file {}", path.display()))
}

/// Load settings from `path` if given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<EditorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(EditorConfig::default()),
    }
}

/// Apply command-line flags on top of loaded settings and validate the
/// result again.
pub fn apply_overrides(
    config: &mut EditorConfig,
    log_level: Option<String>,
    assume_yes: bool,
) -> Result<(), ConfigError> {
    if let Some(level) = log_level {
        config.observability.log_level = level;
    }
    if assume_yes {
        config.shell.assume_yes = true;
    }
    check(config, OVERRIDE_ORIGIN)
}
