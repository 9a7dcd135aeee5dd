//! Configuration file support for depsync.
//!
//! Provides YAML-based configuration through `depsync.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::DepsyncError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depsync.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub ignore_dependencies: Option<Vec<String>>,
    pub skip_indirect: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options after combining the command line with an optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub format: OutputFormat,
    pub ignore_patterns: Vec<String>,
    pub skip_indirect: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| DepsyncError::ConfigError {
        path: path.to_path_buf(),
        details: format!("Failed to read config file: {}", e),
        hint: "Check that the file exists and is readable.".to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| DepsyncError::ConfigError {
            path: path.to_path_buf(),
            details: format!("Failed to parse config file: {}", e),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|details| DepsyncError::ConfigError {
                path: path.to_path_buf(),
                details,
                hint: "Set 'format' to one of: text, json, markdown.".to_string(),
            })?;
    }

    if let Some(patterns) = &config.ignore_dependencies {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(DepsyncError::ConfigError {
                    path: path.to_path_buf(),
                    details: format!("ignore_dependencies[{}] must not be empty.", i),
                    hint: "Each entry must be a module path or pattern (e.g., \"golang.org/x/*\")."
                        .to_string(),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merge command-line options with an optional config file.
///
/// - `format`: the command line wins, then the config, then text
/// - ignore patterns: command-line patterns first, then config patterns,
///   duplicates removed
/// - `skip_indirect`: enabled if either source enables it
pub fn resolve_options(
    cli_format: Option<OutputFormat>,
    cli_ignore: &[String],
    cli_skip_indirect: bool,
    config: Option<&ConfigFile>,
) -> Result<ResolvedOptions> {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(|message| DepsyncError::Validation { message })?;

    let mut ignore_patterns: Vec<String> = Vec::new();
    let config_ignore = config
        .and_then(|c| c.ignore_dependencies.as_deref())
        .unwrap_or_default();
    for pattern in cli_ignore.iter().chain(config_ignore) {
        if !ignore_patterns.contains(pattern) {
            ignore_patterns.push(pattern.clone());
        }
    }

    Ok(ResolvedOptions {
        format: cli_format.or(config_format).unwrap_or_default(),
        ignore_patterns,
        skip_indirect: cli_skip_indirect
            || config.and_then(|c| c.skip_indirect).unwrap_or(false),
    })
}
