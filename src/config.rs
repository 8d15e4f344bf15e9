//! Configuration file support for pod-graph.
//!
//! Provides YAML-based configuration through `pod-graph.config.yml` files,
//! and the merge of file values with command-line flags.

use anyhow::Context;
use pod_graph::application::dto::OutputFormat;
use pod_graph::shared::error::GraphError;
use pod_graph::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "pod-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<String>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered config file");
    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(|message| GraphError::Validation {
                message: format!("Invalid config: format: {}", message),
            })?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Effective options after layering CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl ResolvedOptions {
    /// CLI values win; config values fill the gaps; defaults cover the rest.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        cli_output: Option<String>,
        cli_quiet: bool,
        config: Option<&ConfigFile>,
    ) -> Result<Self> {
        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(|message| GraphError::Validation { message })?;

        let format = cli_format.or(config_format).unwrap_or_default();
        let output = cli_output
            .or_else(|| config.and_then(|c| c.output.clone()))
            .map(PathBuf::from);
        let quiet = cli_quiet || config.and_then(|c| c.quiet).unwrap_or(false);

        Ok(Self {
            format,
            output,
            quiet,
        })
    }
}
