//! Parse and validate cross-validator configs

use super::schema::{CrossConfig, RawCrossConfig};
use crate::error::{AyudanteError, Result};

/// Parse a YAML document into a validated [`CrossConfig`]
///
/// # Example
///
/// ```
/// let config = ayudante::config::from_yaml_str("labels: [spam, ham]")?;
/// assert_eq!(config.labels, ["spam", "ham"]);
/// # Ok::<(), ayudante::AyudanteError>(())
/// ```
pub fn from_yaml_str(yaml: &str) -> Result<CrossConfig> {
    let raw: RawCrossConfig = serde_yaml::from_str(yaml)
        .map_err(|e| AyudanteError::ConfigParsing { format: "yaml", message: e.to_string() })?;
    finish(raw)
}

/// Parse a JSON document into a validated [`CrossConfig`]
pub fn from_json_str(json: &str) -> Result<CrossConfig> {
    let raw: RawCrossConfig = serde_json::from_str(json)
        .map_err(|e| AyudanteError::ConfigParsing { format: "json", message: e.to_string() })?;
    finish(raw)
}

fn finish(raw: RawCrossConfig) -> Result<CrossConfig> {
    let config = CrossConfig::try_from(raw)?;
    config.validate()?;
    tracing::debug!(
        labels = config.labels.len(),
        unknown = %config.unknown_label,
        "loaded cross config"
    );
    Ok(config)
}
