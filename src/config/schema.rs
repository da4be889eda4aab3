//! Schema for cross-validator configuration

use crate::error::{AyudanteError, Result};
use crate::eval::cross::{check_labels, UNKNOWN_LABEL};
use serde::{Deserialize, Serialize};

fn default_unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

/// Cross-validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossConfig {
    /// Class labels in reporting order
    pub labels: Vec<String>,

    /// Prediction value that is always rejected
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
}

impl CrossConfig {
    /// Config for `labels` with the default unknown label
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            unknown_label: default_unknown_label(),
        }
    }

    /// Override the unknown label
    pub fn with_unknown_label(mut self, unknown_label: impl Into<String>) -> Self {
        self.unknown_label = unknown_label.into();
        self
    }

    /// Check the label rules enforced at construction
    pub fn validate(&self) -> Result<()> {
        check_labels(&self.labels)
    }
}

/// Loosely typed document shape; `labels` is checked by hand so a
/// non-sequence is reported as an invalid argument rather than a parse error.
#[derive(Debug, Deserialize)]
pub(super) struct RawCrossConfig {
    #[serde(default)]
    pub labels: serde_json::Value,
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
}

impl TryFrom<RawCrossConfig> for CrossConfig {
    type Error = AyudanteError;

    fn try_from(raw: RawCrossConfig) -> Result<Self> {
        let items = raw.labels.as_array().ok_or_else(|| {
            AyudanteError::invalid_argument(format!("`labels` must be a list, got {}", raw.labels))
        })?;

        let labels = items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    AyudanteError::invalid_argument(format!("label {item} is not a string"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels, unknown_label: raw.unknown_label })
    }
}
