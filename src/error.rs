//! Error types with actionable diagnostics.
//!
//! Every variant carries enough context to fix the call site without
//! reading the source.

use thiserror::Error;

/// Result type alias for ayudante operations.
pub type Result<T> = std::result::Result<T, AyudanteError>;

/// Errors raised while building a cross validator or loading its config.
///
/// `evaluate` and `metrics` never fail; only construction does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AyudanteError {
    /// Class labels were not supplied as a sequence of strings.
    #[error("cross validate: class labels must be an array of strings: {message}\n  → Pass the labels as a list, e.g. [\"spam\", \"ham\"]")]
    InvalidArgument { message: String },

    /// Fewer than two class labels.
    #[error("cross validate: at least 2 class labels are required, got {count}\n  → Add the missing class labels")]
    InsufficientLabels { count: usize },

    /// The same class label was given twice.
    #[error("cross validate: duplicate class label '{label}'\n  → Class labels must be unique")]
    DuplicateLabel { label: String },

    /// A YAML/JSON config document could not be parsed.
    #[error("Invalid configuration syntax ({format}):\n  {message}\n  → Check the document at the indicated line")]
    ConfigParsing { format: &'static str, message: String },
}

impl AyudanteError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Check if this error is caused by caller input rather than a bad document.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::InsufficientLabels { .. }
                | Self::DuplicateLabel { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "E001",
            Self::InsufficientLabels { .. } => "E002",
            Self::DuplicateLabel { .. } => "E003",
            Self::ConfigParsing { .. } => "E010",
        }
    }
}
