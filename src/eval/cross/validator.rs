//! Cross-validation accumulator

use super::confusion::ConfusionMatrix;
use super::metrics::{CrossMetrics, LabelScores};
use crate::config::CrossConfig;
use crate::error::{AyudanteError, Result};
use std::collections::HashSet;

/// Prediction value meaning "the classifier declined to predict"
pub const UNKNOWN_LABEL: &str = "unknown";

/// Accumulates truth/prediction outcomes for a fixed label set and derives
/// macro-averaged precision, recall and F-measure.
///
/// The instance starts unevaluated; the first accepted [`evaluate`] moves it
/// to evaluated and only [`reset`] moves it back.
///
/// [`evaluate`]: CrossValidator::evaluate
/// [`reset`]: CrossValidator::reset
#[derive(Clone, Debug)]
pub struct CrossValidator {
    cm: ConfusionMatrix,
    unknown: String,
    evaluated: bool,
}

impl CrossValidator {
    /// Create a validator for `labels`
    ///
    /// Repeated labels are refused outright. A repeat would alias a row and
    /// column of the matrix while still counting toward the macro-average
    /// divisor, so this is stricter than accepting any list of length 2 or more.
    ///
    /// # Errors
    /// - [`AyudanteError::InsufficientLabels`] for fewer than 2 labels
    /// - [`AyudanteError::DuplicateLabel`] if a label repeats (strictness
    ///   beyond the two-label minimum)
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_unknown(labels, UNKNOWN_LABEL)
    }

    /// Create a validator that rejects `unknown` as a prediction instead of
    /// [`UNKNOWN_LABEL`]
    pub fn with_unknown<I, S>(labels: I, unknown: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        check_labels(&labels)?;

        tracing::debug!(labels = ?labels, "created cross validator");

        let mut validator = Self {
            cm: ConfusionMatrix::new(labels),
            unknown: unknown.into(),
            evaluated: false,
        };
        validator.reset();
        Ok(validator)
    }

    /// Create a validator from dynamically typed labels
    ///
    /// # Errors
    /// [`AyudanteError::InvalidArgument`] unless `labels` is an array of
    /// strings, plus the errors of [`CrossValidator::new`].
    pub fn from_value(labels: &serde_json::Value) -> Result<Self> {
        let items = labels.as_array().ok_or_else(|| {
            AyudanteError::invalid_argument(format!("expected an array, got {labels}"))
        })?;

        let labels = items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    AyudanteError::invalid_argument(format!("label {item} is not a string"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(labels)
    }

    /// Create a validator from a loaded [`CrossConfig`]
    pub fn from_config(config: &CrossConfig) -> Result<Self> {
        Self::with_unknown(config.labels.iter().cloned(), config.unknown_label.clone())
    }

    /// Clear all recorded outcomes; the label set is kept
    pub fn reset(&mut self) {
        self.evaluated = false;
        self.cm.clear();
        tracing::debug!(n_classes = self.cm.n_classes(), "cross validator reset");
    }

    /// Record one outcome
    ///
    /// Returns `false` without touching any state when `guess` is the unknown
    /// sentinel or either label is not in the label set.
    pub fn evaluate(&mut self, truth: &str, guess: &str) -> bool {
        if guess == self.unknown {
            tracing::debug!(truth, "rejected evaluation: no prediction");
            return false;
        }
        let (Some(t), Some(g)) = (self.cm.index_of(truth), self.cm.index_of(guess)) else {
            tracing::debug!(truth, guess, "rejected evaluation: label not in label set");
            return false;
        };

        // Misses are recorded as (guess, truth); metrics() relies on it.
        if t == g {
            self.cm.increment(t, t);
        } else {
            self.cm.increment(g, t);
        }
        self.evaluated = true;

        tracing::trace!(truth, guess, "recorded evaluation");
        true
    }

    /// Record many `(truth, guess)` outcomes, returning how many were accepted
    pub fn evaluate_all<'a, I>(&mut self, outcomes: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        outcomes.into_iter().filter(|&(truth, guess)| self.evaluate(truth, guess)).count()
    }

    /// Detailed macro-averaged metrics, or `None` if nothing was evaluated
    /// since construction or the last reset
    pub fn metrics(&self) -> Option<CrossMetrics> {
        if !self.evaluated {
            return None;
        }
        let scores = LabelScores::from_confusion_matrix(&self.cm);
        Some(CrossMetrics::new(&self.cm, &scores))
    }

    /// Whether an outcome was accepted since construction or the last reset
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// The class labels, in construction order
    pub fn labels(&self) -> &[String] {
        self.cm.labels()
    }

    /// The prediction value that is always rejected
    pub fn unknown_label(&self) -> &str {
        &self.unknown
    }

    /// The accumulated confusion matrix
    pub fn confusion_matrix(&self) -> &ConfusionMatrix {
        &self.cm
    }
}

/// At least two labels, none repeated
pub(crate) fn check_labels(labels: &[String]) -> Result<()> {
    if labels.len() < 2 {
        return Err(AyudanteError::InsufficientLabels { count: labels.len() });
    }

    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(AyudanteError::DuplicateLabel { label: label.clone() });
        }
    }

    Ok(())
}
