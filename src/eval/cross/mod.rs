//! Multi-class cross validation
//!
//! Provides an accumulator that records truth/prediction outcomes:
//! - Label-keyed confusion matrix
//! - Per-label precision, recall, F-measure
//! - Macro averages rounded to 4 decimals

mod confusion;
mod metrics;
mod validator;

#[cfg(test)]
mod tests;

pub use confusion::ConfusionMatrix;
pub use metrics::{CrossDetails, CrossMetrics, METRIC_DECIMALS};
pub use validator::{CrossValidator, UNKNOWN_LABEL};

pub(crate) use validator::check_labels;
