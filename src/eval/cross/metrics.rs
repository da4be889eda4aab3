//! Macro-averaged metrics derived from a confusion matrix

use super::confusion::ConfusionMatrix;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places every reported metric is rounded to
pub const METRIC_DECIMALS: usize = 4;

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Round to `decimals` places from the exact decimal value of `value`,
/// ties away from zero
///
/// Works on the exact binary value, so 3/160 (stored as 0.018749999...)
/// rounds to 0.0187, not 0.0188.
pub(crate) fn round_half_up(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(decimals)).collect();
    if fraction.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        // Propagate the carry; a leading 1 covers 9.99 -> 10.00
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - decimals);
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(int_digits.iter().map(|&d| char::from(d)));
    if !frac_digits.is_empty() {
        text.push('.');
        text.extend(frac_digits.iter().map(|&d| char::from(d)));
    }

    text.parse().unwrap_or(value)
}

/// [`round_half_up`] to [`METRIC_DECIMALS`] places
pub(crate) fn round4(value: f64) -> f64 {
    round_half_up(value, METRIC_DECIMALS)
}

/// `numerator / denominator`, or 0 when the denominator is zero
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Snapshot returned by [`CrossValidator::metrics`](super::CrossValidator::metrics)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossMetrics {
    /// Macro-averaged precision
    pub avg_precision: f64,
    /// Macro-averaged recall
    pub avg_recall: f64,
    /// Macro-averaged F-measure
    #[serde(rename = "avgFMeasure")]
    pub avg_f_measure: f64,
    /// Confusion matrix and the label-wise values behind the averages
    pub details: CrossDetails,
}

/// Label-wise breakdown of a [`CrossMetrics`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossDetails {
    /// `row -> col -> count`, rows and columns in label order
    pub confusion_matrix: IndexMap<String, IndexMap<String, u64>>,
    /// Per-label precision
    pub precision: IndexMap<String, f64>,
    /// Per-label recall
    pub recall: IndexMap<String, f64>,
    /// Per-label F-measure
    pub fmeasure: IndexMap<String, f64>,
}

/// Per-label precision, recall and F-measure
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LabelScores {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub fmeasure: Vec<f64>,
}

impl LabelScores {
    /// All-zero scores for `n_classes` labels
    pub(crate) fn zeroed(n_classes: usize) -> Self {
        Self {
            precision: vec![0.0; n_classes],
            recall: vec![0.0; n_classes],
            fmeasure: vec![0.0; n_classes],
        }
    }

    /// Compute label-wise scores from the matrix
    ///
    /// Precision divides the diagonal by the row total, recall by the column
    /// total. Any zero denominator yields 0.
    pub(crate) fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut scores = Self::zeroed(n_classes);

        for row in 0..n_classes {
            let n = cm.cell(row, row) as f64;
            let pd: u64 = (0..n_classes).map(|col| cm.cell(row, col)).sum();
            let rd: u64 = (0..n_classes).map(|col| cm.cell(col, row)).sum();

            let p = round4(ratio(n, pd as f64));
            let r = round4(ratio(n, rd as f64));
            let f = round4(ratio(2.0 * p * r, p + r));

            scores.precision[row] = p;
            scores.recall[row] = r;
            scores.fmeasure[row] = f;
        }

        scores
    }
}

/// Unweighted mean accumulated as a running sum of `v / n`
fn macro_average(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    round4(values.iter().fold(0.0, |acc, v| acc + v / n))
}

fn keyed(labels: &[String], values: &[f64]) -> IndexMap<String, f64> {
    labels.iter().cloned().zip(values.iter().copied()).collect()
}

impl CrossMetrics {
    pub(crate) fn new(cm: &ConfusionMatrix, scores: &LabelScores) -> Self {
        let labels = cm.labels();
        Self {
            avg_precision: macro_average(&scores.precision),
            avg_recall: macro_average(&scores.recall),
            avg_f_measure: macro_average(&scores.fmeasure),
            details: CrossDetails {
                confusion_matrix: cm.to_map(),
                precision: keyed(labels, &scores.precision),
                recall: keyed(labels, &scores.recall),
                fmeasure: keyed(labels, &scores.fmeasure),
            },
        }
    }
}

impl fmt::Display for CrossMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.details.precision.keys().map(String::len).max().unwrap_or(0).max(12);

        // Header
        writeln!(f, "{:>width$} {:>10} {:>10} {:>10}", "", "precision", "recall", "f-measure")?;
        writeln!(f, "{}", "-".repeat(width + 33))?;

        // Per-label metrics
        for (label, p) in &self.details.precision {
            let r = self.details.recall.get(label).copied().unwrap_or(0.0);
            let fm = self.details.fmeasure.get(label).copied().unwrap_or(0.0);
            writeln!(f, "{label:>width$} {p:>10.4} {r:>10.4} {fm:>10.4}")?;
        }

        writeln!(f, "{}", "-".repeat(width + 33))?;
        writeln!(
            f,
            "{:>width$} {:>10.4} {:>10.4} {:>10.4}",
            "macro avg", self.avg_precision, self.avg_recall, self.avg_f_measure
        )
    }
}
