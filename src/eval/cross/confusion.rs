//! Label-keyed confusion matrix

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// Confusion matrix over a fixed set of string labels
///
/// Cell `[row][col]` is a count. Diagonal cells hold agreements; off-diagonal
/// cells are recorded with the predicted label as row and the actual label as
/// column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[row][col] = count
    matrix: Vec<Vec<u64>>,
    /// Class labels in construction order
    labels: Vec<String>,
    /// Label to row/column index
    index: HashMap<String, usize>,
}

impl ConfusionMatrix {
    /// Create a zeroed matrix for the given labels
    ///
    /// Labels are assumed unique; the validator checks this before building.
    pub(crate) fn new(labels: Vec<String>) -> Self {
        let n = labels.len();
        let index = labels.iter().enumerate().map(|(i, l)| (l.clone(), i)).collect();
        Self {
            matrix: vec![vec![0; n]; n],
            labels,
            index,
        }
    }

    /// Zero every cell
    pub(crate) fn clear(&mut self) {
        for row in &mut self.matrix {
            row.fill(0);
        }
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn increment(&mut self, row: usize, col: usize) {
        self.matrix[row][col] += 1;
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> u64 {
        self.matrix[row][col]
    }

    /// Get the class labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Whether `label` is one of the classes
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Get the count at (`row`, `col`), or `None` if either label is unknown
    pub fn get(&self, row: &str, col: &str) -> Option<u64> {
        Some(self.matrix[self.index_of(row)?][self.index_of(col)?])
    }

    /// Sum across the row of `label`
    pub fn row_total(&self, label: &str) -> Option<u64> {
        self.index_of(label).map(|i| self.matrix[i].iter().sum())
    }

    /// Sum down the column of `label`
    pub fn column_total(&self, label: &str) -> Option<u64> {
        self.index_of(label).map(|j| self.matrix.iter().map(|row| row[j]).sum())
    }

    /// Total number of recorded outcomes
    pub fn total(&self) -> u64 {
        self.matrix.iter().flatten().sum()
    }

    /// True when no outcome is recorded
    pub fn is_zero(&self) -> bool {
        self.matrix.iter().flatten().all(|&c| c == 0)
    }

    /// Nested label-ordered mapping `row -> col -> count`
    pub fn to_map(&self) -> IndexMap<String, IndexMap<String, u64>> {
        self.labels
            .iter()
            .zip(&self.matrix)
            .map(|(row_label, row)| {
                let cols: IndexMap<String, u64> =
                    self.labels.iter().cloned().zip(row.iter().copied()).collect();
                (row_label.clone(), cols)
            })
            .collect()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0).max(6);

        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "{:>width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        // Rows
        for (label, row) in self.labels.iter().zip(&self.matrix) {
            write!(f, "{label:>width$}")?;
            for count in row {
                write!(f, " {count:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
