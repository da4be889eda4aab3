//! Helpers for sorting, combining and shuffling slices, reading ordered maps,
//! validating numbers, normalizing strings, and scoring multi-class
//! predictions.
//!
//! # Modules
//!
//! - [`eval`]: cross-validation accumulator (confusion matrix, macro metrics)
//! - [`config`]: YAML/JSON configuration for the cross validator
//! - [`array`]: comparators, Cartesian product, pluck, shuffle
//! - [`object`]: keys, values, value frequencies, tables of `IndexMap`s
//! - [`validate`]: finite number and JSON shape predicates
//! - [`string`]: lowercase + diacritic stripping
//!
//! # Example
//!
//! ```
//! use ayudante::validate;
//!
//! let mut cv = validate::cross(["urgent", "normal", "spam"])?;
//! assert!(cv.evaluate("spam", "spam"));
//! assert!(!cv.evaluate("spam", "unknown"));
//!
//! let metrics = cv.metrics().expect("one outcome recorded");
//! assert_eq!(metrics.details.confusion_matrix["spam"]["spam"], 1);
//! # Ok::<(), ayudante::AyudanteError>(())
//! ```

pub mod array;
pub mod config;
pub mod error;
pub mod eval;
pub mod object;
pub mod string;
pub mod validate;

pub use config::CrossConfig;
pub use error::{AyudanteError, Result};
pub use eval::{ConfusionMatrix, CrossMetrics, CrossValidator, UNKNOWN_LABEL};
