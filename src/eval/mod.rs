//! Model evaluation
//!
//! - `cross`: multi-class cross-validation accumulator with confusion matrix
//!   and macro-averaged precision, recall, F-measure
//!
//! ## Example
//!
//! ```
//! use ayudante::eval::CrossValidator;
//!
//! let mut cv = CrossValidator::new(["spam", "ham"])?;
//! cv.evaluate("spam", "spam");
//! cv.evaluate("ham", "spam");
//!
//! let metrics = cv.metrics().expect("evaluated");
//! println!("{metrics}");
//! # Ok::<(), ayudante::AyudanteError>(())
//! ```

pub mod cross;

pub use cross::{ConfusionMatrix, CrossDetails, CrossMetrics, CrossValidator, UNKNOWN_LABEL};
