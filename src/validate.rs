//! Numeric and shape predicates
//!
//! The `f64` forms cover typed callers; the `serde_json::Value` forms cover
//! data whose type is only known at runtime.

use serde_json::Value;

use crate::eval::cross::CrossValidator;

/// Finite and without a fractional part
pub fn is_finite_integer(n: f64) -> bool {
    n.is_finite() && n == n.round()
}

/// Neither NaN nor infinite
pub fn is_finite_number(n: f64) -> bool {
    n.is_finite()
}

/// A JSON number that is a finite integer
pub fn is_finite_integer_value(v: &Value) -> bool {
    v.as_f64().is_some_and(is_finite_integer)
}

/// A JSON number that is finite
pub fn is_finite_number_value(v: &Value) -> bool {
    v.as_f64().is_some_and(is_finite_number)
}

/// A JSON array
pub fn is_array(v: &Value) -> bool {
    v.is_array()
}

/// A JSON object
pub fn is_object(v: &Value) -> bool {
    v.is_object()
}

/// Build a cross validator for `labels`; see [`CrossValidator::new`]
pub fn cross<I, S>(labels: I) -> crate::Result<CrossValidator>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CrossValidator::new(labels)
}
