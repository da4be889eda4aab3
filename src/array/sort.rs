//! Sort comparators
//!
//! Each comparator answers `Greater` only for a strict `>` and `Equal` only
//! for `==`; anything else, incomparable floats included, is `Less`.

use std::cmp::Ordering;

fn strict<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a == b {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}

/// Ascending order
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    strict(a, b)
}

/// Descending order
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    strict(b, a)
}

/// Ascending on the key of `(key, value)` pairs
pub fn ascending_on_key<K: PartialOrd, V>(a: &(K, V), b: &(K, V)) -> Ordering {
    strict(&a.0, &b.0)
}

/// Descending on the key of `(key, value)` pairs
pub fn descending_on_key<K: PartialOrd, V>(a: &(K, V), b: &(K, V)) -> Ordering {
    strict(&b.0, &a.0)
}

/// Ascending on the value of `(key, value)` pairs
pub fn ascending_on_value<K, V: PartialOrd>(a: &(K, V), b: &(K, V)) -> Ordering {
    strict(&a.1, &b.1)
}

/// Descending on the value of `(key, value)` pairs
pub fn descending_on_value<K, V: PartialOrd>(a: &(K, V), b: &(K, V)) -> Ordering {
    strict(&b.1, &a.1)
}

/// Comparator sorting ascending on whatever `accessor` extracts
///
/// Nested keys are just a longer accessor:
///
/// ```
/// use ayudante::array::ascending_on;
///
/// let mut rows = vec![("b", (2, 9)), ("a", (1, 7))];
/// rows.sort_by(ascending_on(|r: &(&str, (i32, i32))| r.1.1));
/// assert_eq!(rows[0].0, "a");
/// ```
pub fn ascending_on<T, K, F>(accessor: F) -> impl Fn(&T, &T) -> Ordering
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a, b| strict(&accessor(a), &accessor(b))
}

/// Comparator sorting descending on whatever `accessor` extracts
pub fn descending_on<T, K, F>(accessor: F) -> impl Fn(&T, &T) -> Ordering
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a, b| strict(&accessor(b), &accessor(a))
}
