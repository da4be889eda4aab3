//! Slice helpers
//!
//! - Sort comparators for plain values, `(key, value)` pairs and accessors
//! - Cartesian product
//! - Column plucking
//! - Knuth shuffle

mod pluck;
mod product;
mod shuffle;
mod sort;


pub use pluck::pluck;
pub use product::product;
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with};
pub use sort::{
    ascending, ascending_on, ascending_on_key, ascending_on_value, descending, descending_on,
    descending_on_key, descending_on_value,
};
