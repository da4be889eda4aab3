//! Declarative cross-validator configuration
//!
//! A config names the class labels and, optionally, the prediction value
//! that means "no prediction":
//!
//! ```yaml
//! labels: [urgent, normal, spam]
//! unknown_label: unknown
//! ```

mod loader;
mod schema;


pub use loader::{from_json_str, from_yaml_str};
pub use schema::CrossConfig;
