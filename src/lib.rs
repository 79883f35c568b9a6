//! # required-rule
//!
//! A single validation rule, **Required**, for frameworks that validate values
//! whose type is only known at runtime.
//!
//! The rule classifies a [`Value`] by its [`Shape`] and decides whether it is
//! present:
//! - `Nil` and `Unknown` values are never present.
//! - Structs, booleans, integers and floats always are, zero values included.
//! - Strings must be non-blank after trimming.
//! - Maps, arrays and slices must have at least one element.
//!
//! The string and collection checks can each be relaxed through an
//! [`OptionSet`].
//!
//! ## Quick Example
//!
//! ```rust
//! use required_rule::{OptionSet, Required, Shape, Value};
//!
//! let mut rule = Required::new();
//!
//! let outcome = rule.is_valid(&Value::from(Vec::<i32>::new()));
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.errors()[0].shape(), Shape::Slice);
//! assert_eq!(
//!     outcome.errors()[0].to_string(),
//!     "Slice value([]) is not a valid value for Required"
//! );
//!
//! rule.set_options(OptionSet::new().allow_empty_slice(true));
//! assert!(rule.is_valid(&Value::from(Vec::<i32>::new())).is_valid());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when options change and values are checked.
//! - `serde`: (de)serialize [`OptionSet`] and convert `serde_json::Value` into [`Value`].
//! - `proptest`: `Arbitrary` implementations for property testing.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod options;
pub mod outcome;
pub mod rule;
pub mod semigroup;
pub mod testing;
pub mod value;

#[cfg(feature = "serde")]
pub mod json;

// Re-exports
pub use error::RequiredError;
pub use options::{Opt, OptionSet};
pub use outcome::Outcome;
pub use rule::{required, Required, Rule};
pub use semigroup::Semigroup;
pub use value::{Shape, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::RequiredError;
    pub use crate::options::{Opt, OptionSet};
    pub use crate::outcome::Outcome;
    pub use crate::rule::{required, Required, Rule};
    pub use crate::semigroup::Semigroup;
    pub use crate::value::{Shape, Value};
}
