//! The error reported for a value that fails `Required`

use std::error::Error as StdError;
use std::fmt;

use crate::value::{Shape, Value};

/// A value was missing or empty.
///
/// The `Display` form is
/// `"<tag> value(<value>) is not a valid value for Required"`, where `<tag>`
/// is one of `nil`, `String`, `Map`, `Array`, `Slice` or `Unknown`.
///
/// # Examples
///
/// ```
/// use required_rule::{RequiredError, Shape, Value};
///
/// let err = RequiredError::new(Shape::Slice, &Value::Slice(vec![]));
/// assert_eq!(err.to_string(), "Slice value([]) is not a valid value for Required");
/// assert_eq!(err.shape(), Shape::Slice);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredError {
    shape: Shape,
    value: String,
}

impl RequiredError {
    /// Record a rejection of `value`, tagged with `shape`.
    pub fn new(shape: Shape, value: &Value) -> Self {
        RequiredError {
            shape,
            value: value.to_string(),
        }
    }

    /// The shape that caused the rejection.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The offending value as it was rendered into the message.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RequiredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value({}) is not a valid value for Required",
            self.shape, self.value
        )
    }
}

impl StdError for RequiredError {}
