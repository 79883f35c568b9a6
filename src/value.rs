//! Dynamically shaped values
//!
//! The `Required` rule inspects values whose concrete type is only known at
//! runtime. [`Value`] is the tagged variant the calling framework (or an
//! adapter such as the `From` impls below) builds for it, and [`Shape`] is the
//! structural category the rule dispatches on.
//!
//! # Examples
//!
//! ```
//! use required_rule::{Shape, Value};
//!
//! assert_eq!(Value::from(0).shape(), Shape::Int);
//! assert_eq!(Value::from("hi").shape(), Shape::String);
//! assert_eq!(Value::from(vec![1, 2, 3]).shape(), Shape::Slice);
//! assert_eq!(Value::from([1, 2]).shape(), Shape::Array);
//! assert_eq!(Value::from(None::<i32>).shape(), Shape::Nil);
//!
//! assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a b]");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Structural category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    /// Absence marker
    Nil,
    /// Record with named fields
    Struct,
    /// Boolean
    Bool,
    /// Integer of any width
    Int,
    /// 32 or 64-bit float
    Float,
    /// Text
    String,
    /// Keyed mapping
    Map,
    /// Fixed-size sequence
    Array,
    /// Growable sequence
    Slice,
    /// Anything the rule has no semantics for
    Unknown,
}

impl Shape {
    /// Tag used in error messages.
    ///
    /// Consumers parse this vocabulary, so it must stay stable. Only `Nil`
    /// differs from the variant name.
    pub fn tag(self) -> &'static str {
        match self {
            Shape::Nil => "nil",
            Shape::Struct => "Struct",
            Shape::Bool => "Bool",
            Shape::Int => "Int",
            Shape::Float => "Float",
            Shape::String => "String",
            Shape::Map => "Map",
            Shape::Array => "Array",
            Shape::Slice => "Slice",
            Shape::Unknown => "Unknown",
        }
    }

    /// True for shapes that are present as soon as they exist.
    pub fn is_scalar(self) -> bool {
        matches!(self, Shape::Struct | Shape::Bool | Shape::Int | Shape::Float)
    }

    /// True for shapes whose emptiness is an element count.
    pub fn is_collection(self) -> bool {
        matches!(self, Shape::Map | Shape::Array | Shape::Slice)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A value of runtime-determined shape.
///
/// Maps and structs keep their entries in insertion order so that rendering
/// is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence marker
    Nil,
    /// Named fields
    Struct(Vec<(String, Value)>),
    /// Boolean
    Bool(bool),
    /// Any integer width, signed or unsigned
    ///
    /// Every Rust integer type converts into this variant. Unsigned and
    /// narrower widths are not treated as unsupported kinds.
    Int(i128),
    /// Any float width
    Float(f64),
    /// Text
    String(String),
    /// Key/value entries
    Map(Vec<(Value, Value)>),
    /// Fixed-size sequence
    Array(Vec<Value>),
    /// Growable sequence
    Slice(Vec<Value>),
    /// Unsupported kind, described for diagnostics (e.g. `"func"`, `"chan"`)
    Unknown(String),
}

impl Value {
    /// Build an unsupported value from a short description of its kind.
    pub fn unknown(kind: impl Into<String>) -> Self {
        Value::Unknown(kind.into())
    }

    /// Build a struct value from named fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use required_rule::{Shape, Value};
    ///
    /// let point = Value::record([("x", 0), ("y", 0)]);
    /// assert_eq!(point.shape(), Shape::Struct);
    /// assert_eq!(point.to_string(), "{0 0}");
    /// ```
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Struct(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a map value from entries, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The structural category of this value.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Nil => Shape::Nil,
            Value::Struct(_) => Shape::Struct,
            Value::Bool(_) => Shape::Bool,
            Value::Int(_) => Shape::Int,
            Value::Float(_) => Shape::Float,
            Value::String(_) => Shape::String,
            Value::Map(_) => Shape::Map,
            Value::Array(_) => Shape::Array,
            Value::Slice(_) => Shape::Slice,
            Value::Unknown(_) => Shape::Unknown,
        }
    }

    /// Element count for collection shapes, `None` otherwise.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Map(entries) => Some(entries.len()),
            Value::Array(items) | Value::Slice(items) => Some(items.len()),
            _ => None,
        }
    }

    /// True if this is a collection with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// True for the absence marker.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

fn write_spaced<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut each: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        each(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Unknown(kind) => f.write_str(kind),
            Value::Array(items) | Value::Slice(items) => {
                f.write_str("[")?;
                write_spaced(f, items, |f, v| write!(f, "{}", v))?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("map[")?;
                write_spaced(f, entries, |f, (k, v)| write!(f, "{}:{}", k, v))?;
                f.write_str("]")
            }
            Value::Struct(fields) => {
                f.write_str("{")?;
                write_spaced(f, fields, |f, (_, v)| write!(f, "{}", v))?;
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::Int(n as i128)
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Struct(Vec::new())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Slice(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Slice(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::map(map)
    }
}

/// Entries follow the `HashMap`'s iteration order.
impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::map(map)
    }
}
