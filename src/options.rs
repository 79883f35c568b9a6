//! Emptiness allowances for the `Required` rule
//!
//! By default `Required` rejects blank strings and empty collections. An
//! [`OptionSet`] lets a caller relax each of those checks independently.
//!
//! # Examples
//!
//! ```
//! use required_rule::{Opt, OptionSet};
//!
//! let opts = OptionSet::new().allow_empty_slice(true);
//! assert!(opts.is_enabled(Opt::AllowEmptySlice));
//! assert!(!opts.is_enabled(Opt::AllowEmptyMap));
//!
//! // Sparse form: absent keys stay disabled
//! let opts: OptionSet = [(Opt::AllowEmptyString, true)].into_iter().collect();
//! assert!(opts.is_enabled(Opt::AllowEmptyString));
//! assert!(!opts.is_enabled(Opt::AllowEmptyArray));
//! ```

use std::collections::HashMap;

use crate::value::Shape;

/// One relaxable emptiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opt {
    /// Accept strings that are empty after trimming
    AllowEmptyString,
    /// Accept fixed-size sequences with no elements
    AllowEmptyArray,
    /// Accept maps with no entries
    AllowEmptyMap,
    /// Accept growable sequences with no elements
    AllowEmptySlice,
}

impl Opt {
    /// Every recognized option.
    pub const ALL: [Opt; 4] = [
        Opt::AllowEmptyString,
        Opt::AllowEmptyArray,
        Opt::AllowEmptyMap,
        Opt::AllowEmptySlice,
    ];

    /// The option that relaxes the emptiness check for `shape`, if any.
    pub fn for_shape(shape: Shape) -> Option<Opt> {
        match shape {
            Shape::String => Some(Opt::AllowEmptyString),
            Shape::Array => Some(Opt::AllowEmptyArray),
            Shape::Map => Some(Opt::AllowEmptyMap),
            Shape::Slice => Some(Opt::AllowEmptySlice),
            _ => None,
        }
    }
}

/// Which emptiness allowances are enabled.
///
/// Every flag defaults to `false`. When deserialized (feature `serde`),
/// missing fields stay `false` and unrecognized keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OptionSet {
    allow_empty_string: bool,
    allow_empty_array: bool,
    allow_empty_map: bool,
    allow_empty_slice: bool,
}

impl OptionSet {
    /// All allowances disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// All allowances enabled.
    pub fn permissive() -> Self {
        Opt::ALL.into_iter().map(|opt| (opt, true)).collect()
    }

    /// Whether `opt` is enabled.
    #[inline]
    pub fn is_enabled(&self, opt: Opt) -> bool {
        match opt {
            Opt::AllowEmptyString => self.allow_empty_string,
            Opt::AllowEmptyArray => self.allow_empty_array,
            Opt::AllowEmptyMap => self.allow_empty_map,
            Opt::AllowEmptySlice => self.allow_empty_slice,
        }
    }

    /// Enable or disable `opt` in place.
    pub fn set(&mut self, opt: Opt, enabled: bool) {
        let flag = match opt {
            Opt::AllowEmptyString => &mut self.allow_empty_string,
            Opt::AllowEmptyArray => &mut self.allow_empty_array,
            Opt::AllowEmptyMap => &mut self.allow_empty_map,
            Opt::AllowEmptySlice => &mut self.allow_empty_slice,
        };
        *flag = enabled;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, opt: Opt, enabled: bool) -> Self {
        self.set(opt, enabled);
        self
    }

    /// Toggle [`Opt::AllowEmptyString`].
    pub fn allow_empty_string(self, enabled: bool) -> Self {
        self.with(Opt::AllowEmptyString, enabled)
    }

    /// Toggle [`Opt::AllowEmptyArray`].
    pub fn allow_empty_array(self, enabled: bool) -> Self {
        self.with(Opt::AllowEmptyArray, enabled)
    }

    /// Toggle [`Opt::AllowEmptyMap`].
    pub fn allow_empty_map(self, enabled: bool) -> Self {
        self.with(Opt::AllowEmptyMap, enabled)
    }

    /// Toggle [`Opt::AllowEmptySlice`].
    pub fn allow_empty_slice(self, enabled: bool) -> Self {
        self.with(Opt::AllowEmptySlice, enabled)
    }

    /// Whether an empty value of `shape` is accepted.
    ///
    /// Always `false` for shapes with no matching option.
    pub fn allows_empty(&self, shape: Shape) -> bool {
        Opt::for_shape(shape).is_some_and(|opt| self.is_enabled(opt))
    }

    /// The enabled options, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Opt> + '_ {
        Opt::ALL.into_iter().filter(move |opt| self.is_enabled(*opt))
    }
}

impl FromIterator<(Opt, bool)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (Opt, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OptionSet::new(), |set, (opt, enabled)| set.with(opt, enabled))
    }
}

impl<S> From<HashMap<Opt, bool, S>> for OptionSet {
    fn from(map: HashMap<Opt, bool, S>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Opt> for OptionSet {
    fn from(opt: Opt) -> Self {
        OptionSet::new().with(opt, true)
    }
}
