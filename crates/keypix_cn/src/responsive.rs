//! Breakpoint-dependent values
//!
//! A responsive prop is either one value for every width or a map from
//! breakpoint to value. Resolution never fails on a non-empty map: the
//! requested breakpoint is tried first, then `md`, then the first entry in
//! insertion order.
//!
//! # Example
//!
//! ```rust
//! use keypix_cn::responsive::Responsive;
//! use keypix_theme::Breakpoint;
//!
//! let cols: Responsive<u32> = serde_json::from_str(r#"{ "xs": 1, "lg": 3 }"#).unwrap();
//! assert_eq!(cols.resolve(Breakpoint::Lg), Some(&3));
//! assert_eq!(cols.resolve(Breakpoint::Md), Some(&1));
//!
//! let fixed = Responsive::Value(2);
//! assert_eq!(fixed.resolve(Breakpoint::Xl), Some(&2));
//! ```

use std::fmt;

use indexmap::IndexMap;
use keypix_theme::Breakpoint;
use serde::{Deserialize, Serialize};

/// A single value or a per-breakpoint map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    Breakpoints(IndexMap<Breakpoint, T>),
    Value(T),
}

impl<T> Responsive<T> {
    /// Start an empty per-breakpoint map
    pub fn breakpoints() -> Self {
        Responsive::Breakpoints(IndexMap::new())
    }

    /// Add or replace the value for `breakpoint`
    ///
    /// A single value is kept as the `md` entry of the new map.
    pub fn at(self, breakpoint: Breakpoint, value: T) -> Self {
        let mut map = match self {
            Responsive::Breakpoints(map) => map,
            Responsive::Value(single) => IndexMap::from([(Breakpoint::Md, single)]),
        };
        map.insert(breakpoint, value);
        Responsive::Breakpoints(map)
    }

    /// Effective value at `breakpoint`
    ///
    /// `None` only for an empty map.
    pub fn resolve(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            Responsive::Value(value) => Some(value),
            Responsive::Breakpoints(map) => map
                .get(&breakpoint)
                .or_else(|| map.get(&Breakpoint::Md))
                .or_else(|| map.values().next()),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}

/// Resolve `value` at `breakpoint`, defaulting to `md`
pub fn get_responsive_value<T>(value: &Responsive<T>, breakpoint: Option<Breakpoint>) -> Option<&T> {
    value.resolve(breakpoint.unwrap_or_default())
}

/// Key of a responsive class entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponsiveKey {
    /// Applies at every width, emitted without a prefix
    Default,
    At(Breakpoint),
}

impl From<Breakpoint> for ResponsiveKey {
    fn from(breakpoint: Breakpoint) -> Self {
        ResponsiveKey::At(breakpoint)
    }
}

impl fmt::Display for ResponsiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponsiveKey::Default => f.write_str("default"),
            ResponsiveKey::At(breakpoint) => write!(f, "{breakpoint}"),
        }
    }
}

/// Build breakpoint-prefixed utility classes
///
/// `Default` entries produce `{base}-{value}`, breakpoint entries produce
/// `{breakpoint}:{base}-{value}`, absent values are skipped. Output follows
/// input order.
///
/// ```rust
/// use keypix_cn::responsive::{create_responsive_classes, ResponsiveKey};
/// use keypix_theme::Breakpoint;
///
/// let classes = create_responsive_classes(
///     "grid-cols",
///     [
///         (ResponsiveKey::Default, Some(1)),
///         (ResponsiveKey::At(Breakpoint::Md), Some(2)),
///         (ResponsiveKey::At(Breakpoint::Lg), None),
///     ],
/// );
/// assert_eq!(classes, "grid-cols-1 md:grid-cols-2");
/// ```
pub fn create_responsive_classes<I, K, V>(base: &str, values: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Into<ResponsiveKey>,
    V: fmt::Display,
{
    values
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?;
            Some(match key.into() {
                ResponsiveKey::Default => format!("{base}-{value}"),
                ResponsiveKey::At(breakpoint) => format!("{breakpoint}:{base}-{value}"),
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
