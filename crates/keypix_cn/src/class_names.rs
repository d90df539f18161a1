//! Class name composition
//!
//! Every component derives its class string from a base class and a small
//! set of shared options. The rules are fixed:
//!
//! - the base class always comes first
//! - size, variant, color and status each add `{base}-{token}` when present
//! - each `true` flag adds one suffix class, in the order rounded, elevated,
//!   bordered, full-width, disabled, loading, error
//! - a `false` or absent flag adds nothing
//!
//! # Example
//!
//! ```rust
//! use keypix_cn::prelude::*;
//!
//! let classes = ClassNames::new("button")
//!     .size(Size::Md)
//!     .variant("primary")
//!     .rounded(true)
//!     .elevated(false)
//!     .build();
//!
//! assert_eq!(classes, "button button-md button-primary button-rounded");
//! ```

use std::borrow::Cow;

use indexmap::IndexSet;
use keypix_theme::{
    Alignment, BorderRadius, Breakpoint, Color, Density, IconPosition, Shadow, Size, Status,
    Variant,
};

use crate::cache::{self, ClassNameCache};

/// Anything that can stand in a `{base}-{token}` class
///
/// Implemented by every vocabulary enum and by plain strings, so components
/// with local variants (a button-only `primary`, an `icon` size) compose the
/// same way as the shared vocabulary.
pub trait ClassToken {
    fn into_class_token(self) -> Cow<'static, str>;
}

impl ClassToken for &'static str {
    fn into_class_token(self) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

impl ClassToken for String {
    fn into_class_token(self) -> Cow<'static, str> {
        Cow::Owned(self)
    }
}

macro_rules! vocabulary_class_tokens {
    ($($token:ty),+ $(,)?) => {
        $(
            impl ClassToken for $token {
                fn into_class_token(self) -> Cow<'static, str> {
                    Cow::Borrowed(self.token())
                }
            }
        )+
    };
}

vocabulary_class_tokens!(
    Size,
    Variant,
    Color,
    Status,
    IconPosition,
    BorderRadius,
    Shadow,
    Density,
    Alignment,
    Breakpoint,
);

/// Structured options for [`compose_classes`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassNameOptions {
    pub size: Option<Cow<'static, str>>,
    pub variant: Option<Cow<'static, str>>,
    pub color: Option<Cow<'static, str>>,
    pub status: Option<Cow<'static, str>>,
    pub rounded: bool,
    pub elevated: bool,
    pub bordered: bool,
    pub full_width: bool,
    pub disabled: bool,
    pub loading: bool,
    pub error: bool,
}

impl ClassNameOptions {
    /// Boolean flags with their class suffixes, in emission order
    fn flags(&self) -> [(bool, &'static str); 7] {
        [
            (self.rounded, "rounded"),
            (self.elevated, "elevated"),
            (self.bordered, "bordered"),
            (self.full_width, "full-width"),
            (self.disabled, "disabled"),
            (self.loading, "loading"),
            (self.error, "error"),
        ]
    }
}

/// Compose a class string without touching any cache
pub fn compose_classes(base: &str, options: &ClassNameOptions) -> String {
    let mut classes = Vec::new();
    if !base.is_empty() {
        classes.push(base.to_string());
    }

    for token in [
        &options.size,
        &options.variant,
        &options.color,
        &options.status,
    ]
    .into_iter()
    .flatten()
    .filter(|token| !token.trim().is_empty())
    {
        classes.push(format!("{base}-{token}"));
    }

    for (enabled, suffix) in options.flags() {
        if enabled {
            classes.push(format!("{base}-{suffix}"));
        }
    }

    classes.join(" ")
}

/// Compose a class string through the process-wide cache
pub fn create_component_classes(base: &str, options: ClassNameOptions) -> String {
    ClassNames::new(base).options(options).build()
}

/// Builder over a base class and its [`ClassNameOptions`]
///
/// Also serves as the memoization key: two builders that compare equal
/// always compose to the same string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassNames {
    base: String,
    options: ClassNameOptions,
}

impl ClassNames {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            options: ClassNameOptions::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn get_options(&self) -> &ClassNameOptions {
        &self.options
    }

    /// Replace all options at once
    pub fn options(mut self, options: ClassNameOptions) -> Self {
        self.options = options;
        self
    }

    pub fn size(mut self, size: impl ClassToken) -> Self {
        self.options.size = Some(size.into_class_token());
        self
    }

    pub fn variant(mut self, variant: impl ClassToken) -> Self {
        self.options.variant = Some(variant.into_class_token());
        self
    }

    pub fn color(mut self, color: impl ClassToken) -> Self {
        self.options.color = Some(color.into_class_token());
        self
    }

    pub fn status(mut self, status: impl ClassToken) -> Self {
        self.options.status = Some(status.into_class_token());
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.options.rounded = rounded;
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.options.elevated = elevated;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.options.bordered = bordered;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.options.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.options.loading = loading;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.options.error = error;
        self
    }

    /// Compose without caching
    pub fn compose(&self) -> String {
        compose_classes(&self.base, &self.options)
    }

    /// Compose through the process-wide cache
    pub fn build(&self) -> String {
        cache::memoize(cache::class_cache(), self)
    }

    /// Compose through an explicit cache
    pub fn build_with(&self, cache: &dyn ClassNameCache) -> String {
        cache::memoize(cache, self)
    }
}

fn token_class(base: &str, token: Option<impl ClassToken>) -> String {
    match token {
        Some(token) => {
            let token = token.into_class_token();
            if token.trim().is_empty() {
                String::new()
            } else {
                format!("{base}-{token}")
            }
        }
        None => String::new(),
    }
}

/// `{base}-{size}`, or empty when no size is given
pub fn size_class(base: &str, size: Option<impl ClassToken>) -> String {
    token_class(base, size)
}

/// `{base}-{variant}`, or empty when no variant is given
pub fn variant_class(base: &str, variant: Option<impl ClassToken>) -> String {
    token_class(base, variant)
}

/// `{base}-{color}`, or empty when no color is given
pub fn color_class(base: &str, color: Option<impl ClassToken>) -> String {
    token_class(base, color)
}

/// Interaction state flags for [`state_classes`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateFlags {
    pub disabled: bool,
    pub loading: bool,
    pub error: bool,
    pub active: bool,
    pub hover: bool,
    pub focus: bool,
}

/// Space-joined `{base}-{state}` classes for every set flag
pub fn state_classes(base: &str, states: StateFlags) -> String {
    [
        (states.disabled, "disabled"),
        (states.loading, "loading"),
        (states.error, "error"),
        (states.active, "active"),
        (states.hover, "hover"),
        (states.focus, "focus"),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, state)| format!("{base}-{state}"))
    .collect::<Vec<_>>()
    .join(" ")
}

/// A class fragment accepted by [`cn`]
pub trait ClassPart {
    fn as_class(&self) -> Option<&str>;
}

impl ClassPart for &str {
    fn as_class(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassPart for String {
    fn as_class(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassPart for &String {
    fn as_class(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ClassPart> ClassPart for Option<T> {
    fn as_class(&self) -> Option<&str> {
        self.as_ref().and_then(ClassPart::as_class)
    }
}

/// Merge class fragments
///
/// Absent and blank fragments are skipped, fragments are split on
/// whitespace, and repeated classes keep only their first occurrence.
///
/// ```rust
/// use keypix_cn::cn;
///
/// let disabled = false;
/// let merged = cn([
///     Some("btn  btn-md"),
///     disabled.then_some("btn-disabled"),
///     Some("btn"),
///     Some(""),
/// ]);
/// assert_eq!(merged, "btn btn-md");
/// ```
pub fn cn<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: ClassPart,
{
    let parts: Vec<P> = parts.into_iter().collect();
    let mut seen = IndexSet::new();
    for part in &parts {
        if let Some(class) = part.as_class() {
            seen.extend(class.split_whitespace());
        }
    }
    seen.into_iter().collect::<Vec<_>>().join(" ")
}
