//! Style composition
//!
//! Lookup tables from tokens to CSS values, and [`StyleOptions`], which
//! resolves a set of optional tokens into a [`StyleMap`] of inline style
//! properties.
//!
//! Resolution order is fixed: size, border radius, shadow, full width, then
//! caller overrides. Overrides are applied last and replace any computed
//! property with the same key.
//!
//! # Example
//!
//! ```rust
//! use keypix_theme::{Shadow, Size, StyleOptions};
//!
//! let styles = StyleOptions::new()
//!     .size(Size::Sm)
//!     .shadow(Shadow::Md)
//!     .custom_style("padding", "0")
//!     .compose();
//!
//! assert_eq!(styles.get("padding"), Some("0"));
//! assert_eq!(styles.to_inline_css(), "font-size: 0.875rem; padding: 0; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1)");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::{BorderRadius, Shadow, Size};

/// Font size and padding for one [`Size`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeScale {
    pub font_size: &'static str,
    pub padding: &'static str,
}

impl Size {
    /// Typographic scale for this size
    pub const fn scale(self) -> SizeScale {
        let (font_size, padding) = match self {
            Size::Xs => ("0.75rem", "0.25rem 0.5rem"),
            Size::Sm => ("0.875rem", "0.375rem 0.75rem"),
            Size::Md => ("1rem", "0.5rem 1rem"),
            Size::Lg => ("1.125rem", "0.75rem 1.5rem"),
            Size::Xl => ("1.25rem", "1rem 2rem"),
            Size::Xxl => ("1.5rem", "1.25rem 2.5rem"),
        };
        SizeScale { font_size, padding }
    }
}

impl BorderRadius {
    /// CSS `border-radius` value
    pub const fn css(self) -> &'static str {
        match self {
            BorderRadius::None => "0",
            BorderRadius::Sm => "0.125rem",
            BorderRadius::Md => "0.375rem",
            BorderRadius::Lg => "0.5rem",
            BorderRadius::Xl => "0.75rem",
            BorderRadius::Full => "9999px",
        }
    }
}

impl Shadow {
    /// CSS `box-shadow` value
    pub const fn css(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Sm => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            Shadow::Md => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            Shadow::Lg => "0 10px 15px -3px rgba(0, 0, 0, 0.1)",
            Shadow::Xl => "0 20px 25px -5px rgba(0, 0, 0, 0.1)",
            Shadow::Xxl => "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
        }
    }
}

/// Utility classes sizing an inline icon
pub const fn icon_size_class(size: Size) -> &'static str {
    match size {
        Size::Xs => "w-3 h-3",
        Size::Sm => "w-4 h-4",
        Size::Md => "w-5 h-5",
        Size::Lg => "w-6 h-6",
        Size::Xl => "w-8 h-8",
        Size::Xxl => "w-10 h-10",
    }
}

/// Ordered map of style properties, keyed by camelCase property name
/// (`fontSize`, `boxShadow`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property of `other` into this map. Keys in `other` win.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Render as an inline `style` attribute value
    pub fn to_inline_css(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}: {}", kebab_case(key), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Inputs for [`compose_styles`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    pub size: Option<Size>,
    pub border_radius: Option<BorderRadius>,
    pub shadow: Option<Shadow>,
    pub full_width: bool,
    pub custom_styles: Option<StyleMap>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Replace the override map
    pub fn custom_styles(mut self, styles: StyleMap) -> Self {
        self.custom_styles = Some(styles);
        self
    }

    /// Add a single override property
    pub fn custom_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_styles
            .get_or_insert_with(StyleMap::new)
            .insert(key, value);
        self
    }

    pub fn compose(&self) -> StyleMap {
        compose_styles(self)
    }
}

/// Resolve style options into inline style properties
pub fn compose_styles(options: &StyleOptions) -> StyleMap {
    let mut styles = StyleMap::new();

    if let Some(size) = options.size {
        let scale = size.scale();
        styles.insert("fontSize", scale.font_size);
        styles.insert("padding", scale.padding);
    }

    if let Some(radius) = options.border_radius {
        styles.insert("borderRadius", radius.css());
    }

    if let Some(shadow) = options.shadow {
        styles.insert("boxShadow", shadow.css());
    }

    if options.full_width {
        styles.insert("width", "100%");
    }

    if let Some(custom) = &options.custom_styles {
        styles.merge(custom);
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rem(value: &str) -> f32 {
        value.trim_end_matches("rem").parse().unwrap()
    }

    #[test]
    fn test_empty_options() {
        assert!(StyleOptions::new().compose().is_empty());
    }

    #[test]
    fn test_size_styles() {
        let styles = StyleOptions::new().size(Size::Md).compose();
        assert_eq!(styles.get("fontSize"), Some("1rem"));
        assert_eq!(styles.get("padding"), Some("0.5rem 1rem"));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_size_scale_is_monotonic() {
        let fonts: Vec<f32> = Size::ALL.iter().map(|s| rem(s.scale().font_size)).collect();
        assert!(fonts.windows(2).all(|w| w[0] < w[1]));

        let paddings: Vec<f32> = Size::ALL
            .iter()
            .map(|s| rem(s.scale().padding.split(' ').next().unwrap()))
            .collect();
        assert!(paddings.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_radius_and_shadow() {
        let styles = StyleOptions::new()
            .border_radius(BorderRadius::Lg)
            .shadow(Shadow::Md)
            .compose();
        assert_eq!(styles.get("borderRadius"), Some("0.5rem"));
        assert_eq!(
            styles.get("boxShadow"),
            Some("0 4px 6px -1px rgba(0, 0, 0, 0.1)")
        );
        assert_eq!(BorderRadius::Full.css(), "9999px");
        assert_eq!(BorderRadius::None.css(), "0");
        assert_eq!(Shadow::None.css(), "none");
    }

    #[test]
    fn test_full_width() {
        let styles = StyleOptions::new().full_width(true).compose();
        assert_eq!(styles.get("width"), Some("100%"));
        assert!(!StyleOptions::new().full_width(false).compose().contains_key("width"));
    }

    #[test]
    fn test_custom_styles_win() {
        let styles = StyleOptions::new()
            .size(Size::Lg)
            .full_width(true)
            .custom_style("backgroundColor", "red")
            .custom_style("width", "50%")
            .compose();

        assert_eq!(styles.get("backgroundColor"), Some("red"));
        assert_eq!(styles.get("width"), Some("50%"));
        assert_eq!(styles.get("fontSize"), Some("1.125rem"));
    }

    #[test]
    fn test_resolution_order() {
        let styles = StyleOptions::new()
            .full_width(true)
            .shadow(Shadow::Sm)
            .border_radius(BorderRadius::Sm)
            .size(Size::Xs)
            .compose();
        let keys: Vec<&str> = styles.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["fontSize", "padding", "borderRadius", "boxShadow", "width"]
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let options = StyleOptions::new()
            .size(Size::Xl)
            .shadow(Shadow::Xxl)
            .custom_style("color", "blue");
        assert_eq!(options.compose(), options.compose());
    }

    #[test]
    fn test_inline_css() {
        let styles: StyleMap = [("borderRadius", "0.375rem"), ("width", "100%")]
            .into_iter()
            .collect();
        assert_eq!(styles.to_inline_css(), "border-radius: 0.375rem; width: 100%");
    }

    #[test]
    fn test_icon_size_classes() {
        assert_eq!(icon_size_class(Size::Xs), "w-3 h-3");
        assert_eq!(icon_size_class(Size::Xxl), "w-10 h-10");
    }
}
