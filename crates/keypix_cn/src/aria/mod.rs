//! Accessibility attributes
//!
//! Two layers:
//!
//! - [`build_accessibility_props`] is a plain filter: every key with a value
//!   is copied through unchanged, keys without a value are dropped. No
//!   renaming, no checking.
//! - [`create_aria_attributes`] and the role builders in [`roles`] map
//!   semantic intent (label, busy, sort direction) onto `aria-*` keys, pick a
//!   fixed `role`, and derive dependent attributes.
//!
//! # Example
//!
//! ```rust
//! use keypix_cn::aria::{build_accessibility_props, AriaValue};
//!
//! let attrs = build_accessibility_props([
//!     ("aria-label", Some(AriaValue::from("Close"))),
//!     ("aria-expanded", Some(AriaValue::from(false))),
//!     ("aria-describedby", None),
//! ]);
//!
//! assert_eq!(attrs.len(), 2);
//! assert_eq!(attrs.get("aria-expanded"), Some(&AriaValue::Bool(false)));
//! assert!(!attrs.contains_key("aria-describedby"));
//! ```

pub mod roles;
pub mod values;

use indexmap::IndexMap;
use serde::Serialize;

pub use roles::*;
pub use values::{
    AriaValue, CheckedState, CurrentState, DropEffect, HeaderScope, LivePoliteness, Orientation,
    PopupKind, SortDirection,
};

/// Ordered attribute map ready to spread onto an element
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AriaAttributes(IndexMap<String, AriaValue>);

impl AriaAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AriaValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set an attribute only when a value is present
    pub fn set_opt<V: Into<AriaValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Set a text attribute only when it is present and non-empty
    pub(crate) fn set_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(text) = value.filter(|text| !text.is_empty()) {
            self.set(key, text.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&AriaValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn role(&self) -> Option<&str> {
        self.get("role").and_then(AriaValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AriaValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as space-separated `key="value"` pairs with HTML escaping
    pub fn to_html_attributes(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}=\"{}\"", escape_attribute(&value.to_string())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl IntoIterator for AriaAttributes {
    type Item = (String, AriaValue);
    type IntoIter = indexmap::map::IntoIter<String, AriaValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Copy every key that has a value; drop the rest
pub fn build_accessibility_props<K, I>(options: I) -> AriaAttributes
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<AriaValue>)>,
{
    let mut attrs = AriaAttributes::new();
    for (key, value) in options {
        attrs.set_opt(key, value);
    }
    attrs
}

/// Semantic intent for [`create_aria_attributes`]
///
/// Text options are emitted only when non-empty. Boolean and numeric options
/// are emitted whenever they are set, `false` and `0` included.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AriaOptions {
    pub label: Option<String>,
    pub labelledby: Option<String>,
    pub describedby: Option<String>,
    pub description: Option<String>,
    pub hidden: Option<bool>,
    pub disabled: Option<bool>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub invalid: Option<bool>,
    pub error_message: Option<String>,

    // Live regions
    pub live: Option<LivePoliteness>,
    pub atomic: Option<bool>,
    pub relevant: Option<String>,
    pub busy: Option<bool>,

    // States
    pub expanded: Option<bool>,
    pub selected: Option<bool>,
    pub checked: Option<CheckedState>,
    pub pressed: Option<bool>,
    pub current: Option<CurrentState>,
    pub has_popup: Option<PopupKind>,
    pub controls: Option<String>,
    pub owns: Option<String>,
    pub active_descendant: Option<String>,

    // Navigation
    pub orientation: Option<Orientation>,
    pub sort: Option<SortDirection>,
    pub value_min: Option<f64>,
    pub value_max: Option<f64>,
    pub value_now: Option<f64>,
    pub value_text: Option<String>,

    // Drag and drop
    pub drop_effect: Option<DropEffect>,
    pub grabbed: Option<bool>,

    // Relationships
    pub flow_to: Option<String>,
    pub details: Option<String>,
    pub key_shortcuts: Option<String>,
    pub role_description: Option<String>,
}

/// Map semantic intent onto `aria-*` attributes
pub fn create_aria_attributes(options: &AriaOptions) -> AriaAttributes {
    let mut aria = AriaAttributes::new();

    aria.set_text("aria-label", options.label.as_deref());
    aria.set_text("aria-labelledby", options.labelledby.as_deref());
    aria.set_text("aria-describedby", options.describedby.as_deref());
    aria.set_text("aria-description", options.description.as_deref());
    aria.set_opt("aria-hidden", options.hidden);
    aria.set_opt("aria-disabled", options.disabled);
    aria.set_opt("aria-readonly", options.readonly);
    aria.set_opt("aria-required", options.required);
    aria.set_opt("aria-invalid", options.invalid);
    aria.set_text("aria-errormessage", options.error_message.as_deref());

    aria.set_opt("aria-live", options.live);
    aria.set_opt("aria-atomic", options.atomic);
    aria.set_text("aria-relevant", options.relevant.as_deref());
    aria.set_opt("aria-busy", options.busy);

    aria.set_opt("aria-expanded", options.expanded);
    aria.set_opt("aria-selected", options.selected);
    aria.set_opt("aria-checked", options.checked);
    aria.set_opt("aria-pressed", options.pressed);
    aria.set_opt("aria-current", options.current);
    aria.set_opt("aria-haspopup", options.has_popup);
    aria.set_text("aria-controls", options.controls.as_deref());
    aria.set_text("aria-owns", options.owns.as_deref());
    aria.set_text("aria-activedescendant", options.active_descendant.as_deref());

    aria.set_opt("aria-orientation", options.orientation);
    aria.set_opt("aria-sort", options.sort);
    aria.set_opt("aria-valuemin", options.value_min);
    aria.set_opt("aria-valuemax", options.value_max);
    aria.set_opt("aria-valuenow", options.value_now);
    aria.set_text("aria-valuetext", options.value_text.as_deref());

    aria.set_opt("aria-dropeffect", options.drop_effect);
    aria.set_opt("aria-grabbed", options.grabbed);

    aria.set_text("aria-flowto", options.flow_to.as_deref());
    aria.set_text("aria-details", options.details.as_deref());
    aria.set_text("aria-keyshortcuts", options.key_shortcuts.as_deref());
    aria.set_text("aria-roledescription", options.role_description.as_deref());

    aria
}

/// Report conflicting attributes and attributes a role requires
pub fn validate_aria_attributes(aria: &AriaAttributes) -> Vec<String> {
    let mut errors = Vec::new();

    if aria.contains_key("aria-checked") && aria.contains_key("aria-pressed") {
        errors.push("aria-checked and aria-pressed cannot be used together".to_string());
    }

    if aria.contains_key("aria-expanded") && aria.contains_key("aria-selected") {
        errors.push("aria-expanded and aria-selected cannot be used together".to_string());
    }

    match aria.role() {
        Some("progressbar") if !aria.contains_key("aria-valuenow") => {
            errors.push("aria-valuenow is required for progressbar role".to_string());
        }
        Some("slider")
            if !aria.contains_key("aria-valuemin") || !aria.contains_key("aria-valuemax") =>
        {
            errors.push("aria-valuemin and aria-valuemax are required for slider role".to_string());
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_drops_only_absent_values() {
        let attrs = build_accessibility_props(vec![
            ("aria-label".to_string(), Some(AriaValue::from("Menu"))),
            ("aria-busy".to_string(), Some(AriaValue::from(false))),
            ("tabIndex".to_string(), Some(AriaValue::from(0))),
            ("aria-live".to_string(), None),
            ("role".to_string(), Some(AriaValue::from("menu"))),
        ]);

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["aria-label", "aria-busy", "tabIndex", "role"]);
        assert_eq!(attrs.get("aria-busy"), Some(&AriaValue::Bool(false)));
        assert_eq!(attrs.get("tabIndex"), Some(&AriaValue::Number(0.0)));
    }

    #[test]
    fn test_filter_is_deterministic() {
        let input = || [("aria-pressed", Some(AriaValue::from(true))), ("aria-current", None)];
        assert_eq!(
            build_accessibility_props(input()),
            build_accessibility_props(input())
        );
    }

    #[test]
    fn test_rich_attributes() {
        let aria = create_aria_attributes(&AriaOptions {
            label: Some("Volume".into()),
            description: Some(String::new()),
            disabled: Some(false),
            checked: Some(CheckedState::Mixed),
            orientation: Some(Orientation::Horizontal),
            value_min: Some(0.0),
            value_max: Some(100.0),
            value_now: Some(40.0),
            live: Some(LivePoliteness::Polite),
            ..Default::default()
        });

        assert_eq!(aria.get("aria-label"), Some(&AriaValue::from("Volume")));
        assert!(!aria.contains_key("aria-description"));
        assert_eq!(aria.get("aria-disabled"), Some(&AriaValue::Bool(false)));
        assert_eq!(aria.get("aria-checked").and_then(AriaValue::as_str), Some("mixed"));
        assert_eq!(
            aria.get("aria-orientation").and_then(AriaValue::as_str),
            Some("horizontal")
        );
        assert_eq!(aria.get("aria-valuemin").and_then(AriaValue::as_number), Some(0.0));
        assert_eq!(aria.get("aria-live").and_then(AriaValue::as_str), Some("polite"));
        assert!(!aria.contains_key("role"));
    }

    #[test]
    fn test_empty_options() {
        assert!(create_aria_attributes(&AriaOptions::default()).is_empty());
    }

    #[test]
    fn test_validate_conflicts() {
        let aria = create_aria_attributes(&AriaOptions {
            checked: Some(true.into()),
            pressed: Some(false),
            expanded: Some(true),
            selected: Some(true),
            ..Default::default()
        });
        assert_eq!(
            validate_aria_attributes(&aria),
            vec![
                "aria-checked and aria-pressed cannot be used together",
                "aria-expanded and aria-selected cannot be used together",
            ]
        );
    }

    #[test]
    fn test_validate_required_by_role() {
        let mut progress = AriaAttributes::new();
        progress.set("role", "progressbar");
        assert_eq!(
            validate_aria_attributes(&progress),
            vec!["aria-valuenow is required for progressbar role"]
        );

        let mut slider = AriaAttributes::new();
        slider.set("role", "slider");
        slider.set("aria-valuemin", 0);
        assert_eq!(validate_aria_attributes(&slider).len(), 1);
        slider.set("aria-valuemax", 10);
        assert!(validate_aria_attributes(&slider).is_empty());
    }

    #[test]
    fn test_html_rendering() {
        let mut aria = AriaAttributes::new();
        aria.set("role", "button");
        aria.set("aria-label", "Say \"hi\" & <wave>");
        aria.set("aria-pressed", false);
        assert_eq!(
            aria.to_html_attributes(),
            "role=\"button\" aria-label=\"Say &quot;hi&quot; &amp; &lt;wave&gt;\" aria-pressed=\"false\""
        );
    }

    #[test]
    fn test_serializes_as_object() {
        let mut aria = AriaAttributes::new();
        aria.set("role", "status");
        aria.set("aria-atomic", true);
        aria.set("tabIndex", 0);
        aria.set("aria-valuenow", 42.5);
        assert_eq!(
            serde_json::to_string(&aria).unwrap(),
            r#"{"role":"status","aria-atomic":true,"tabIndex":0,"aria-valuenow":42.5}"#
        );
    }
}
