//! Prop validation
//!
//! [`validate_component_props`] checks a bag of dynamic values against a
//! declarative [`Schema`]. Failures come back as data: a map from field name
//! to message, containing only the fields that failed.
//!
//! Each field is checked in order and the first failure wins:
//!
//! 1. required and empty (`null`, missing or `""`): `"{field} is required"`
//! 2. missing or `null`: valid, nothing else runs
//! 3. wrong runtime type: `"{field} must be of type {type}"`
//! 4. custom validator, if any: its message
//!
//! A validator that panics is a bug in caller code and is not caught.
//!
//! # Example
//!
//! ```rust
//! use keypix_cn::validation::{validate_component_props, FieldSchema, PropType, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new().field("count", FieldSchema::new(PropType::Number));
//! let props = json!({ "count": "x" });
//!
//! let errors = validate_component_props(props.as_object().unwrap(), &schema);
//! assert_eq!(errors.get("count").map(String::as_str), Some("count must be of type number"));
//! ```

pub mod rules;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use rules::Rule;

/// Field name to error message, in schema order
pub type FieldErrors = IndexMap<String, String>;

/// Runtime type of a prop value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl PropType {
    /// Runtime type of `value`; `null` has none
    pub fn of(value: &Value) -> Option<PropType> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(PropType::Boolean),
            Value::Number(_) => Some(PropType::Number),
            Value::String(_) => Some(PropType::String),
            Value::Array(_) => Some(PropType::Array),
            Value::Object(_) => Some(PropType::Object),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Object => "object",
            PropType::Array => "array",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constraints for a single field
#[derive(Clone)]
pub struct FieldSchema {
    pub kind: PropType,
    pub required: bool,
    pub validator: Option<Rule>,
}

impl FieldSchema {
    pub fn new(kind: PropType) -> Self {
        Self {
            kind,
            required: false,
            validator: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a custom check, run only once presence and type have passed
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Attach an already shared rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.validator = Some(rule);
        self
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Ordered field schemas
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(name.into(), schema);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `null`, a missing value, or the empty string
pub(crate) fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn check_field(name: &str, field: &FieldSchema, value: Option<&Value>) -> Option<String> {
    if field.required && is_missing(value) {
        return Some(format!("{name} is required"));
    }

    let value = match value {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    if PropType::of(value) != Some(field.kind) {
        return Some(format!("{name} must be of type {}", field.kind));
    }

    field
        .validator
        .as_ref()
        .and_then(|validator| validator(value))
        .filter(|message| !message.is_empty())
}

/// Validate `props` against `schema`
pub fn validate_component_props(props: &Map<String, Value>, schema: &Schema) -> FieldErrors {
    schema
        .iter()
        .filter_map(|(name, field)| {
            check_field(name, field, props.get(name)).map(|message| (name.to_string(), message))
        })
        .collect()
}

/// Validate any serializable props value
///
/// Non-object values are treated as an empty prop bag.
pub fn validate_serialized<T: Serialize>(
    props: &T,
    schema: &Schema,
) -> Result<FieldErrors, serde_json::Error> {
    let value = serde_json::to_value(props)?;
    let empty = Map::new();
    let props = value.as_object().unwrap_or(&empty);
    Ok(validate_component_props(props, schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_required_fields() {
        let props = object(json!({ "name": "", "email": "test@example.com" }));
        let schema = Schema::new()
            .field("name", FieldSchema::new(PropType::String).required())
            .field("email", FieldSchema::new(PropType::String).required());

        let errors = validate_component_props(&props, &schema);
        assert_eq!(errors.get("name").map(String::as_str), Some("name is required"));
        assert!(!errors.contains_key("email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_required_field() {
        let schema = Schema::new().field("title", FieldSchema::new(PropType::String).required());
        let errors = validate_component_props(&Map::new(), &schema);
        assert_eq!(errors.get("title").map(String::as_str), Some("title is required"));

        let errors = validate_component_props(&object(json!({ "title": null })), &schema);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_type_mismatch() {
        let props = object(json!({ "count": "not-a-number" }));
        let schema = Schema::new().field("count", FieldSchema::new(PropType::Number));

        let errors = validate_component_props(&props, &schema);
        assert_eq!(
            errors.get("count").map(String::as_str),
            Some("count must be of type number")
        );
    }

    #[test]
    fn test_arrays_are_not_objects() {
        let props = object(json!({ "items": [1, 2], "meta": { "a": 1 } }));
        let schema = Schema::new()
            .field("items", FieldSchema::new(PropType::Object))
            .field("meta", FieldSchema::new(PropType::Object));

        let errors = validate_component_props(&props, &schema);
        assert_eq!(
            errors.get("items").map(String::as_str),
            Some("items must be of type object")
        );
        assert!(!errors.contains_key("meta"));
    }

    #[test]
    fn test_optional_null_skips_checks() {
        let props = object(json!({ "label": null }));
        let schema = Schema::new().field(
            "label",
            FieldSchema::new(PropType::String).validator(|_| Some("never".into())),
        );
        assert!(validate_component_props(&props, &schema).is_empty());
    }

    #[test]
    fn test_custom_validator() {
        let schema = Schema::new().field(
            "age",
            FieldSchema::new(PropType::Number).validator(|value| {
                (value.as_f64().unwrap_or(0.0) < 18.0).then(|| "must be an adult".to_string())
            }),
        );

        let errors = validate_component_props(&object(json!({ "age": 12 })), &schema);
        assert_eq!(errors.get("age").map(String::as_str), Some("must be an adult"));

        let errors = validate_component_props(&object(json!({ "age": 30 })), &schema);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_first_failure_wins() {
        let schema = Schema::new().field(
            "tag",
            FieldSchema::new(PropType::String)
                .required()
                .validator(|_| Some("custom".into())),
        );
        let errors = validate_component_props(&object(json!({ "tag": 5 })), &schema);
        assert_eq!(errors.get("tag").map(String::as_str), Some("tag must be of type string"));
    }

    #[test]
    fn test_empty_message_is_not_an_error() {
        let schema = Schema::new().field(
            "flag",
            FieldSchema::new(PropType::Boolean).validator(|_| Some(String::new())),
        );
        assert!(validate_component_props(&object(json!({ "flag": true })), &schema).is_empty());
    }

    #[test]
    fn test_valid_props_yield_no_errors() {
        let props = object(json!({
            "name": "Ada",
            "count": 3,
            "open": false,
            "items": [],
            "meta": {},
        }));
        let schema = Schema::new()
            .field("name", FieldSchema::new(PropType::String).required())
            .field("count", FieldSchema::new(PropType::Number).required())
            .field("open", FieldSchema::new(PropType::Boolean).required())
            .field("items", FieldSchema::new(PropType::Array))
            .field("meta", FieldSchema::new(PropType::Object))
            .field("missing", FieldSchema::new(PropType::String));

        let first = validate_component_props(&props, &schema);
        assert!(first.is_empty());
        assert_eq!(first, validate_component_props(&props, &schema));
    }

    #[test]
    fn test_errors_follow_schema_order() {
        let schema = Schema::new()
            .field("b", FieldSchema::new(PropType::String).required())
            .field("a", FieldSchema::new(PropType::String).required());
        let errors = validate_component_props(&Map::new(), &schema);
        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_validate_serialized_struct() {
        #[derive(Serialize)]
        struct ButtonProps {
            label: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            size: Option<String>,
        }

        let schema = Schema::new()
            .field("label", FieldSchema::new(PropType::String).required())
            .field("size", FieldSchema::new(PropType::String).required());

        let errors = validate_serialized(
            &ButtonProps {
                label: "Save".into(),
                size: None,
            },
            &schema,
        )
        .unwrap();
        assert_eq!(errors.get("size").map(String::as_str), Some("size is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_prop_type_names() {
        assert_eq!(PropType::Boolean.to_string(), "boolean");
        assert_eq!(PropType::of(&json!([1])), Some(PropType::Array));
        assert_eq!(PropType::of(&Value::Null), None);
    }
}
