//! Composable validation rules
//!
//! A rule maps a value to an optional error message. Rules other than
//! [`required`] are permissive on empty input: an empty value passes and
//! presence has to be enforced by combining with [`required`] (see
//! [`compose`] and the `required_*` presets).
//!
//! Emptiness follows the host's falsiness: `null`, `""`, `false` and `0` are
//! empty for the permissive rules. [`required`] is stricter about what counts
//! as missing: only `null` and `""` fail, so `0` and `false` are present
//! values. [`min`] and [`max`] treat only `null` as empty.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};

use super::is_missing;

/// A shareable validation rule
pub type Rule = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const NUMBER_MESSAGE: &str = "Must be a valid number";
pub const URL_MESSAGE: &str = "Please enter a valid URL";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const PASSWORD_MESSAGE: &str = "Password must contain at least 8 characters, one uppercase \
    letter, one lowercase letter, one number, and one special character";

const PASSWORD_SPECIALS: &str = "@$!%*?&";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("valid scheme pattern"));

/// Wrap a plain function or closure as a [`Rule`]
pub fn rule<F>(f: F) -> Rule
where
    F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

fn length(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        other => as_text(other).chars().count(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_text(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric reading of text, following the host's string-to-number rules
///
/// Blank text is `0`. Accepts decimal and exponent forms, unsigned
/// `0x`/`0o`/`0b` integers and a signed `Infinity`. Anything else, including
/// `inf` and `NaN`, is not a number.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let numeric_start = unsigned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    if unsigned != "Infinity" && !numeric_start {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// `scheme:rest` where a `//` authority, when present, names a host
fn is_absolute_url(text: &str) -> bool {
    let Some((scheme, rest)) = text.split_once(':') else {
        return false;
    };
    if !SCHEME_RE.is_match(scheme) || rest.is_empty() || rest.chars().any(char::is_whitespace) {
        return false;
    }
    match rest.strip_prefix("//") {
        Some(after) if !scheme.eq_ignore_ascii_case("file") => after
            .split(['/', '?', '#'])
            .next()
            .is_some_and(|host| !host.is_empty()),
        _ => true,
    }
}

/// Fails on `null`, missing and `""`; `0` and `false` pass
pub fn required(value: &Value) -> Option<String> {
    is_missing(Some(value)).then(|| REQUIRED_MESSAGE.to_string())
}

pub fn email(value: &Value) -> Option<String> {
    if is_falsy(value) || EMAIL_RE.is_match(&as_text(value)) {
        None
    } else {
        Some(EMAIL_MESSAGE.to_string())
    }
}

/// Minimum length in characters (or items, for arrays)
pub fn min_length(min: usize) -> Rule {
    rule(move |value| {
        (!is_falsy(value) && length(value) < min)
            .then(|| format!("Must be at least {min} characters"))
    })
}

/// Maximum length in characters (or items, for arrays)
pub fn max_length(max: usize) -> Rule {
    rule(move |value| {
        (!is_falsy(value) && length(value) > max)
            .then(|| format!("Must be no more than {max} characters"))
    })
}

/// Numeric lower bound. Values that are not numbers fail.
pub fn min(min: f64) -> Rule {
    rule(move |value| {
        if value.is_null() {
            return None;
        }
        match as_number(value) {
            Some(n) if n >= min => None,
            _ => Some(format!("Must be at least {min}")),
        }
    })
}

/// Numeric upper bound. Values that are not numbers fail.
pub fn max(max: f64) -> Rule {
    rule(move |value| {
        if value.is_null() {
            return None;
        }
        match as_number(value) {
            Some(n) if n <= max => None,
            _ => Some(format!("Must be no more than {max}")),
        }
    })
}

/// Caller-supplied pattern and message
pub fn pattern(regex: Regex, message: impl Into<String>) -> Rule {
    let message = message.into();
    rule(move |value| {
        (!is_falsy(value) && !regex.is_match(&as_text(value))).then(|| message.clone())
    })
}

pub fn number(value: &Value) -> Option<String> {
    (!is_falsy(value) && as_number(value).is_none()).then(|| NUMBER_MESSAGE.to_string())
}

/// Absolute URL of the form `scheme:rest`; `scheme://` needs a host
/// except for `file`
pub fn url(value: &Value) -> Option<String> {
    (!is_falsy(value) && !is_absolute_url(&as_text(value))).then(|| URL_MESSAGE.to_string())
}

/// Up to 16 digits with an optional leading `+`; spaces, dashes and
/// parentheses are ignored
pub fn phone(value: &Value) -> Option<String> {
    if is_falsy(value) {
        return None;
    }
    let cleaned: String = as_text(value)
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r' | '-' | '(' | ')'))
        .collect();
    (!PHONE_RE.is_match(&cleaned)).then(|| PHONE_MESSAGE.to_string())
}

/// At least 8 characters with a lowercase letter, an uppercase letter, a
/// digit and one of `@$!%*?&`, and nothing outside those classes
pub fn password(value: &Value) -> Option<String> {
    if is_falsy(value) {
        return None;
    }
    let text = as_text(value);
    let allowed = text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    let strong = text.chars().count() >= 8
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    (!(allowed && strong)).then(|| PASSWORD_MESSAGE.to_string())
}

/// Run rules in order; the first failure wins
pub fn compose(rules: impl IntoIterator<Item = Rule>) -> Rule {
    let rules: Vec<Rule> = rules.into_iter().collect();
    rule(move |value| validate_field(value, &rules))
}

pub fn required_email() -> Rule {
    compose([rule(required), rule(email)])
}

pub fn required_password() -> Rule {
    compose([rule(required), rule(password)])
}

pub fn required_min_length(min: usize) -> Rule {
    compose([rule(required), min_length(min)])
}

pub fn required_max_length(max: usize) -> Rule {
    compose([rule(required), max_length(max)])
}

pub fn required_number() -> Rule {
    compose([rule(required), rule(number)])
}

pub fn required_url() -> Rule {
    compose([rule(required), rule(url)])
}

pub fn required_phone() -> Rule {
    compose([rule(required), rule(phone)])
}

/// First error among `rules`
pub fn validate_field(value: &Value, rules: &[Rule]) -> Option<String> {
    rules.iter().find_map(|rule| rule(value))
}

/// Validate every field named in `schema`. Missing fields are checked as
/// `null`, and every schema field appears in the result.
pub fn validate_form(
    data: &Map<String, Value>,
    schema: &IndexMap<String, Vec<Rule>>,
) -> IndexMap<String, Option<String>> {
    schema
        .iter()
        .map(|(field, rules)| {
            let value = data.get(field).unwrap_or(&Value::Null);
            (field.clone(), validate_field(value, rules))
        })
        .collect()
}

pub fn has_errors(errors: &IndexMap<String, Option<String>>) -> bool {
    errors.values().any(Option::is_some)
}

pub fn first_error(errors: &IndexMap<String, Option<String>>) -> Option<&str> {
    errors.values().find_map(|error| error.as_deref())
}
