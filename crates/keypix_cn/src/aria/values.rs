//! Typed ARIA attribute values

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single attribute value as it appears on an element
///
/// Serializes as a bare JSON boolean, number or string. Whole numbers are
/// written as integers, so `tabIndex: 0` stays `0`.
#[derive(Clone, Debug, PartialEq)]
pub enum AriaValue {
    Bool(bool),
    Number(f64),
    Text(Cow<'static, str>),
}

impl AriaValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AriaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AriaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AriaValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Largest magnitude at which every integer is exactly representable
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for AriaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AriaValue::Bool(b) => serializer.serialize_bool(*b),
            AriaValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            AriaValue::Number(n) => serializer.serialize_f64(*n),
            AriaValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for AriaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AriaValue::Bool(b) => write!(f, "{b}"),
            AriaValue::Number(n) => write!(f, "{n}"),
            AriaValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AriaValue {
    fn from(value: bool) -> Self {
        AriaValue::Bool(value)
    }
}

impl From<f64> for AriaValue {
    fn from(value: f64) -> Self {
        AriaValue::Number(value)
    }
}

impl From<i32> for AriaValue {
    fn from(value: i32) -> Self {
        AriaValue::Number(value.into())
    }
}

impl From<u32> for AriaValue {
    fn from(value: u32) -> Self {
        AriaValue::Number(value.into())
    }
}

impl From<&'static str> for AriaValue {
    fn from(value: &'static str) -> Self {
        AriaValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for AriaValue {
    fn from(value: String) -> Self {
        AriaValue::Text(Cow::Owned(value))
    }
}

macro_rules! aria_token {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl From<$name> for AriaValue {
            fn from(value: $name) -> Self {
                AriaValue::Text(Cow::Borrowed(value.token()))
            }
        }
    };
}

aria_token! {
    /// `aria-live` politeness
    LivePoliteness {
        Off => "off",
        Polite => "polite",
        Assertive => "assertive",
    }
}

aria_token! {
    /// `aria-orientation`, also used for keyboard navigation
    #[derive(Default)]
    Orientation {
        Horizontal => "horizontal",
        #[default]
        Vertical => "vertical",
    }
}

aria_token! {
    /// `aria-sort`
    SortDirection {
        Ascending => "ascending",
        Descending => "descending",
        None => "none",
        Other => "other",
    }
}

aria_token! {
    /// `aria-dropeffect`
    DropEffect {
        Copy => "copy",
        Execute => "execute",
        Link => "link",
        Move => "move",
        None => "none",
        Popup => "popup",
    }
}

aria_token! {
    /// Scope of a table header cell
    HeaderScope {
        Row => "row",
        Col => "col",
        RowGroup => "rowgroup",
        ColGroup => "colgroup",
    }
}

/// `aria-checked`: a boolean or the tri-state `mixed`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckedState {
    Checked(bool),
    Mixed,
}

impl From<bool> for CheckedState {
    fn from(value: bool) -> Self {
        CheckedState::Checked(value)
    }
}

impl From<CheckedState> for AriaValue {
    fn from(value: CheckedState) -> Self {
        match value {
            CheckedState::Checked(b) => AriaValue::Bool(b),
            CheckedState::Mixed => AriaValue::from("mixed"),
        }
    }
}

/// `aria-current`: a boolean or the kind of current item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurrentState {
    Flag(bool),
    Page,
    Step,
    Location,
    Date,
    Time,
}

impl From<bool> for CurrentState {
    fn from(value: bool) -> Self {
        CurrentState::Flag(value)
    }
}

impl From<CurrentState> for AriaValue {
    fn from(value: CurrentState) -> Self {
        match value {
            CurrentState::Flag(b) => AriaValue::Bool(b),
            CurrentState::Page => AriaValue::from("page"),
            CurrentState::Step => AriaValue::from("step"),
            CurrentState::Location => AriaValue::from("location"),
            CurrentState::Date => AriaValue::from("date"),
            CurrentState::Time => AriaValue::from("time"),
        }
    }
}

/// `aria-haspopup`: a boolean or the kind of popup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopupKind {
    Flag(bool),
    Menu,
    Listbox,
    Tree,
    Grid,
    Dialog,
}

impl From<bool> for PopupKind {
    fn from(value: bool) -> Self {
        PopupKind::Flag(value)
    }
}

impl From<PopupKind> for AriaValue {
    fn from(value: PopupKind) -> Self {
        match value {
            PopupKind::Flag(b) => AriaValue::Bool(b),
            PopupKind::Menu => AriaValue::from("menu"),
            PopupKind::Listbox => AriaValue::from("listbox"),
            PopupKind::Tree => AriaValue::from("tree"),
            PopupKind::Grid => AriaValue::from("grid"),
            PopupKind::Dialog => AriaValue::from("dialog"),
        }
    }
}
