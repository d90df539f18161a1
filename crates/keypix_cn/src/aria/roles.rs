//! Role-specific attribute builders
//!
//! Each builder sets a fixed `role` and derives the dependent attributes for
//! one kind of widget. Boolean flags that only make sense when on (`disabled`,
//! `busy`, `required`) are plain `bool`s and emit `true` or nothing. States
//! that are meaningful when off (`pressed`, `expanded`, `selected`) are
//! `Option<bool>` and emit whatever was set.
//!
//! A `description` is never copied into the attributes. Instead a fresh
//! `description-*` id is generated for `aria-describedby`, and the caller
//! renders the description text under that id.

use serde::Serialize;

use super::values::{HeaderScope, LivePoliteness, Orientation, PopupKind, SortDirection};
use super::AriaAttributes;
use crate::id::generate_id;

fn with_role(role: &'static str) -> AriaAttributes {
    let mut aria = AriaAttributes::new();
    aria.set("role", role);
    aria
}

fn describe(aria: &mut AriaAttributes, label: Option<&str>, description: Option<&str>) {
    aria.set_text("aria-label", label);
    if description.is_some_and(|text| !text.is_empty()) {
        aria.set("aria-describedby", generate_id("description"));
    }
}

fn flag(aria: &mut AriaAttributes, key: &str, on: bool) {
    if on {
        aria.set(key, true);
    }
}

#[derive(Clone, Debug, Default)]
pub struct ButtonAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub pressed: Option<bool>,
    pub expanded: Option<bool>,
    pub has_popup: Option<PopupKind>,
    pub controls: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    pub busy: bool,
}

/// `role="button"`; loading or busy marks it `aria-busy`
pub fn create_button_aria(options: &ButtonAria) -> AriaAttributes {
    let mut aria = with_role("button");
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    aria.set_opt("aria-pressed", options.pressed);
    aria.set_opt("aria-expanded", options.expanded);
    aria.set_opt("aria-haspopup", options.has_popup);
    aria.set_text("aria-controls", options.controls.as_deref());
    flag(&mut aria, "aria-disabled", options.disabled);
    flag(&mut aria, "aria-busy", options.loading || options.busy);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct InputAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
    pub required: bool,
    pub invalid: bool,
    pub readonly: bool,
    pub disabled: bool,
    /// HTML input type, used to pick the role
    pub input_type: Option<String>,
}

/// Text entry attributes; the role follows the input type
pub fn create_input_aria(options: &InputAria) -> AriaAttributes {
    let mut aria = AriaAttributes::new();
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());

    let has_error = options.error.as_deref().is_some_and(|e| !e.is_empty());
    if has_error {
        aria.set("aria-errormessage", generate_id("error"));
    }
    flag(&mut aria, "aria-required", options.required);
    flag(&mut aria, "aria-invalid", options.invalid || has_error);
    flag(&mut aria, "aria-readonly", options.readonly);
    flag(&mut aria, "aria-disabled", options.disabled);

    let role = match options.input_type.as_deref() {
        Some("search") => "searchbox",
        Some("number") => "spinbutton",
        Some("range") => "slider",
        _ => "textbox",
    };
    aria.set("role", role);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct ListAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub orientation: Option<Orientation>,
    pub multiselectable: Option<bool>,
    pub required: bool,
    pub disabled: bool,
}

pub fn create_list_aria(options: &ListAria) -> AriaAttributes {
    let mut aria = with_role("listbox");
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    aria.set_opt("aria-orientation", options.orientation);
    aria.set_opt("aria-multiselectable", options.multiselectable);
    flag(&mut aria, "aria-required", options.required);
    flag(&mut aria, "aria-disabled", options.disabled);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct ListItemAria {
    pub selected: Option<bool>,
    pub disabled: bool,
    pub pos_in_set: Option<u32>,
    pub set_size: Option<u32>,
    pub level: Option<u32>,
}

pub fn create_list_item_aria(options: &ListItemAria) -> AriaAttributes {
    let mut aria = with_role("option");
    aria.set_opt("aria-selected", options.selected);
    flag(&mut aria, "aria-disabled", options.disabled);
    aria.set_opt("aria-posinset", options.pos_in_set);
    aria.set_opt("aria-setsize", options.set_size);
    aria.set_opt("aria-level", options.level);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct TableAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub sortable: bool,
    pub sort_direction: Option<SortDirection>,
    pub busy: bool,
}

/// `role="table"`; sortable tables always carry `aria-sort`
pub fn create_table_aria(options: &TableAria) -> AriaAttributes {
    let mut aria = with_role("table");
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    if options.sortable {
        aria.set("aria-sort", options.sort_direction.unwrap_or(SortDirection::None));
    }
    flag(&mut aria, "aria-busy", options.busy);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct TableHeaderAria {
    pub sortable: bool,
    pub sort_direction: Option<SortDirection>,
    pub selected: Option<bool>,
    pub scope: Option<HeaderScope>,
}

pub fn create_table_header_aria(options: &TableHeaderAria) -> AriaAttributes {
    let mut aria = with_role("columnheader");
    if options.sortable {
        aria.set("aria-sort", options.sort_direction.unwrap_or(SortDirection::None));
    }
    aria.set_opt("aria-selected", options.selected);
    aria.set_opt("aria-scope", options.scope);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct DialogAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub modal: bool,
    pub busy: bool,
    pub expanded: Option<bool>,
}

/// Modal dialogs are announced as `alertdialog`
pub fn create_dialog_aria(options: &DialogAria) -> AriaAttributes {
    let mut aria = with_role(if options.modal { "alertdialog" } else { "dialog" });
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    flag(&mut aria, "aria-busy", options.busy);
    aria.set_opt("aria-expanded", options.expanded);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct ProgressAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value_text: Option<String>,
    pub busy: bool,
}

pub fn create_progress_aria(options: &ProgressAria) -> AriaAttributes {
    let mut aria = with_role("progressbar");
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    aria.set_opt("aria-valuenow", options.value);
    aria.set_opt("aria-valuemin", options.min);
    aria.set_opt("aria-valuemax", options.max);
    aria.set_text("aria-valuetext", options.value_text.as_deref());
    flag(&mut aria, "aria-busy", options.busy);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct StatusAria {
    pub label: Option<String>,
    pub description: Option<String>,
    /// Defaults to polite
    pub live: Option<LivePoliteness>,
    /// Defaults to `true`
    pub atomic: Option<bool>,
    pub busy: bool,
}

pub fn create_status_aria(options: &StatusAria) -> AriaAttributes {
    let mut aria = with_role("status");
    aria.set("aria-live", options.live.unwrap_or(LivePoliteness::Polite));
    aria.set("aria-atomic", options.atomic.unwrap_or(true));
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    flag(&mut aria, "aria-busy", options.busy);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct AlertAria {
    pub label: Option<String>,
    pub description: Option<String>,
    /// Defaults to `true`
    pub atomic: Option<bool>,
    pub busy: bool,
}

/// Alerts are always assertive
pub fn create_alert_aria(options: &AlertAria) -> AriaAttributes {
    let mut aria = with_role("alert");
    aria.set("aria-live", LivePoliteness::Assertive);
    aria.set("aria-atomic", options.atomic.unwrap_or(true));
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    flag(&mut aria, "aria-busy", options.busy);
    aria
}

#[derive(Clone, Debug, Default)]
pub struct TooltipAria {
    pub label: Option<String>,
    pub description: Option<String>,
    pub controls: Option<String>,
}

pub fn create_tooltip_aria(options: &TooltipAria) -> AriaAttributes {
    let mut aria = with_role("tooltip");
    describe(&mut aria, options.label.as_deref(), options.description.as_deref());
    aria.set_text("aria-controls", options.controls.as_deref());
    aria
}

/// Inputs for [`create_accessible_label`]
///
/// Ids that are not supplied are generated.
#[derive(Clone, Debug, Default)]
pub struct AccessibleLabelOptions {
    pub label: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
    pub required: bool,
    pub id: Option<String>,
    pub label_id: Option<String>,
    pub description_id: Option<String>,
    pub error_id: Option<String>,
}

/// Attributes for the `<label>` element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelProps {
    pub id: String,
    pub html_for: String,
}

/// Attributes for the description element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DescriptionProps {
    pub id: String,
}

/// Attributes for the error element, announced politely
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorProps {
    pub id: String,
    pub role: &'static str,
    #[serde(rename = "aria-live")]
    pub aria_live: LivePoliteness,
}

/// Wiring between a field, its label, description and error message
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleLabel {
    pub id: String,
    pub label_id: String,
    pub description_id: String,
    pub error_id: String,
    pub aria: AriaAttributes,
    pub label_props: Option<LabelProps>,
    pub description_props: Option<DescriptionProps>,
    pub error_props: Option<ErrorProps>,
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.is_empty())
}

/// Build ids and attributes linking a form field to its label texts
///
/// `aria-describedby` lists the description id when there is a description
/// and the error id when there is an error, in that order.
pub fn create_accessible_label(options: AccessibleLabelOptions) -> AccessibleLabel {
    let has_label = non_empty(&options.label);
    let has_description = non_empty(&options.description);
    let has_error = non_empty(&options.error);

    let id = options.id.unwrap_or_else(|| generate_id("field"));
    let label_id = options.label_id.unwrap_or_else(|| generate_id("label"));
    let description_id = options
        .description_id
        .unwrap_or_else(|| generate_id("description"));
    let error_id = options.error_id.unwrap_or_else(|| generate_id("error"));

    let mut aria = AriaAttributes::new();
    aria.set("aria-labelledby", label_id.clone());

    let described_by: Vec<&str> = [
        has_description.then_some(description_id.as_str()),
        has_error.then_some(error_id.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !described_by.is_empty() {
        aria.set("aria-describedby", described_by.join(" "));
    }

    flag(&mut aria, "aria-required", options.required);
    flag(&mut aria, "aria-invalid", has_error);

    AccessibleLabel {
        label_props: has_label.then(|| LabelProps {
            id: label_id.clone(),
            html_for: id.clone(),
        }),
        description_props: has_description.then(|| DescriptionProps {
            id: description_id.clone(),
        }),
        error_props: has_error.then(|| ErrorProps {
            id: error_id.clone(),
            role: "alert",
            aria_live: LivePoliteness::Polite,
        }),
        id,
        label_id,
        description_id,
        error_id,
        aria,
    }
}
