//! Keyboard navigation
//!
//! Pure key-to-action mapping for lists and modals. The caller owns the event:
//! when an action comes back it suppresses the default browser behaviour and
//! applies the action, otherwise it lets the event through.

use crate::aria::Orientation;

/// Keys the navigation helpers react to, by DOM `KeyboardEvent.key` name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
}

impl NavKey {
    /// Parse a DOM key name; keys without a navigation meaning give `None`
    pub fn from_key(key: &str) -> Option<NavKey> {
        Some(match key {
            "ArrowUp" => NavKey::ArrowUp,
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            "Enter" => NavKey::Enter,
            " " => NavKey::Space,
            "Escape" => NavKey::Escape,
            _ => return None,
        })
    }
}

/// What a key press means for a list with a focused item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKeyAction {
    /// Move focus to this index
    Navigate(usize),
    /// Select this index
    Select(usize),
    /// Leave the list
    Dismiss,
}

/// Map a key press in a list to an action
///
/// Arrow keys wrap around at both ends. Up and Down always navigate; a
/// horizontal list also accepts Left and Right. An empty list has no actions.
pub fn list_key_action(
    key: NavKey,
    current: usize,
    total: usize,
    orientation: Orientation,
) -> Option<ListKeyAction> {
    if total == 0 {
        return None;
    }
    let horizontal = orientation == Orientation::Horizontal;
    let current = current.min(total - 1);

    let action = match key {
        NavKey::ArrowDown => ListKeyAction::Navigate((current + 1) % total),
        NavKey::ArrowRight if horizontal => ListKeyAction::Navigate((current + 1) % total),
        NavKey::ArrowUp => ListKeyAction::Navigate(current.checked_sub(1).unwrap_or(total - 1)),
        NavKey::ArrowLeft if horizontal => {
            ListKeyAction::Navigate(current.checked_sub(1).unwrap_or(total - 1))
        }
        NavKey::Home => ListKeyAction::Navigate(0),
        NavKey::End => ListKeyAction::Navigate(total - 1),
        NavKey::Enter | NavKey::Space => ListKeyAction::Select(current),
        NavKey::Escape => ListKeyAction::Dismiss,
        NavKey::ArrowLeft | NavKey::ArrowRight => return None,
    };
    Some(action)
}

/// What a key press means inside a modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKeyAction {
    Close,
    Confirm,
}

/// Map a key press in a modal to an action
///
/// Escape closes unless `close_on_escape` is off. Enter confirms only when
/// the modal has a confirm action.
pub fn modal_key_action(
    key: NavKey,
    close_on_escape: bool,
    has_confirm: bool,
) -> Option<ModalKeyAction> {
    match key {
        NavKey::Escape if close_on_escape => Some(ModalKeyAction::Close),
        NavKey::Enter if has_confirm => Some(ModalKeyAction::Confirm),
        _ => None,
    }
}
