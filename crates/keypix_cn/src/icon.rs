//! Icon placement
//!
//! Components accept an explicit icon per side plus a shorthand `icon` that
//! lands on whichever side `icon_position` names. The icon payload is opaque:
//! an element handle, a glyph name, anything the caller renders.

use keypix_theme::{icon_size_class, IconPosition, Size};

use crate::class_names::cn;

/// Icon inputs as a component receives them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconProps<T> {
    pub left_icon: Option<T>,
    pub right_icon: Option<T>,
    pub icon: Option<T>,
    /// Side `icon` is placed on; left when unset
    pub icon_position: Option<IconPosition>,
}

impl<T> Default for IconProps<T> {
    fn default() -> Self {
        Self {
            left_icon: None,
            right_icon: None,
            icon: None,
            icon_position: None,
        }
    }
}

impl<T> IconProps<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, icon: T) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right(mut self, icon: T) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn icon(mut self, icon: T, position: IconPosition) -> Self {
        self.icon = Some(icon);
        self.icon_position = Some(position);
        self
    }
}

/// Final icon for each side
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIcons<T> {
    pub left_icon: Option<T>,
    pub right_icon: Option<T>,
}

/// Resolve which icon ends up on which side
///
/// An explicit side icon always wins its side. `icon` only fills the side
/// named by the position, and only when that side has no explicit icon.
pub fn process_icon_props<T>(props: IconProps<T>) -> ResolvedIcons<T> {
    let IconProps {
        left_icon,
        right_icon,
        icon,
        icon_position,
    } = props;

    match icon_position.unwrap_or_default() {
        IconPosition::Left => ResolvedIcons {
            left_icon: left_icon.or(icon),
            right_icon,
        },
        IconPosition::Right => ResolvedIcons {
            left_icon,
            right_icon: right_icon.or(icon),
        },
    }
}

/// Class list for a rendered icon: `inline-block`, the size box, then extras
pub fn icon_class_name(size: Option<Size>, class_name: Option<&str>) -> String {
    cn([Some("inline-block"), size.map(icon_size_class), class_name])
}
