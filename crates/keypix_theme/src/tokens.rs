//! Design tokens
//!
//! Each token family is a closed enum with a stable wire token (`"md"`,
//! `"destructive"`, `"2xl"`). The wire token is what ends up in class names
//! and serialized configuration; the enum is what the lookup tables match on,
//! so adding a member is a compile error until every table handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTokenError;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
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
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire token used in class names and configuration
            pub const fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $name {
            type Err = ParseTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ParseTokenError::new($kind, s)),
                }
            }
        }
    };
}

token_enum! {
    /// Component size scale. Declaration order is the scale order: padding and
    /// font size grow with rank.
    #[derive(PartialOrd, Ord, Default)]
    Size as "size" {
        /// Extra small
        Xs => "xs",
        /// Small
        Sm => "sm",
        /// Medium
        #[default]
        Md => "md",
        /// Large
        Lg => "lg",
        /// Extra large
        Xl => "xl",
        /// Double extra large
        Xxl => "2xl",
    }
}

token_enum! {
    /// Visual treatment of a component (shadcn-style variants plus the
    /// semantic success/warning/info fills)
    #[derive(Default)]
    Variant as "variant" {
        /// Filled with the primary color
        #[default]
        Default => "default",
        /// Muted fill
        Secondary => "secondary",
        /// Danger fill
        Destructive => "destructive",
        /// Border only
        Outline => "outline",
        /// No background until hovered
        Ghost => "ghost",
        /// Rendered as a text link
        Link => "link",
        /// Success fill
        Success => "success",
        /// Warning fill
        Warning => "warning",
        /// Informational fill
        Info => "info",
    }
}

token_enum! {
    /// Semantic color. Every member resolves to a full palette entry, see
    /// [`Color::values`](crate::palette).
    Color as "color" {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Muted => "muted",
    }
}

token_enum! {
    /// Presence status shown on avatars and badges
    Status as "status" {
        Online => "online",
        Offline => "offline",
        Away => "away",
        Busy => "busy",
        Pending => "pending",
    }
}

token_enum! {
    /// Side an icon is rendered on
    #[derive(Default)]
    IconPosition as "icon position" {
        #[default]
        Left => "left",
        Right => "right",
    }
}

token_enum! {
    /// Corner radius presets
    #[derive(PartialOrd, Ord)]
    BorderRadius as "border radius" {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
}

token_enum! {
    /// Box shadow presets
    #[derive(PartialOrd, Ord)]
    Shadow as "shadow" {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
    }
}

token_enum! {
    /// Spacing density for lists and tables
    #[derive(PartialOrd, Ord)]
    Density as "density" {
        Compact => "compact",
        Comfortable => "comfortable",
        Spacious => "spacious",
    }
}

token_enum! {
    /// Cross-axis alignment
    Alignment as "alignment" {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
    }
}

token_enum! {
    /// Responsive width bucket
    #[derive(PartialOrd, Ord, Default)]
    Breakpoint as "breakpoint" {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_order_is_scale_order() {
        let mut sizes = Size::ALL.to_vec();
        sizes.reverse();
        sizes.sort();
        assert_eq!(sizes, Size::ALL);
        assert!(Size::Xs < Size::Xxl);
    }

    #[test]
    fn test_tokens_parse_back() {
        for size in Size::ALL {
            assert_eq!(size.token().parse::<Size>(), Ok(*size));
        }
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(*variant));
        }
        assert_eq!("2xl".parse::<Shadow>(), Ok(Shadow::Xxl));
    }

    #[test]
    fn test_unknown_token() {
        let err = "huge".parse::<Size>().unwrap_err();
        assert_eq!(err.kind, "size");
        assert_eq!(err.to_string(), "unknown size token 'huge'");
        assert!("primary".parse::<Variant>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_tokens() {
        assert_eq!(serde_json::to_string(&Size::Xxl).unwrap(), "\"2xl\"");
        assert_eq!(
            serde_json::from_str::<Color>("\"muted\"").unwrap(),
            Color::Muted
        );
        assert_eq!(
            serde_json::from_str::<Breakpoint>("\"lg\"").unwrap(),
            Breakpoint::Lg
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Size::default(), Size::Md);
        assert_eq!(Variant::default(), Variant::Default);
        assert_eq!(IconPosition::default(), IconPosition::Left);
        assert_eq!(Breakpoint::default(), Breakpoint::Md);
    }
}
