//! # Keypix Theme
//!
//! The shared design vocabulary every Keypix component draws its styling from.
//!
//! - **Tokens**: closed enumerations for size, variant, color, status, icon
//!   position, border radius, shadow, density, alignment and breakpoints
//! - **Palette**: the fixed background/text/border/hover quadruple for each
//!   [`Color`]
//! - **Styles**: lookup tables for size scales, radii and shadows, and the
//!   [`StyleOptions`] composer that turns them into a [`StyleMap`]
//!
//! Nothing in this crate knows about a rendering target. Components receive
//! plain strings and maps and apply them however their framework wants.
//!
//! ## Example
//!
//! ```rust
//! use keypix_theme::{BorderRadius, Color, Size, StyleOptions};
//!
//! let styles = StyleOptions::new()
//!     .size(Size::Md)
//!     .border_radius(BorderRadius::Lg)
//!     .full_width(true)
//!     .compose();
//!
//! assert_eq!(styles.get("fontSize"), Some("1rem"));
//! assert_eq!(styles.get("borderRadius"), Some("0.5rem"));
//! assert_eq!(styles.get("width"), Some("100%"));
//!
//! let primary = Color::Primary.values();
//! assert_eq!(primary.hover.to_string(), "rgb(37 99 235)");
//! ```

pub mod error;
pub mod palette;
pub mod style;
pub mod tokens;

pub use error::ParseTokenError;
pub use palette::{color_values, ColorValues, Rgb};
pub use style::{compose_styles, icon_size_class, SizeScale, StyleMap, StyleOptions};
pub use tokens::{
    Alignment, BorderRadius, Breakpoint, Color, Density, IconPosition, Shadow, Size, Status,
    Variant,
};
