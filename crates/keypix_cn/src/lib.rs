//! # Keypix Component Utilities (keypix_cn)
//!
//! The framework-independent layer every Keypix component is built from.
//! Components hand it plain data and get plain data back: class strings,
//! style maps, attribute maps, error maps. Nothing here renders.
//!
//! ## Modules
//!
//! - [`class_names`]: base/modifier class composition with memoization, and
//!   the `cn` merge helper
//! - [`validation`]: schema-driven prop validation and the rule library
//! - [`aria`]: accessibility attribute builders
//! - [`icon`]: left/right icon resolution
//! - [`id`]: element id generation
//! - [`responsive`]: breakpoint-dependent values and classes
//! - [`keyboard`]: list and modal key mapping
//! - [`config`]: process-wide settings loaded from TOML
//!
//! Style composition and the color palette live in `keypix_theme` and are
//! re-exported through the [`prelude`].
//!
//! ## Example
//!
//! ```rust
//! use keypix_cn::prelude::*;
//!
//! let classes = ClassNames::new("badge").size(Size::Sm).color(Color::Success).build();
//! assert_eq!(classes, "badge badge-sm badge-success");
//!
//! let styles = StyleOptions::new().size(Size::Sm).compose();
//! assert_eq!(styles.get("padding"), Some("0.375rem 0.75rem"));
//! ```

pub mod aria;
pub mod cache;
pub mod class_names;
pub mod config;
pub mod error;
pub mod icon;
pub mod id;
pub mod keyboard;
pub mod responsive;
pub mod validation;

pub use cache::{
    class_cache, install_class_cache, ClassNameCache, LruClassCache, MemoryClassCache,
    NoopClassCache,
};
pub use class_names::{
    cn, color_class, compose_classes, create_component_classes, size_class, state_classes,
    variant_class, ClassNameOptions, ClassNames, ClassPart, ClassToken, StateFlags,
};
pub use config::{CacheKind, ClassCacheConfig, KeypixConfig};
pub use error::ConfigError;
pub use icon::{icon_class_name, process_icon_props, IconProps, ResolvedIcons};
pub use id::{generate_default_id, generate_id, IdSource, RandomIds, SequentialIds};
pub use responsive::{
    create_responsive_classes, get_responsive_value, Responsive, ResponsiveKey,
};
pub use validation::{
    validate_component_props, validate_serialized, FieldErrors, FieldSchema, PropType, Schema,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aria::{build_accessibility_props, create_aria_attributes, AriaAttributes};
    pub use crate::class_names::{cn, ClassNames};
    pub use crate::icon::{process_icon_props, IconProps};
    pub use crate::id::generate_id;
    pub use crate::responsive::Responsive;
    pub use crate::validation::{rules, validate_component_props, FieldSchema, PropType, Schema};

    // Shared vocabulary
    pub use keypix_theme::{
        color_values, compose_styles, Alignment, BorderRadius, Breakpoint, Color, ColorValues,
        Density, IconPosition, Shadow, Size, StyleMap, StyleOptions, Status, Variant,
    };
}
