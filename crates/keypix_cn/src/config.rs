//! Runtime configuration
//!
//! Loaded from `keypix.toml` or any TOML string:
//!
//! ```toml
//! id_prefix = "app"
//!
//! [class_cache]
//! kind = "lru"      # memory | lru | none
//! capacity = 256    # lru only
//! ```
//!
//! Every field is optional. [`KeypixConfig::apply`] pushes the settings into
//! the process-wide state and should run once, early, before any component
//! builds class names or default ids.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::{
    install_class_cache, ClassNameCache, LruClassCache, MemoryClassCache, NoopClassCache,
};
use crate::error::ConfigError;
use crate::id::{self, DEFAULT_ID_PREFIX};

/// Library-wide settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeypixConfig {
    /// Prefix for [`generate_default_id`](crate::id::generate_default_id)
    pub id_prefix: String,
    pub class_cache: ClassCacheConfig,
}

impl Default for KeypixConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            class_cache: ClassCacheConfig::default(),
        }
    }
}

/// Which class name cache to install
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassCacheConfig {
    pub kind: CacheKind,
    /// Entry limit for [`CacheKind::Lru`]
    pub capacity: usize,
}

impl Default for ClassCacheConfig {
    fn default() -> Self {
        Self {
            kind: CacheKind::Memory,
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    1024
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    /// Unbounded
    #[default]
    Memory,
    /// Bounded, least recently used evicted first
    Lru,
    /// Compose on every call
    None,
}

impl KeypixConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded keypix config");
        Ok(config)
    }

    /// The configured prefix, or the default when it is blank
    pub fn effective_id_prefix(&self) -> &str {
        let prefix = self.id_prefix.trim();
        if prefix.is_empty() {
            DEFAULT_ID_PREFIX
        } else {
            prefix
        }
    }

    /// Build the configured cache without installing it
    pub fn build_cache(&self) -> Result<Box<dyn ClassNameCache>, ConfigError> {
        Ok(match self.class_cache.kind {
            CacheKind::Memory => Box::new(MemoryClassCache::new()),
            CacheKind::Lru => Box::new(LruClassCache::with_capacity(self.class_cache.capacity)?),
            CacheKind::None => Box::new(NoopClassCache),
        })
    }

    /// Install the id prefix and class cache process-wide
    ///
    /// The id prefix can only be set once; later calls keep the first one.
    /// The cache fails with [`ConfigError::CacheAlreadyInstalled`] once a
    /// cache is in place, including the default one created by the first
    /// cached class name build.
    pub fn apply(&self) -> Result<(), ConfigError> {
        if self.id_prefix.trim().is_empty() {
            tracing::warn!(
                default = DEFAULT_ID_PREFIX,
                "empty id prefix configured, using default"
            );
        }
        let prefix = self.effective_id_prefix();
        if !id::set_id_prefix(prefix.to_string()) {
            tracing::debug!(
                requested = prefix,
                current = id::id_prefix(),
                "id prefix already configured"
            );
        }

        install_class_cache(self.build_cache()?)?;
        tracing::debug!(
            kind = ?self.class_cache.kind,
            capacity = self.class_cache.capacity,
            "keypix config applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_names::ClassNames;
    use keypix_theme::Size;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = KeypixConfig::from_toml_str("").unwrap();
        assert_eq!(config, KeypixConfig::default());
        assert_eq!(config.id_prefix, "keypix");
        assert_eq!(config.class_cache.kind, CacheKind::Memory);
        assert_eq!(config.class_cache.capacity, 1024);
    }

    #[test]
    fn test_parse_full() {
        let config = KeypixConfig::from_toml_str(
            r#"
            id_prefix = "app"

            [class_cache]
            kind = "lru"
            capacity = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.id_prefix, "app");
        assert_eq!(config.class_cache.kind, CacheKind::Lru);
        assert_eq!(config.class_cache.capacity, 8);
    }

    #[test]
    fn test_partial_cache_section() {
        let config = KeypixConfig::from_toml_str("[class_cache]\nkind = \"none\"").unwrap();
        assert_eq!(config.class_cache.kind, CacheKind::None);
        assert_eq!(config.class_cache.capacity, 1024);
        assert_eq!(config.id_prefix, "keypix");
    }

    #[test]
    fn test_parse_errors() {
        let err = KeypixConfig::from_toml_str("[class_cache]\nkind = \"disk\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_blank_prefix_falls_back() {
        let config = KeypixConfig {
            id_prefix: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.effective_id_prefix(), "keypix");
    }

    #[test]
    fn test_build_cache() {
        let mut config = KeypixConfig::default();
        config.class_cache.kind = CacheKind::Lru;
        config.class_cache.capacity = 1;

        let cache = config.build_cache().unwrap();
        let small = ClassNames::new("button").size(Size::Sm);
        let large = ClassNames::new("button").size(Size::Lg);
        small.build_with(cache.as_ref());
        large.build_with(cache.as_ref());
        assert_eq!(cache.len(), 1);

        config.class_cache.kind = CacheKind::None;
        let cache = config.build_cache().unwrap();
        small.build_with(cache.as_ref());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut config = KeypixConfig::default();
        config.class_cache.kind = CacheKind::Lru;
        config.class_cache.capacity = 0;
        assert!(matches!(config.build_cache(), Err(ConfigError::InvalidCapacity)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("keypix-config-{}.toml", std::process::id()));
        std::fs::write(&path, "id_prefix = \"docs\"\n").unwrap();

        let config = KeypixConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.id_prefix, "docs");

        assert!(matches!(
            KeypixConfig::load(&path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_apply_installs_once() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("keypix_cn=debug"))
            .with_test_writer()
            .try_init();

        // Another test may already have created the default memory cache.
        let config = KeypixConfig::default();
        match config.apply() {
            Ok(()) | Err(ConfigError::CacheAlreadyInstalled) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            config.apply(),
            Err(ConfigError::CacheAlreadyInstalled)
        ));
        assert_eq!(id::id_prefix(), "keypix");
    }
}
