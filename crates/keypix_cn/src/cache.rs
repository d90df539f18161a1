//! Class name memoization
//!
//! Composing a class string is cheap, but components recompose on every
//! render with mostly identical inputs. Results are memoized behind the
//! [`ClassNameCache`] trait so a host can pick the policy:
//!
//! - [`MemoryClassCache`]: unbounded map, the default
//! - [`LruClassCache`]: bounded, evicts least recently used entries
//! - [`NoopClassCache`]: never stores anything, for tests and benchmarks
//!
//! A single process-wide cache is installed once with
//! [`install_class_cache`]. If nothing is installed before the first lookup,
//! a [`MemoryClassCache`] is created lazily.
//!
//! # Example
//!
//! ```rust
//! use keypix_cn::cache::{ClassNameCache, MemoryClassCache};
//! use keypix_cn::ClassNames;
//!
//! let cache = MemoryClassCache::new();
//! let classes = ClassNames::new("badge").rounded(true);
//!
//! assert_eq!(classes.build_with(&cache), "badge badge-rounded");
//! assert_eq!(cache.len(), 1);
//! ```

use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use lru::LruCache;
use rustc_hash::FxHashMap;

use crate::class_names::ClassNames;
use crate::error::ConfigError;

/// Storage for composed class strings, keyed by the full composer input
pub trait ClassNameCache: Send + Sync {
    /// Look up a previously composed string
    fn get(&self, key: &ClassNames) -> Option<String>;

    /// Store a composed string
    fn insert(&self, key: ClassNames, value: String);

    /// Drop every entry
    fn clear(&self);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded cache backed by a read-write locked hash map
#[derive(Default)]
pub struct MemoryClassCache {
    entries: RwLock<FxHashMap<ClassNames, String>>,
}

impl MemoryClassCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassNameCache for MemoryClassCache {
    fn get(&self, key: &ClassNames) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: ClassNames, value: String) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Bounded cache that evicts the least recently used entry
pub struct LruClassCache {
    entries: Mutex<LruCache<ClassNames, String>>,
}

impl LruClassCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Create a cache from a plain capacity, rejecting zero
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(ConfigError::InvalidCapacity)
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cap()
            .get()
    }
}

impl ClassNameCache for LruClassCache {
    fn get(&self, key: &ClassNames) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: ClassNames, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, value);
    }

    fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Cache that stores nothing; every lookup recomposes
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopClassCache;

impl ClassNameCache for NoopClassCache {
    fn get(&self, _key: &ClassNames) -> Option<String> {
        None
    }

    fn insert(&self, _key: ClassNames, _value: String) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}

/// Process-wide cache used by [`ClassNames::build`]
static CLASS_CACHE: OnceLock<Box<dyn ClassNameCache>> = OnceLock::new();

/// Install the process-wide class cache
///
/// Must happen before the first [`ClassNames::build`] call; afterwards the
/// lazily created default is already in place and this returns
/// [`ConfigError::CacheAlreadyInstalled`].
pub fn install_class_cache(cache: Box<dyn ClassNameCache>) -> Result<(), ConfigError> {
    CLASS_CACHE
        .set(cache)
        .map_err(|_| ConfigError::CacheAlreadyInstalled)?;
    tracing::debug!("class name cache installed");
    Ok(())
}

/// The process-wide class cache, creating the default if none was installed
pub fn class_cache() -> &'static dyn ClassNameCache {
    CLASS_CACHE
        .get_or_init(|| Box::new(MemoryClassCache::new()))
        .as_ref()
}

/// Look up `key` in `cache`, composing and storing it on a miss
pub(crate) fn memoize(cache: &dyn ClassNameCache, key: &ClassNames) -> String {
    if let Some(hit) = cache.get(key) {
        tracing::trace!(base = key.base(), "class cache hit");
        return hit;
    }

    tracing::trace!(base = key.base(), "class cache miss");
    let composed = key.compose();
    cache.insert(key.clone(), composed.clone());
    composed
}
