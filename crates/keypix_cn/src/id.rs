//! Element id generation
//!
//! Ids have the form `{prefix}-{suffix}` where the suffix is nine lowercase
//! base36 characters. Random suffixes make collisions unlikely, not
//! impossible; callers needing guaranteed uniqueness within a render tree
//! should use a [`SequentialIds`] source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use rand::Rng;

/// Prefix used by [`generate_default_id`] unless one was configured
pub const DEFAULT_ID_PREFIX: &str = "keypix";

/// Length of the generated suffix
pub const SUFFIX_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static ID_PREFIX: OnceLock<String> = OnceLock::new();

/// Produces id suffixes
pub trait IdSource: Send + Sync {
    /// Next nine-character suffix
    fn next_suffix(&self) -> String;

    fn generate(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_suffix())
    }
}

/// Random base36 suffixes from the thread-local generator
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Counter-backed suffixes, unique until the counter wraps at 36^9
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    const MODULUS: u64 = 36u64.pow(SUFFIX_LEN as u32);

    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `value`
    pub fn starting_at(value: u64) -> Self {
        Self {
            next: AtomicU64::new(value),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_suffix(&self) -> String {
        let mut n = self.next.fetch_add(1, Ordering::Relaxed) % Self::MODULUS;
        let mut digits = [b'0'; SUFFIX_LEN];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(n % 36) as usize];
            n /= 36;
        }
        digits.iter().map(|&b| char::from(b)).collect()
    }
}

/// Random id with the given prefix
pub fn generate_id(prefix: &str) -> String {
    RandomIds.generate(prefix)
}

/// Random id with the configured prefix, [`DEFAULT_ID_PREFIX`] if none
pub fn generate_default_id() -> String {
    generate_id(id_prefix())
}

/// The prefix used by [`generate_default_id`]
pub fn id_prefix() -> &'static str {
    ID_PREFIX.get().map_or(DEFAULT_ID_PREFIX, String::as_str)
}

/// Configure the default prefix once; returns `false` if one was already set
pub(crate) fn set_id_prefix(prefix: String) -> bool {
    let installed = ID_PREFIX.set(prefix).is_ok();
    if installed {
        tracing::debug!(prefix = id_prefix(), "id prefix configured");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rustc_hash::FxHashSet;

    fn is_suffix(s: &str) -> bool {
        s.len() == SUFFIX_LEN && s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }

    #[test]
    fn test_generated_shape() {
        let id = generate_id("modal");
        let suffix = id.strip_prefix("modal-").unwrap();
        assert!(is_suffix(suffix), "bad suffix in {id}");
    }

    #[test]
    fn test_default_prefix_shape() {
        let id = generate_default_id();
        let (prefix, suffix) = id.rsplit_once('-').unwrap();
        assert_eq!(prefix, id_prefix());
        assert!(is_suffix(suffix));
    }

    #[test]
    fn test_random_ids_rarely_collide() {
        let ids: FxHashSet<String> = (0..1000).map(|_| generate_id("x")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.generate("field"), "field-000000000");
        assert_eq!(ids.generate("field"), "field-000000001");

        let ids = SequentialIds::starting_at(35);
        assert_eq!(ids.next_suffix(), "00000000z");
        assert_eq!(ids.next_suffix(), "000000010");
    }

    #[test]
    fn test_sequential_ids_wrap() {
        let ids = SequentialIds::starting_at(36u64.pow(9) - 1);
        assert_eq!(ids.next_suffix(), "zzzzzzzzz");
        assert_eq!(ids.next_suffix(), "000000000");
    }
}
