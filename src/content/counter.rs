// Per-session view counter
//
// Purely decorative: the count lives in session storage so it stays stable
// for the lifetime of one session and is regenerated for the next.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};
use std::time::Duration;

/// Session storage key holding the count as decimal text
pub const COUNTER_KEY: &str = "portfolio_count";

/// The counter shows a loading placeholder this long before resolving
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// String key/value store scoped to one session
#[derive(Debug, Default, Clone)]
pub struct SessionStorage {
    items: HashMap<String, String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.items.insert(key.to_string(), value.into());
    }
}

/// Uniform-ish value in `0..bound` without pulling in an RNG crate
pub fn random_below(bound: u64) -> u64 {
    if bound == 0 {
        return 0;
    }
    RandomState::new().build_hasher().finish() % bound
}

#[derive(Debug, Default)]
pub struct ViewCounter {
    count: Option<u64>,
}

impl ViewCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count, or None while still loading
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// Resolve once the reveal delay has passed; returns true on the
    /// transition from loading to resolved
    pub fn poll(
        &mut self,
        elapsed: Duration,
        storage: &mut SessionStorage,
        random: impl FnMut(u64) -> u64,
    ) -> bool {
        if self.count.is_some() || elapsed < REVEAL_DELAY {
            return false;
        }
        let count = resolve(storage, random);
        tracing::debug!(count, "view counter resolved");
        self.count = Some(count);
        true
    }
}

/// Reuse the stored count, or generate and store a new one
///
/// A stored value that is not a decimal number is replaced.
pub fn resolve(storage: &mut SessionStorage, mut random: impl FnMut(u64) -> u64) -> u64 {
    if let Some(count) = storage.get(COUNTER_KEY).and_then(|v| v.trim().parse().ok()) {
        return count;
    }
    let base = 3000 + random(600);
    let variation = random(50);
    let count = base + variation;
    storage.set(COUNTER_KEY, count.to_string());
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_within_range_and_stores_text() {
        let mut storage = SessionStorage::new();
        let count = resolve(&mut storage, random_below);
        assert!((3000..3649).contains(&count), "{}", count);
        assert_eq!(storage.get(COUNTER_KEY), Some(count.to_string().as_str()));
    }

    #[test]
    fn reuses_stored_value() {
        let mut storage = SessionStorage::new();
        storage.set(COUNTER_KEY, "3210");
        let count = resolve(&mut storage, |_| panic!("must not draw"));
        assert_eq!(count, 3210);
    }

    #[test]
    fn extremes_of_the_generator() {
        let mut storage = SessionStorage::new();
        assert_eq!(resolve(&mut storage, |_| 0), 3000);

        let mut storage = SessionStorage::new();
        assert_eq!(resolve(&mut storage, |bound| bound - 1), 3000 + 599 + 49);
    }

    #[test]
    fn garbage_is_regenerated() {
        let mut storage = SessionStorage::new();
        storage.set(COUNTER_KEY, "lots");
        assert_eq!(resolve(&mut storage, |_| 1), 3002);
        assert_eq!(storage.get(COUNTER_KEY), Some("3002"));
    }

    #[test]
    fn counter_waits_for_reveal_delay() {
        let mut storage = SessionStorage::new();
        let mut counter = ViewCounter::new();
        assert!(!counter.poll(Duration::from_millis(50), &mut storage, |_| 0));
        assert_eq!(counter.count(), None);
        assert!(counter.poll(Duration::from_millis(100), &mut storage, |_| 0));
        assert_eq!(counter.count(), Some(3000));
        assert!(!counter.poll(Duration::from_millis(200), &mut storage, |_| 5));
        assert_eq!(counter.count(), Some(3000));
    }
}
