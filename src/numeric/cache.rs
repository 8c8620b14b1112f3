// ============================================================================
// Value Cache
// Bounded deduplication of frequently constructed fixed-point values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::FixedPoint;
use crate::config::CacheConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Every named constant, in the order they are seeded into a prewarmed cache.
pub const NAMED_CONSTANTS: [FixedPoint; 11] = [
    FixedPoint::ZERO,
    FixedPoint::ONE,
    FixedPoint::TWO,
    FixedPoint::HALF,
    FixedPoint::PI,
    FixedPoint::E,
    FixedPoint::HALF_PI,
    FixedPoint::QUARTER_PI,
    FixedPoint::TWO_PI,
    FixedPoint::DEG_TO_RAD,
    FixedPoint::RAD_TO_DEG,
];

/// Shared, bounded map from raw value to a shared `FixedPoint` instance.
///
/// When an insertion would exceed the capacity the whole map is cleared
/// first; there is no per-entry eviction. Instances handed out stay valid
/// after a clear because ownership is shared.
pub struct ValueCache {
    entries: Mutex<HashMap<i64, Arc<FixedPoint>>>,
    capacity: usize,
    clear_count: AtomicU64,
}

impl ValueCache {
    /// Create a cache holding at most `capacity` values.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when `capacity` is zero.
    pub fn new(capacity: usize) -> NumericResult<Self> {
        Self::with_config(&CacheConfig::new().with_capacity(capacity))
    }

    /// Create a cache from a validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when the configuration fails validation.
    pub fn with_config(config: &CacheConfig) -> NumericResult<Self> {
        if let Err(reason) = config.validate() {
            tracing::warn!("Rejected value cache configuration: {}", reason);
            return Err(NumericError::InvalidConfig);
        }
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &CacheConfig) -> Self {
        let cache = Self {
            entries: Mutex::new(HashMap::with_capacity(config.capacity.min(4096))),
            capacity: config.capacity,
            clear_count: AtomicU64::new(0),
        };
        if config.prewarm_constants {
            for constant in NAMED_CONSTANTS {
                cache.get(constant);
            }
        }
        cache
    }

    /// Shared instance equal to `value`, inserting it if absent.
    pub fn get(&self, value: FixedPoint) -> Arc<FixedPoint> {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(&value.raw()) {
            return Arc::clone(existing);
        }

        if entries.len() >= self.capacity {
            let dropped = entries.len();
            entries.clear();
            self.clear_count.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(dropped, capacity = self.capacity, "Value cache cleared");
        }

        let shared = Arc::new(value);
        entries.insert(value.raw(), Arc::clone(&shared));
        shared
    }

    /// Shared instance for a raw value, inserting it if absent.
    pub fn get_raw(&self, raw: i64) -> Arc<FixedPoint> {
        self.get(FixedPoint::from_raw(raw))
    }

    /// Whether `value` currently has a shared instance.
    pub fn contains(&self, value: FixedPoint) -> bool {
        self.entries.lock().contains_key(&value.raw())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of times the cache was cleared because it was full.
    pub fn clear_count(&self) -> u64 {
        self.clear_count.load(Ordering::Relaxed)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl std::fmt::Debug for ValueCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("clear_count", &self.clear_count())
            .finish()
    }
}

static GLOBAL_CACHE: OnceLock<ValueCache> = OnceLock::new();

/// Process-wide cache with the default configuration.
pub fn global_cache() -> &'static ValueCache {
    GLOBAL_CACHE.get_or_init(|| ValueCache::from_valid_config(&CacheConfig::default()))
}

/// Shared instance of `value` from the process-wide cache.
pub fn cached(value: FixedPoint) -> Arc<FixedPoint> {
    global_cache().get(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use std::thread;

    #[test]
    fn test_same_value_returns_same_instance() {
        let cache = ValueCache::new(16).unwrap();
        let a = cache.get(FixedPoint::from_i32(3));
        let b = cache.get_raw(3_000_000);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, FixedPoint::from_i32(3));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clears_wholesale_when_full() {
        let cache = ValueCache::new(3).unwrap();
        let first = cache.get_raw(1);
        cache.get_raw(2);
        cache.get_raw(3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.clear_count(), 0);

        cache.get_raw(4);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.clear_count(), 1);
        assert!(!cache.contains(FixedPoint::from_raw(1)));

        // Handed-out instances survive the clear
        assert_eq!(first.raw(), 1);
        let again = cache.get_raw(1);
        assert!(!Arc::ptr_eq(&first, &again));
    }

    #[test]
    fn test_invalid_capacity() {
        assert_eq!(ValueCache::new(0).unwrap_err(), NumericError::InvalidConfig);
    }

    #[test]
    fn test_prewarmed_constants() {
        let config = CacheConfig::new().with_capacity(32).with_prewarmed_constants();
        let cache = ValueCache::with_config(&config).unwrap();
        assert_eq!(cache.len(), NAMED_CONSTANTS.len());
        assert!(cache.contains(FixedPoint::PI));
        assert!(cache.contains(FixedPoint::RAD_TO_DEG));
    }

    #[test]
    fn test_manual_clear() {
        let cache = ValueCache::new(4).unwrap();
        cache.get_raw(10);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.clear_count(), 0);
    }

    #[test]
    fn test_global_cache_shares_instances() {
        let a = cached(FixedPoint::from_raw(123_456_789));
        let b = cached(FixedPoint::from_raw(123_456_789));
        assert!(Arc::ptr_eq(&a, &b) || global_cache().clear_count() > 0);
        assert_eq!(global_cache().capacity(), crate::config::DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_concurrent_access_stays_bounded() {
        let cache = Arc::new(ValueCache::new(50).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..500 {
                        let value = cache.get_raw(t * 1_000 + i);
                        assert_eq!(value.raw(), t * 1_000 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= 50);
        assert!(cache.clear_count() > 0);
    }

    quickcheck! {
        fn prop_cache_never_exceeds_capacity(raws: Vec<i64>) -> bool {
            let cache = ValueCache::new(8).unwrap();
            for raw in raws {
                cache.get_raw(raw);
            }
            cache.len() <= 8
        }

        fn prop_cached_value_equals_input(raw: i64) -> bool {
            let cache = ValueCache::new(8).unwrap();
            *cache.get_raw(raw) == FixedPoint::from_raw(raw)
        }
    }
}
