// ============================================================================
// Cache Configuration
// Settings for the shared fixed-point value cache
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of distinct values the cache holds before it is cleared.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Configuration for a [`ValueCache`](crate::numeric::ValueCache).
///
/// The cache is a pure optimization: it deduplicates frequently built values
/// into shared instances and never affects numeric results.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheConfig {
    /// Maximum number of entries. Inserting past this clears the whole cache.
    pub capacity: usize,

    /// Seed the cache with the named constants (ZERO, ONE, PI, ...) on creation
    pub prewarm_constants: bool,
}

impl CacheConfig {
    /// Create a configuration with default capacity and no prewarming
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            prewarm_constants: false,
        }
    }

    /// Builder method: Set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method: Seed the named constants on creation
    pub fn with_prewarmed_constants(mut self) -> Self {
        self.prewarm_constants = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Cache capacity must be positive".to_string());
        }

        if self.prewarm_constants && self.capacity < crate::numeric::NAMED_CONSTANTS.len() {
            return Err(format!(
                "Cache capacity {} cannot hold the {} named constants",
                self.capacity,
                crate::numeric::NAMED_CONSTANTS.len()
            ));
        }

        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CACHE_CAPACITY);
        assert!(!config.prewarm_constants);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = CacheConfig::new()
            .with_capacity(64)
            .with_prewarmed_constants();
        assert_eq!(config.capacity, 64);
        assert!(config.prewarm_constants);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let zero = CacheConfig::new().with_capacity(0);
        assert!(zero.validate().is_err());

        let too_small = CacheConfig::new()
            .with_capacity(2)
            .with_prewarmed_constants();
        assert!(too_small.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = CacheConfig::new().with_capacity(16);
        let json = serde_json::to_string(&config).unwrap();
        let back: CacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
