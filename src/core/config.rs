//! Generation run configuration.
//!
//! A `GeneratorConfig` bundles the two inputs a reproducible run needs:
//! the grid dimension and the RNG seed. Validation enforces the classic
//! interactive bounds (7..=50); the core algorithm itself accepts any
//! dimension, so callers that want other policies can skip the config
//! layer and drive `Generator` directly.

use serde::{Deserialize, Serialize};

/// Smallest dimension accepted by `GeneratorConfig::validate`.
pub const MIN_DIMENSION: u32 = 7;

/// Largest dimension accepted by `GeneratorConfig::validate`.
pub const MAX_DIMENSION: u32 = 50;

/// Configuration for one maze generation run.
///
/// ```
/// use kruskal_maze::core::GeneratorConfig;
///
/// let config = GeneratorConfig::new(10).with_seed(42);
/// assert!(config.validate().is_ok());
///
/// assert!(GeneratorConfig::new(6).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Side length of the maze grid.
    pub dimension: u32,

    /// Seed for the wall shuffle. Two runs with the same config produce
    /// the same maze.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Create a configuration with the given dimension and seed 0.
    #[must_use]
    pub const fn new(dimension: u32) -> Self {
        Self { dimension, seed: 0 }
    }

    /// Set the shuffle seed (builder pattern).
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the dimension against the supported range.
    ///
    /// Interactive frontends treat 0 as a quit sentinel before ever
    /// building a config, so 0 is rejected here like any other
    /// out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_DIMENSION || self.dimension > MAX_DIMENSION {
            return Err(ConfigError::DimensionOutOfRange {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}

/// Rejection reasons for a generation config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    /// Dimension outside `MIN_DIMENSION..=MAX_DIMENSION`.
    DimensionOutOfRange {
        /// The rejected dimension.
        dimension: u32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionOutOfRange { dimension } => write!(
                f,
                "dimension {dimension} outside supported range {MIN_DIMENSION}..={MAX_DIMENSION}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds_inclusive() {
        assert!(GeneratorConfig::new(MIN_DIMENSION).validate().is_ok());
        assert!(GeneratorConfig::new(MAX_DIMENSION).validate().is_ok());
        assert!(GeneratorConfig::new(25).validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(GeneratorConfig::new(0).validate().is_err());
        assert!(GeneratorConfig::new(MIN_DIMENSION - 1).validate().is_err());
        assert!(GeneratorConfig::new(MAX_DIMENSION + 1).validate().is_err());
    }

    #[test]
    fn test_with_seed() {
        let config = GeneratorConfig::new(10).with_seed(99);

        assert_eq!(config.dimension, 10);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_error_display() {
        let err = GeneratorConfig::new(51).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "dimension 51 outside supported range 7..=50"
        );
    }

    #[test]
    fn test_serialization() {
        let config = GeneratorConfig::new(12).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
