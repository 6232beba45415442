// ============================================================================
// Multiplier Configuration
// Execution strategy and output form for the Karatsuba multiplier
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest operand width for which forking is allowed.
///
/// Below four digits the recursion bottoms out almost immediately.
pub const MIN_PARALLEL_THRESHOLD: usize = 4;

/// Upper bound on nested fork levels (3^16 concurrent branches is already absurd).
pub const MAX_PARALLEL_DEPTH: usize = 16;

/// Configuration for a Karatsuba multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiplierConfig {
    /// Run the independent sub-products `k1`, `k2` on scoped worker threads
    pub parallel: bool,

    /// Minimum operand width `n` at which a recursion level forks
    pub parallel_threshold: usize,

    /// Number of recursion levels (from the top) allowed to fork
    pub max_parallel_depth: usize,

    /// Strip leading zeros from the final product.
    /// Intermediate results are never canonicalized.
    pub canonicalize_output: bool,
}

impl MultiplierConfig {
    /// Create a sequential configuration with canonical output
    pub fn new() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 512,
            max_parallel_depth: 3,
            canonicalize_output: true,
        }
    }

    /// Builder method: Enable or disable fork/join execution
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method: Set the fork threshold (in digits)
    pub fn with_parallel_threshold(mut self, digits: usize) -> Self {
        self.parallel_threshold = digits;
        self
    }

    /// Builder method: Set how many recursion levels may fork
    pub fn with_max_parallel_depth(mut self, depth: usize) -> Self {
        self.max_parallel_depth = depth;
        self
    }

    /// Builder method: Choose canonical or reference (zero-padded) output
    pub fn with_canonical_output(mut self, canonicalize: bool) -> Self {
        self.canonicalize_output = canonicalize;
        self
    }

    /// Whether a recursion level at `depth` with operand width `n` should fork
    #[inline]
    pub fn should_fork(&self, n: usize, depth: usize) -> bool {
        self.parallel && n >= self.parallel_threshold && depth < self.max_parallel_depth
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_threshold < MIN_PARALLEL_THRESHOLD {
            return Err(format!(
                "Parallel threshold must be at least {} digits",
                MIN_PARALLEL_THRESHOLD
            ));
        }

        if self.max_parallel_depth > MAX_PARALLEL_DEPTH {
            return Err(format!(
                "Parallel depth cannot exceed {}",
                MAX_PARALLEL_DEPTH
            ));
        }

        Ok(())
    }
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MultiplierConfig {
    /// Single-threaded, canonical output
    pub fn sequential() -> Self {
        Self::new()
    }

    /// Fork/join on the top recursion levels for large operands
    /// - Forks at 512 digits and above
    /// - At most 3 nested fork levels
    pub fn parallel() -> Self {
        Self::new().with_parallel(true)
    }

    /// Reproduces the unmodified algorithm's output exactly,
    /// zero-padded product included
    pub fn reference() -> Self {
        Self::new().with_canonical_output(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = MultiplierConfig::new();

        assert!(!config.parallel);
        assert!(config.canonicalize_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MultiplierConfig::new()
            .with_parallel(true)
            .with_parallel_threshold(64)
            .with_max_parallel_depth(2)
            .with_canonical_output(false);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 64);
        assert_eq!(config.max_parallel_depth, 2);
        assert!(!config.canonicalize_output);
    }

    #[test]
    fn test_validation() {
        let config = MultiplierConfig::new().with_parallel_threshold(3);
        assert!(config.validate().is_err());

        let config = MultiplierConfig::new().with_max_parallel_depth(MAX_PARALLEL_DEPTH + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_should_fork() {
        let config = MultiplierConfig::parallel()
            .with_parallel_threshold(100)
            .with_max_parallel_depth(2);

        assert!(config.should_fork(100, 0));
        assert!(config.should_fork(1000, 1));
        assert!(!config.should_fork(99, 0));
        assert!(!config.should_fork(1000, 2));
        assert!(!MultiplierConfig::sequential().should_fork(10_000, 0));
    }

    #[test]
    fn test_preset_configs() {
        assert!(MultiplierConfig::parallel().parallel);
        assert!(!MultiplierConfig::reference().canonicalize_output);
        assert_eq!(MultiplierConfig::sequential(), MultiplierConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = MultiplierConfig::parallel().with_parallel_threshold(256);
        let json = serde_json::to_string(&config).unwrap();
        let back: MultiplierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
