// ============================================================================
// Multiplier Factory
// Creates multipliers from validated configuration
// ============================================================================

use crate::domain::MultiplierConfig;
use crate::engine::KaratsubaMultiplier;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a multiplier from configuration
///
/// # Arguments
/// * `config` - Multiplier configuration
/// * `event_handler` - Event handler for multiplication events
///
/// # Returns
/// * `Result<KaratsubaMultiplier, String>` - Configured multiplier or error
///
/// # Example
/// ```
/// use karatsuba::prelude::*;
/// use std::sync::Arc;
///
/// let config = MultiplierConfig::parallel();
/// let multiplier = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(multiplier.multiply_str("12", "34").unwrap(), "408");
/// ```
pub fn create_from_config(
    config: MultiplierConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<KaratsubaMultiplier, String> {
    config.validate()?;

    Ok(KaratsubaMultiplier::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating multipliers with fluent API
///
/// # Example
/// ```
/// use karatsuba::prelude::*;
/// use std::sync::Arc;
///
/// let multiplier = MultiplierBuilder::new()
///     .parallel(1024)
///     .max_parallel_depth(2)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(multiplier.multiply_str("123", "456").unwrap(), "56088");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiplierBuilder {
    config: MultiplierConfig,
}

impl MultiplierBuilder {
    /// Create a new builder with the sequential, canonical defaults
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Execution Configuration
    // ========================================================================

    /// Run sub-products on a single thread (default)
    pub fn sequential(mut self) -> Self {
        self.config.parallel = false;
        self
    }

    /// Fork sub-products for operands of at least `threshold` digits
    pub fn parallel(mut self, threshold: usize) -> Self {
        self.config.parallel = true;
        self.config.parallel_threshold = threshold;
        self
    }

    /// Limit how many recursion levels may fork
    pub fn max_parallel_depth(mut self, depth: usize) -> Self {
        self.config.max_parallel_depth = depth;
        self
    }

    // ========================================================================
    // Output Configuration
    // ========================================================================

    /// Strip leading zeros from the product (default)
    pub fn canonical_output(mut self) -> Self {
        self.config.canonicalize_output = true;
        self
    }

    /// Return the product exactly as the recursion builds it
    pub fn reference_output(mut self) -> Self {
        self.config.canonicalize_output = false;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the multiplier
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<KaratsubaMultiplier, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &MultiplierConfig {
        &self.config
    }
}
