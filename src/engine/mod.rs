// ============================================================================
// Engine Module
// Contains the Karatsuba recursion and its public entry points
// ============================================================================

mod karatsuba;
mod multiplier;
mod stats;

pub mod factory;

pub use factory::{create_from_config, MultiplierBuilder};
pub use karatsuba::karatsuba;
pub use multiplier::{KaratsubaMultiplier, Product};
pub use stats::{RecursionStats, StatsSnapshot};
