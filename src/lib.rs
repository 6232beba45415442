// ============================================================================
// Karatsuba Library
// Exact big-integer multiplication over decimal digit strings
// ============================================================================

//! # Karatsuba
//!
//! Exact multiplication of arbitrarily large non-negative integers given as
//! decimal digit strings, using Karatsuba's three-product recursion instead of
//! schoolbook multiplication.
//!
//! ## Features
//!
//! - **Exact digit-string primitives**: zero-padding, carry addition and
//!   ripple-borrow subtraction with a checked `a >= b` contract
//! - **O(n^1.585)** recursion with a native base case at three digits
//! - **Optional fork/join** of the three independent sub-products
//! - **Typed errors** instead of aborts, so batch callers can isolate failures
//!
//! ## Example
//!
//! ```rust
//! use karatsuba::prelude::*;
//! use std::sync::Arc;
//!
//! let multiplier = KaratsubaMultiplier::new(
//!     MultiplierConfig::default(),
//!     Arc::new(NoOpEventHandler),
//! );
//!
//! let a: DecimalString = "99999999".parse().unwrap();
//! let b: DecimalString = "99999999".parse().unwrap();
//! let product = multiplier.multiply(&a, &b).unwrap();
//! assert_eq!(product.to_string(), "9999999800000001");
//!
//! // Or in one call, with the default configuration
//! assert_eq!(karatsuba::multiply("123", "456").unwrap(), "56088");
//! ```

pub mod arithmetic;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

use numeric::ArithmeticResult;

/// Multiply two decimal strings with the default (sequential, canonical) configuration.
///
/// # Errors
/// `EmptyDigitString` or `InvalidDigitString` for malformed operands.
pub fn multiply(a: &str, b: &str) -> ArithmeticResult<String> {
    engine::KaratsubaMultiplier::default().multiply_str(a, b)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{JobId, JobOutcome, MultiplicationJob, MultiplierConfig};
    pub use crate::engine::{
        create_from_config, karatsuba, KaratsubaMultiplier, MultiplierBuilder, Product,
        StatsSnapshot,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, MultiplicationEvent, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, DecimalString};
}
