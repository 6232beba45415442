// ============================================================================
// Numeric Module
// Decimal digit strings and their error types
// ============================================================================
//
// This module provides:
// - DecimalString: validated, immutable digit sequence (MSD first)
// - ArithmeticError: error taxonomy for parsing and digit arithmetic
//
// Design principles:
// - Validation happens once, at construction
// - Leading zeros are data, not noise (the recursion depends on widths)
// - All fallible operations return Result (no panics)

mod decimal_string;
mod errors;

pub(crate) use decimal_string::DigitBuffer;
pub use decimal_string::DecimalString;
pub use errors::{ArithmeticError, ArithmeticResult};
