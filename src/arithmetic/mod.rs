// ============================================================================
// Arithmetic Module
// Digit-string primitives used by the Karatsuba recursion
// ============================================================================
//
// Every primitive is a pure function: inputs are borrowed, a fresh
// DecimalString is returned. Internally each call owns one digit buffer that
// it scans and rewrites in place before handing it back.

mod add;
mod base;
mod pad;
mod subtract;

pub use add::add;
pub use base::{small_multiply, BASE_CASE_DIGITS};
pub use pad::{equalize, pad, pad_to_width, shift_left};
pub use subtract::subtract;
