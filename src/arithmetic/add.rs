// ============================================================================
// Adder
// Digit-wise addition with carry propagation
// ============================================================================

use super::pad::equalize;
use crate::numeric::{DecimalString, DigitBuffer};

/// Sum of two decimal strings of possibly unequal width.
///
/// The result is `max(len(a), len(b))` digits wide, or one wider when a
/// carry leaves the most-significant position. Leading zeros of the inputs
/// are kept.
pub fn add(a: &DecimalString, b: &DecimalString) -> DecimalString {
    let (a, b) = equalize(a, b);
    let width = a.len();

    // Written least-significant first, reversed once at the end
    let mut out = DigitBuffer::with_capacity(width + 1);
    let mut carry = 0u8;
    for (&x, &y) in a.digits().iter().rev().zip(b.digits().iter().rev()) {
        let sum = x + y + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry != 0 {
        out.push(1);
    }
    out.reverse();

    DecimalString::from_buffer(out)
}
