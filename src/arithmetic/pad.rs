// ============================================================================
// Padder
// Width equalization and positional scaling
// ============================================================================

use crate::numeric::{DecimalString, DigitBuffer};

/// Prefix zeros to `short` until it is as wide as `long`.
///
/// Saturating: if `short` is already at least as wide, it is returned as is.
pub fn pad(short: &DecimalString, long: &DecimalString) -> DecimalString {
    pad_to_width(short, long.len())
}

/// Prefix zeros to `value` until it is `width` digits wide.
pub fn pad_to_width(value: &DecimalString, width: usize) -> DecimalString {
    let missing = width.saturating_sub(value.len());
    if missing == 0 {
        return value.clone();
    }

    let mut digits = DigitBuffer::with_capacity(width);
    digits.resize(missing, 0);
    digits.extend_from_slice(value.digits());
    DecimalString::from_buffer(digits)
}

/// Pad whichever operand is shorter so both share the longer width.
pub fn equalize(a: &DecimalString, b: &DecimalString) -> (DecimalString, DecimalString) {
    let width = a.len().max(b.len());
    (pad_to_width(a, width), pad_to_width(b, width))
}

/// Multiply by `10^places` by appending zero digits.
pub fn shift_left(value: &DecimalString, places: usize) -> DecimalString {
    if places == 0 {
        return value.clone();
    }

    let mut digits = DigitBuffer::with_capacity(value.len() + places);
    digits.extend_from_slice(value.digits());
    digits.resize(value.len() + places, 0);
    DecimalString::from_buffer(digits)
}
