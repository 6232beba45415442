// ============================================================================
// Base Multiplier
// Native multiplication for the recursion floor
// ============================================================================

use crate::numeric::{ArithmeticError, ArithmeticResult, DecimalString, DigitBuffer};
use arrayvec::ArrayVec;

/// Largest `len(a) + len(b)` handled without recursing.
pub const BASE_CASE_DIGITS: usize = 3;

/// Product of two operands whose combined width is at most three digits.
///
/// The result is canonical (no leading zeros), e.g. `"00" * "5"` is `"0"`.
///
/// # Errors
/// Returns `BaseCaseTooWide` if `len(a) + len(b) > 3`.
pub fn small_multiply(a: &DecimalString, b: &DecimalString) -> ArithmeticResult<DecimalString> {
    let combined_digits = a.len() + b.len();
    if combined_digits > BASE_CASE_DIGITS {
        return Err(ArithmeticError::BaseCaseTooWide { combined_digits });
    }

    let mut product = to_native(a) * to_native(b);

    // At most 99 * 9 = 891
    let mut reversed: ArrayVec<u8, BASE_CASE_DIGITS> = ArrayVec::new();
    loop {
        reversed.push((product % 10) as u8);
        product /= 10;
        if product == 0 {
            break;
        }
    }

    Ok(DecimalString::from_buffer(
        reversed.into_iter().rev().collect::<DigitBuffer>(),
    ))
}

#[inline]
fn to_native(value: &DecimalString) -> u32 {
    value
        .digits()
        .iter()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(s: &str) -> DecimalString {
        s.parse().unwrap()
    }

    #[test]
    fn test_small_multiply() {
        assert_eq!(small_multiply(&ds("7"), &ds("8")).unwrap(), ds("56"));
        assert_eq!(small_multiply(&ds("99"), &ds("9")).unwrap(), ds("891"));
        assert_eq!(small_multiply(&ds("9"), &ds("99")).unwrap(), ds("891"));
        assert_eq!(small_multiply(&ds("3"), &ds("3")).unwrap(), ds("9"));
    }

    #[test]
    fn test_small_multiply_is_canonical() {
        assert_eq!(small_multiply(&ds("00"), &ds("5")).unwrap(), ds("0"));
        assert_eq!(small_multiply(&ds("07"), &ds("1")).unwrap(), ds("7"));
    }

    #[test]
    fn test_small_multiply_rejects_wide_operands() {
        assert_eq!(
            small_multiply(&ds("12"), &ds("34")),
            Err(ArithmeticError::BaseCaseTooWide { combined_digits: 4 })
        );
    }

    #[test]
    fn test_small_multiply_exhaustive() {
        for a in 0u32..100 {
            for b in 0u32..10 {
                let product = small_multiply(&ds(&a.to_string()), &ds(&b.to_string())).unwrap();
                assert_eq!(product.to_string(), (a * b).to_string());
            }
        }
    }
}
