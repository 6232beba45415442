// ============================================================================
// Subtracter
// Digit-wise subtraction with a ripple borrow chain
// ============================================================================

use super::pad::equalize;
use crate::numeric::{ArithmeticError, ArithmeticResult, DecimalString, DigitBuffer};

/// Difference `a - b` of two decimal strings.
///
/// The result has the width of the wider operand and keeps its leading
/// zeros. A borrow takes one unit from the nearest more-significant digit of
/// `a` that is not zero, turning every zero passed on the way into a nine.
///
/// # Errors
/// Returns `BorrowUnderflow` when the borrow chain runs past the
/// most-significant digit, which happens exactly when `a < b`.
pub fn subtract(a: &DecimalString, b: &DecimalString) -> ArithmeticResult<DecimalString> {
    let (a, b) = equalize(a, b);

    // Minuend digits, rewritten in place as borrows ripple left
    let mut board = DigitBuffer::from_slice(a.digits());
    let subtrahend = b.digits();

    for i in (0..board.len()).rev() {
        let mut minuend = board[i];
        let digit = subtrahend[i];

        if digit > minuend {
            minuend += 10;
            borrow_from_left(&mut board, i)?;
        }

        board[i] = minuend - digit;
    }

    Ok(DecimalString::from_buffer(board))
}

/// Take one unit from the nearest non-zero digit left of `position`.
#[inline]
fn borrow_from_left(board: &mut DigitBuffer, position: usize) -> ArithmeticResult<()> {
    let mut j = position;
    loop {
        j = j.checked_sub(1).ok_or(ArithmeticError::BorrowUnderflow)?;
        if board[j] != 0 {
            board[j] -= 1;
            return Ok(());
        }
        board[j] = 9;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(s: &str) -> DecimalString {
        s.parse().unwrap()
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&ds("5678"), &ds("1234")).unwrap(), ds("4444"));
    }

    #[test]
    fn test_subtract_single_borrow() {
        let diff = subtract(&ds("100"), &ds("1")).unwrap();
        assert_eq!(diff, ds("099"));
        assert!(diff.numeric_eq(&ds("99")));
    }

    #[test]
    fn test_subtract_borrow_skips_consecutive_zeros() {
        let diff = subtract(&ds("10000"), &ds("1")).unwrap();
        assert_eq!(diff, ds("09999"));
        assert!(diff.numeric_eq(&ds("9999")));

        assert_eq!(subtract(&ds("20005"), &ds("9")).unwrap(), ds("19996"));
    }

    #[test]
    fn test_subtract_equal_operands() {
        assert_eq!(subtract(&ds("4321"), &ds("4321")).unwrap(), ds("0000"));
    }

    #[test]
    fn test_subtract_wider_subtrahend_with_leading_zeros() {
        assert_eq!(subtract(&ds("50"), &ds("00007")).unwrap(), ds("00043"));
    }

    #[test]
    fn test_subtract_underflow() {
        assert_eq!(
            subtract(&ds("1"), &ds("2")),
            Err(ArithmeticError::BorrowUnderflow)
        );
        assert_eq!(
            subtract(&ds("10"), &ds("11")),
            Err(ArithmeticError::BorrowUnderflow)
        );
        assert_eq!(
            subtract(&ds("999"), &ds("1000")),
            Err(ArithmeticError::BorrowUnderflow)
        );
    }

    quickcheck::quickcheck! {
        fn prop_subtract_matches_native(a: u64, b: u64) -> bool {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let diff = subtract(&DecimalString::from(hi), &DecimalString::from(lo)).unwrap();
            diff.numeric_eq(&DecimalString::from(hi - lo))
        }

        fn prop_subtract_rejects_smaller_minuend(a: u64, b: u64) -> bool {
            if a >= b {
                return true;
            }
            subtract(&DecimalString::from(a), &DecimalString::from(b))
                == Err(ArithmeticError::BorrowUnderflow)
        }
    }
}
