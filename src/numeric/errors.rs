// ============================================================================
// Arithmetic Errors
// Error types for decimal-string parsing and digit-level arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing operands or multiplying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The input line carried fewer than two operand tokens
    InvalidInputFormat {
        /// Number of tokens actually found
        tokens: usize,
    },
    /// An operand had no characters at all
    EmptyDigitString,
    /// An operand contained a character outside `0`-`9`
    InvalidDigitString {
        /// Character index of the first offending character
        position: usize,
        /// The offending character
        found: char,
    },
    /// Subtraction borrowed past the most-significant digit (minuend < subtrahend)
    BorrowUnderflow,
    /// Base multiplier called with more than three combined digits
    BaseCaseTooWide {
        /// `len(a) + len(b)` of the rejected operands
        combined_digits: usize,
    },
    /// A forked recursive branch panicked before joining
    WorkerPanicked,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidInputFormat { tokens } => write!(
                f,
                "invalid input format: expected two operands, found {}",
                tokens
            ),
            ArithmeticError::EmptyDigitString => write!(f, "empty digit string"),
            ArithmeticError::InvalidDigitString { position, found } => write!(
                f,
                "invalid digit string: unexpected character {:?} at position {}",
                found, position
            ),
            ArithmeticError::BorrowUnderflow => write!(
                f,
                "borrow underflow: minuend is smaller than subtrahend"
            ),
            ArithmeticError::BaseCaseTooWide { combined_digits } => write!(
                f,
                "base case too wide: {} combined digits (at most 3 allowed)",
                combined_digits
            ),
            ArithmeticError::WorkerPanicked => {
                write!(f, "recursive worker panicked before join")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
