// ============================================================================
// Operand Input
// Reads the two whitespace-separated operands of one multiplication
// ============================================================================

use crate::numeric::{ArithmeticError, ArithmeticResult, DecimalString};
use std::io::BufRead;

/// Parse the first two whitespace-separated tokens of `line`.
///
/// Tokens after the second are ignored.
///
/// # Errors
/// - `InvalidInputFormat` if fewer than two tokens are present
/// - `InvalidDigitString` if a token is not a plain digit run
pub fn parse_operands(line: &str) -> ArithmeticResult<(DecimalString, DecimalString)> {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((a.parse()?, b.parse()?)),
        (Some(_), None) => Err(ArithmeticError::InvalidInputFormat { tokens: 1 }),
        _ => Err(ArithmeticError::InvalidInputFormat { tokens: 0 }),
    }
}

/// Errors reading operands from a stream
#[derive(Debug)]
pub enum InputError {
    /// The underlying reader failed
    Io(std::io::Error),
    /// The line was read but is not two valid operands
    Parse(ArithmeticError),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "failed to read input: {}", e),
            InputError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}

impl From<ArithmeticError> for InputError {
    fn from(e: ArithmeticError) -> Self {
        InputError::Parse(e)
    }
}

/// Read one line from `reader` and parse its two operands.
pub fn read_operands<R: BufRead>(reader: &mut R) -> Result<(DecimalString, DecimalString), InputError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(parse_operands(&line)?)
}
