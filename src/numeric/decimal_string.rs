// ============================================================================
// Decimal String
// Immutable sequence of decimal digits, most-significant digit first
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Inline capacity before a digit buffer spills to the heap.
///
/// Most values produced near the bottom of the recursion are a handful of
/// digits wide, so they never allocate.
pub(crate) const INLINE_DIGITS: usize = 16;

/// Digit buffer used by every primitive.
pub(crate) type DigitBuffer = SmallVec<[u8; INLINE_DIGITS]>;

/// A non-negative integer magnitude stored as decimal digits.
///
/// Digits are kept as values `0..=9`, most-significant first. Leading zeros
/// are preserved: intermediate results of the Karatsuba recursion rely on
/// their fixed width for positional alignment. Use [`DecimalString::trimmed`]
/// to obtain the canonical form.
///
/// # Example
/// ```
/// use karatsuba::numeric::DecimalString;
///
/// let x: DecimalString = "00420".parse().unwrap();
/// assert_eq!(x.len(), 5);
/// assert_eq!(x.trimmed().to_string(), "420");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalString {
    digits: DigitBuffer,
}

impl DecimalString {
    /// Parse a digit string, rejecting anything but `0`-`9`.
    ///
    /// # Errors
    /// - `EmptyDigitString` if `s` has no characters
    /// - `InvalidDigitString` naming the first character that is not a digit
    pub fn parse(s: &str) -> ArithmeticResult<Self> {
        if s.is_empty() {
            return Err(ArithmeticError::EmptyDigitString);
        }

        let mut digits = DigitBuffer::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ArithmeticError::InvalidDigitString { position, found: ch }),
            }
        }

        Ok(Self { digits })
    }

    /// Build from digit values that are already known to be `0..=9`.
    #[inline]
    pub(crate) fn from_buffer(digits: DigitBuffer) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// The value zero as a single digit.
    pub fn zero() -> Self {
        Self::from_buffer(smallvec::smallvec![0])
    }

    /// The value one as a single digit.
    pub fn one() -> Self {
        Self::from_buffer(smallvec::smallvec![1])
    }

    /// Number of digits, leading zeros included.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a decimal string holds at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit values, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Number of leading zero digits (never counts the final digit).
    pub fn leading_zeros(&self) -> usize {
        let last = self.digits.len() - 1;
        self.digits[..last].iter().take_while(|&&d| d == 0).count()
    }

    /// Canonical form: leading zeros removed, at least one digit kept.
    pub fn trimmed(&self) -> Self {
        let skip = self.leading_zeros();
        if skip == 0 {
            return self.clone();
        }
        Self::from_buffer(DigitBuffer::from_slice(&self.digits[skip..]))
    }

    /// Split at `m` into the high part (first `m` digits) and the low part.
    ///
    /// Both halves must be non-empty: `0 < m < len`.
    pub(crate) fn split_at(&self, m: usize) -> (Self, Self) {
        let (high, low) = self.digits.split_at(m);
        (
            Self::from_buffer(DigitBuffer::from_slice(high)),
            Self::from_buffer(DigitBuffer::from_slice(low)),
        )
    }

    /// Compare numeric values, ignoring leading zeros.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        let lhs = &self.digits[self.leading_zeros()..];
        let rhs = &other.digits[other.leading_zeros()..];
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// True when both strings denote the same number.
    pub fn numeric_eq(&self, other: &Self) -> bool {
        self.cmp_numeric(other) == Ordering::Equal
    }
}

impl From<u64> for DecimalString {
    fn from(value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let mut digits = DigitBuffer::new();
        let mut value = value;
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        digits.reverse();

        Self::from_buffer(digits)
    }
}

impl std::str::FromStr for DecimalString {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.digits.iter().map(|&d| (b'0' + d) as char).collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalString(\"{}\")", self)
    }
}

// ============================================================================
// Serde (as a plain digit string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
