// ============================================================================
// Karatsuba Multiplier
// Recursive three-product multiplication over decimal strings
// ============================================================================

use super::stats::RecursionStats;
use crate::arithmetic::{add, equalize, shift_left, small_multiply, subtract, BASE_CASE_DIGITS};
use crate::domain::MultiplierConfig;
use crate::numeric::{ArithmeticError, ArithmeticResult, DecimalString};

type Operands<'x> = (&'x DecimalString, &'x DecimalString);

/// Sequential Karatsuba product, exactly as the recursion computes it.
///
/// The result is not canonicalized: it may carry leading zeros
/// (`"123" * "456"` yields `"056088"`). Use
/// [`KaratsubaMultiplier`](super::KaratsubaMultiplier) for canonical output.
///
/// # Errors
/// Only internal invariant violations (`BorrowUnderflow`) can surface here;
/// they indicate a defect, not bad input.
pub fn karatsuba(a: &DecimalString, b: &DecimalString) -> ArithmeticResult<DecimalString> {
    let config = MultiplierConfig::sequential();
    let stats = RecursionStats::new();
    Recursion::new(&config, &stats).multiply(a, b, 0)
}

/// One multiplication's recursion: configuration plus shared counters.
#[derive(Clone, Copy)]
pub(crate) struct Recursion<'a> {
    config: &'a MultiplierConfig,
    stats: &'a RecursionStats,
}

impl<'a> Recursion<'a> {
    pub(crate) fn new(config: &'a MultiplierConfig, stats: &'a RecursionStats) -> Self {
        Self { config, stats }
    }

    pub(crate) fn multiply(
        self,
        a: &DecimalString,
        b: &DecimalString,
        depth: usize,
    ) -> ArithmeticResult<DecimalString> {
        self.stats.record_call(depth);

        if a.len() + b.len() <= BASE_CASE_DIGITS {
            self.stats.record_base_case();
            return small_multiply(a, b);
        }

        let (a, b) = equalize(a, b);
        let n = a.len();
        // floor(n/2) high digits, ceil(n/2) low digits
        let m = n / 2;
        let low_width = (n + 1) / 2;

        let (a1, a2) = a.split_at(m);
        let (b1, b2) = b.split_at(m);

        let p = add(&a1, &a2);
        let q = add(&b1, &b2);

        let (k1, k2, k3) = if self.config.should_fork(n, depth) {
            self.fork_join((&a1, &b1), (&a2, &b2), (&p, &q), depth + 1)?
        } else {
            (
                self.multiply(&a1, &b1, depth + 1)?,
                self.multiply(&a2, &b2, depth + 1)?,
                self.multiply(&p, &q, depth + 1)?,
            )
        };

        // a1*b2 + a2*b1 = (a1+a2)(b1+b2) - a1*b1 - a2*b2
        let k4 = subtract(&subtract(&k3, &k1)?, &k2)?;

        let k1_scaled = shift_left(&k1, 2 * low_width);
        let k4_scaled = shift_left(&k4, low_width);

        Ok(add(&add(&k1_scaled, &k4_scaled), &k2))
    }

    /// Run `high` and `low` on scoped workers and `sums` here, then join all three.
    fn fork_join(
        self,
        high: Operands<'_>,
        low: Operands<'_>,
        sums: Operands<'_>,
        depth: usize,
    ) -> ArithmeticResult<(DecimalString, DecimalString, DecimalString)> {
        self.stats.record_fork();
        tracing::debug!(
            depth,
            width = high.0.len() + low.0.len(),
            "Forking Karatsuba sub-products"
        );

        let (k1, k2, k3) = crossbeam::thread::scope(|s| {
            let k1 = s.spawn(move |_| self.multiply(high.0, high.1, depth));
            let k2 = s.spawn(move |_| self.multiply(low.0, low.1, depth));
            let k3 = self.multiply(sums.0, sums.1, depth);
            (k1.join(), k2.join(), k3)
        })
        .map_err(|_| ArithmeticError::WorkerPanicked)?;

        let k1 = k1.map_err(|_| ArithmeticError::WorkerPanicked)??;
        let k2 = k2.map_err(|_| ArithmeticError::WorkerPanicked)??;
        Ok((k1, k2, k3?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn ds(s: &str) -> DecimalString {
        s.parse().unwrap()
    }

    fn oracle(a: &str, b: &str) -> BigUint {
        let a: BigUint = a.parse().unwrap();
        let b: BigUint = b.parse().unwrap();
        a * b
    }

    fn as_biguint(x: &DecimalString) -> BigUint {
        x.to_string().parse().unwrap()
    }

    #[test]
    fn test_two_digit_operands() {
        assert_eq!(karatsuba(&ds("12"), &ds("34")).unwrap(), ds("408"));
    }

    #[test]
    fn test_odd_width_keeps_leading_zero() {
        let product = karatsuba(&ds("123"), &ds("456")).unwrap();
        assert_eq!(product, ds("056088"));
        assert!(product.numeric_eq(&ds("56088")));
    }

    #[test]
    fn test_eight_nines() {
        assert_eq!(
            karatsuba(&ds("99999999"), &ds("99999999")).unwrap(),
            ds("9999999800000001")
        );
    }

    #[test]
    fn test_sixty_four_digit_operands() {
        let a = "3141592653589793238462643383279502884197169399375105820974944592";
        let b = "2718281828459045235360287471352662497757247093699959574966967627";
        let expected = "8539734222673567065463550869546574495034888535765114961879601127\
                        067743044893204848617875072216249073013374895871952806582723184";

        let product = karatsuba(&ds(a), &ds(b)).unwrap();
        assert_eq!(product.to_string(), expected);
        assert_eq!(as_biguint(&product), oracle(a, b));
    }

    #[test]
    fn test_multiply_by_zero() {
        let product = karatsuba(&ds("5678"), &ds("0")).unwrap();
        assert_eq!(product, ds("0000000"));
        assert!(product.is_zero());
    }

    #[test]
    fn test_multiply_by_one() {
        let product = karatsuba(&ds("5678"), &ds("1")).unwrap();
        assert_eq!(product, ds("0005678"));
        assert!(product.numeric_eq(&ds("5678")));
    }

    #[test]
    fn test_base_case_bypasses_recursion() {
        let config = MultiplierConfig::sequential();
        let stats = RecursionStats::new();
        let product = Recursion::new(&config, &stats)
            .multiply(&ds("99"), &ds("9"), 0)
            .unwrap();

        assert_eq!(product, ds("891"));
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.calls, 1);
        assert_eq!(snapshot.base_cases, 1);
        assert_eq!(snapshot.max_depth, 0);
    }

    #[test]
    fn test_recursion_depth_is_logarithmic() {
        let a = "7".repeat(1024);
        let config = MultiplierConfig::sequential();
        let stats = RecursionStats::new();
        Recursion::new(&config, &stats)
            .multiply(&ds(&a), &ds(&a), 0)
            .unwrap();

        // Each level halves the width, sums may add one digit
        assert!(stats.snapshot().max_depth <= 2 * 11);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = "31415926535897932384626433832795028841971693993751".repeat(6);
        let b = "27182818284590452353602874713526624977572470936999".repeat(5);
        let config = MultiplierConfig::parallel()
            .with_parallel_threshold(16)
            .with_max_parallel_depth(2);
        let stats = RecursionStats::new();

        let parallel = Recursion::new(&config, &stats)
            .multiply(&ds(&a), &ds(&b), 0)
            .unwrap();

        assert_eq!(parallel, karatsuba(&ds(&a), &ds(&b)).unwrap());
        // Top level plus its three children fork
        assert_eq!(stats.snapshot().forks, 4);
    }

    #[test]
    fn test_split_parity() {
        // n = 6 (even) and n = 7 (odd) with the same numeric operands
        let even = karatsuba(&ds("123456"), &ds("654321")).unwrap();
        let odd = karatsuba(&ds("0123456"), &ds("654321")).unwrap();
        assert!(even.numeric_eq(&odd));
        assert_eq!(as_biguint(&even), oracle("123456", "654321"));
    }

    fn digits(max_len: usize) -> impl Strategy<Value = String> {
        proptest::string::string_regex(&format!("[0-9]{{1,{}}}", max_len)).unwrap()
    }

    proptest! {
        #[test]
        fn prop_matches_bigint_oracle(a in digits(600), b in digits(600)) {
            let product = karatsuba(&ds(&a), &ds(&b)).unwrap();
            prop_assert_eq!(as_biguint(&product), oracle(&a, &b));
        }

        #[test]
        fn prop_commutative(a in digits(200), b in digits(200)) {
            let ab = karatsuba(&ds(&a), &ds(&b)).unwrap();
            let ba = karatsuba(&ds(&b), &ds(&a)).unwrap();
            prop_assert!(ab.numeric_eq(&ba));
        }

        #[test]
        fn prop_identity_and_zero(a in digits(300)) {
            let x = ds(&a);
            prop_assert!(karatsuba(&x, &DecimalString::one()).unwrap().numeric_eq(&x));
            prop_assert!(karatsuba(&x, &DecimalString::zero()).unwrap().is_zero());
        }

        #[test]
        fn prop_padding_does_not_change_value(a in digits(120), b in digits(120), zeros in 0usize..4) {
            let padded = format!("{}{}", "0".repeat(zeros), a);
            let plain = karatsuba(&ds(&a), &ds(&b)).unwrap();
            let shifted = karatsuba(&ds(&padded), &ds(&b)).unwrap();
            prop_assert!(plain.numeric_eq(&shifted));
        }
    }
}
