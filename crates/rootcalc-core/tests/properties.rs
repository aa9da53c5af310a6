//! Property-based tests for the Newton root algorithms.
//!
//! These call the free functions and the `CoreCalculator` implementations
//! directly, so the `u64` fast path of `RootCalculator` is never involved.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Roots;
use num_traits::One;
use proptest::prelude::*;

use rootcalc_core::calculator::{CoreCalculator, RootError};
use rootcalc_core::cbrt::{icbrt, NewtonCbrt};
use rootcalc_core::log2::ilog2;
use rootcalc_core::observers::NoOpObserver;
use rootcalc_core::sqrt::{isqrt, NewtonSqrt};
use rootcalc_core::verify;

/// Non-negative integers of up to 4096 bits, built from random limbs.
fn big_natural() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u32>(), 0..128)
        .prop_map(|digits| BigInt::from_biguint(Sign::Plus, BigUint::new(digits)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// 2^w <= n < 2^(w+1) for every positive n.
    #[test]
    fn log2_brackets_input(n in big_natural()) {
        let n = n + 1u32;
        let w = ilog2(&n).unwrap();
        prop_assert!(BigInt::one() << w <= n);
        prop_assert!(n < BigInt::one() << (w + 1));
    }

    /// r^2 <= n < (r+1)^2 for every n >= 0.
    #[test]
    fn sqrt_is_floor(n in big_natural()) {
        let r = isqrt(&n).unwrap();
        prop_assert!(verify::check_sqrt(&n, &r).is_ok(), "isqrt({}) = {}", n, r);
    }

    /// r^3 <= n < (r+1)^3 for n >= 0, and odd symmetry for n < 0.
    #[test]
    fn cbrt_is_truncated(n in big_natural()) {
        let r = icbrt(&n);
        prop_assert!(verify::check_cbrt(&n, &r).is_ok(), "icbrt({}) = {}", n, r);
        let neg = -&n;
        prop_assert_eq!(icbrt(&neg), -r);
    }

    /// Squaring then rooting gives the root back.
    #[test]
    fn sqrt_of_square(r in big_natural()) {
        let square = &r * &r;
        prop_assert_eq!(isqrt(&square).unwrap(), r.clone());
        if r > BigInt::from(0) {
            prop_assert_eq!(isqrt(&(square - 1u32)).unwrap(), r - 1u32);
        }
    }

    /// Cubing then rooting gives the root back, for either sign.
    #[test]
    fn cbrt_of_cube(r in big_natural()) {
        let cube = &r * &r * &r;
        prop_assert_eq!(icbrt(&cube), r.clone());
        prop_assert_eq!(icbrt(&-&cube), -&r);
    }

    /// Agrees with the `num_integer::Roots` implementation for BigInt.
    #[test]
    fn matches_num_integer(n in big_natural()) {
        prop_assert_eq!(isqrt(&n).unwrap(), Roots::sqrt(&n));
        prop_assert_eq!(icbrt(&n), Roots::cbrt(&n));
        let neg = -&n;
        prop_assert_eq!(icbrt(&neg), Roots::cbrt(&neg));
    }

    /// Negative inputs are rejected by sqrt with a domain error.
    #[test]
    fn sqrt_rejects_negatives(n in 1i64..i64::MAX) {
        let result = isqrt(&BigInt::from(-n));
        let is_domain = matches!(result, Err(RootError::Domain { .. }));
        prop_assert!(is_domain);
    }

    /// Core calculators agree with the free functions.
    #[test]
    fn calculators_match_functions(n in big_natural()) {
        let sqrt = NewtonSqrt::new().calculate_core(&NoOpObserver, &n).unwrap();
        let cbrt = NewtonCbrt::new().calculate_core(&NoOpObserver, &n).unwrap();
        prop_assert_eq!(sqrt, isqrt(&n).unwrap());
        prop_assert_eq!(cbrt, icbrt(&n));
    }
}

#[test]
fn hundreds_of_digits_verify_by_reexponentiation() {
    // 7^500 has 423 decimal digits
    let n = num_traits::pow(BigInt::from(7), 500) + 12_345u32;
    let s = isqrt(&n).unwrap();
    assert!(&s * &s <= n);
    assert!((&s + 1u32) * (&s + 1u32) > n);

    let c = icbrt(&n);
    assert!(&c * &c * &c <= n);
    let c1 = &c + 1u32;
    assert!(&c1 * &c1 * &c1 > n);
}

#[test]
fn beyond_float_precision() {
    // A float-based root goes wrong around here; the Newton root must not.
    let r = BigInt::from(67_108_865u64);
    let n = &r * &r - 1u32;
    assert_eq!(isqrt(&n).unwrap(), r - 1u32);

    let r = BigInt::from(2_097_153u64);
    let n = &r * &r * &r - 1u32;
    assert_eq!(icbrt(&n), r - 1u32);
}
