//! Property-based tests through the calculator registry.
//!
//! These go through `RootCalculator`, so both the `u64` fast path and the
//! Newton path are covered.

use num_bigint::BigInt;
use num_integer::Roots;
use proptest::prelude::*;

use rootcalc_core::observers::NoOpObserver;
use rootcalc_core::options::Options;
use rootcalc_core::registry::{CalculatorFactory, DefaultFactory};
use rootcalc_core::verify;
use rootcalc_core::Operation;

fn compute(op: &str, n: &BigInt, fast_path: bool) -> BigInt {
    let factory = DefaultFactory::new();
    let calc = factory.get(op).unwrap();
    let opts = Options {
        fast_path,
        ..Options::default()
    };
    calc.calculate(&NoOpObserver, n, &opts).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Fast path and Newton path agree on every u64.
    #[test]
    fn fast_path_equals_newton(n in 1u64..=u64::MAX) {
        let n = BigInt::from(n);
        for op in ["log2", "sqrt", "cbrt"] {
            prop_assert_eq!(compute(op, &n, true), compute(op, &n, false), "{}({})", op, n);
        }
    }

    /// Results around the 2^64 fast-path boundary satisfy their inequalities.
    #[test]
    fn boundary_results_verify(delta in -1000i64..1000) {
        let n = (BigInt::from(1u8) << 64u32) + delta;
        for op in Operation::ALL {
            let r = compute(op.as_str(), &n, true);
            prop_assert!(verify::check(op, &n, &r).is_ok(), "{}({}) = {}", op, n, r);
        }
    }

    /// Cube root through the registry agrees with num-integer for any sign.
    #[test]
    fn cbrt_matches_num_integer(n in any::<i128>()) {
        let n = BigInt::from(n);
        prop_assert_eq!(compute("cbrt", &n, true), Roots::cbrt(&n));
    }

    /// Square root through the registry agrees with num-integer.
    #[test]
    fn sqrt_matches_num_integer(n in any::<u128>()) {
        let n = BigInt::from(n);
        prop_assert_eq!(compute("sqrt", &n, true), Roots::sqrt(&n));
    }
}
