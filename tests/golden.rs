//! Golden file integration tests.
//!
//! Reads tests/testdata/roots_golden.json and checks the free functions and
//! every registered calculator against precomputed exact results.

use std::str::FromStr;

use num_bigint::BigInt;
use serde::Deserialize;

use rootcalc_core::observers::NoOpObserver;
use rootcalc_core::options::Options;
use rootcalc_core::registry::{CalculatorFactory, DefaultFactory};
use rootcalc_core::{icbrt, ilog2, isqrt, RootError};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: String,
    #[serde(default)]
    log2: Option<u64>,
    #[serde(default)]
    sqrt: Option<String>,
    cbrt: String,
}

impl GoldenEntry {
    fn n(&self) -> BigInt {
        BigInt::from_str(&self.n).expect("bad golden input")
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/roots_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn big(text: &str) -> BigInt {
    BigInt::from_str(text).expect("bad golden value")
}

// ---------------------------------------------------------------------------
// Golden: free functions
// ---------------------------------------------------------------------------

#[test]
fn golden_ilog2() {
    for entry in &load_golden_data().values {
        let result = ilog2(&entry.n());
        match entry.log2 {
            Some(expected) => assert_eq!(result, Ok(expected), "ilog2 mismatch at n={}", entry.n),
            None => assert!(
                matches!(result, Err(RootError::Domain { .. })),
                "ilog2 should reject n={}",
                entry.n
            ),
        }
    }
}

#[test]
fn golden_isqrt() {
    for entry in &load_golden_data().values {
        let result = isqrt(&entry.n());
        match &entry.sqrt {
            Some(expected) => {
                assert_eq!(result, Ok(big(expected)), "isqrt mismatch at n={}", entry.n);
            }
            None => assert!(
                matches!(result, Err(RootError::Domain { .. })),
                "isqrt should reject n={}",
                entry.n
            ),
        }
    }
}

#[test]
fn golden_icbrt() {
    for entry in &load_golden_data().values {
        assert_eq!(icbrt(&entry.n()), big(&entry.cbrt), "icbrt mismatch at n={}", entry.n);
    }
}

// ---------------------------------------------------------------------------
// Golden: registered calculators, with and without the fast path
// ---------------------------------------------------------------------------

#[test]
fn golden_registered_calculators() {
    let factory = DefaultFactory::new();
    let data = load_golden_data();

    for fast_path in [true, false] {
        let opts = Options {
            fast_path,
            ..Options::default()
        };

        for name in factory.available() {
            let calc = factory.get(name).unwrap();
            for entry in &data.values {
                let expected = match name {
                    "log2" => entry.log2.map(BigInt::from),
                    "sqrt" => entry.sqrt.as_deref().map(big),
                    "cbrt" => Some(big(&entry.cbrt)),
                    // gmp-* references are covered by their own unit tests
                    _ => continue,
                };
                let result = calc.calculate(&NoOpObserver, &entry.n(), &opts);
                match expected {
                    Some(value) => assert_eq!(
                        result,
                        Ok(value),
                        "{name} mismatch at n={} (fast_path={fast_path})",
                        entry.n
                    ),
                    None => assert!(result.is_err(), "{name} should reject n={}", entry.n),
                }
            }
        }
    }
}
