//! # rootcalc-core
//!
//! Exact integer base-2 logarithm, square root, and cube root of
//! arbitrary-precision integers. Each root is seeded from the operand's bit
//! length and refined by integer Newton iteration until it stops decreasing.

pub mod calculator;
pub mod cbrt;
pub mod constants;
pub mod log2;
pub mod observer;
pub mod observers;
pub mod operation;
pub mod options;
pub mod registry;
pub mod sqrt;
pub mod verify;

#[cfg(feature = "gmp")]
pub mod calculator_gmp;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, RootCalculator, RootError};
pub use cbrt::{icbrt, icbrt_observed};
pub use constants::{exit_codes, DEFAULT_LOG_VALUE_BITS, DEFAULT_RADIX, FAST_PATH_MAX_BITS};
pub use log2::ilog2;
pub use observer::{TraceEvent, TraceObserver, TraceRecord, TraceSubject};
pub use operation::Operation;
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory};
pub use sqrt::{isqrt, isqrt_observed};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Num;

/// Parse an integer written in `radix`, with an optional sign and `_` separators.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
///
/// assert_eq!(rootcalc_core::parse_integer("-1_000", 10).unwrap(), BigInt::from(-1000));
/// assert_eq!(rootcalc_core::parse_integer("ff", 16).unwrap(), BigInt::from(255));
/// assert!(rootcalc_core::parse_integer("12x", 10).is_err());
/// ```
pub fn parse_integer(text: &str, radix: u32) -> Result<BigInt, RootError> {
    if !(2..=36).contains(&radix) {
        return Err(RootError::Config(format!("radix must be in 2..=36, got {radix}")));
    }
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(RootError::Parse(format!("not an integer: {text:?}")));
    }
    let magnitude = BigUint::from_str_radix(digits, radix)
        .map_err(|e| RootError::Parse(format!("{text:?}: {e}")))?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}
