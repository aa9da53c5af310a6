//! Floor base-2 logarithm of a big integer.
//!
//! Both root iterations are seeded from this value, so it has to be exact at
//! every magnitude. The base-2 digit count comes straight from the native
//! bit-length query; no floating point is involved.

use num_bigint::BigInt;
use num_traits::Signed;

use crate::calculator::{CoreCalculator, RootError};
use crate::observer::TraceObserver;
use crate::operation::Operation;

/// Return `w = floor(log2 n)`, i.e. the unique `w` with `2^w <= n < 2^(w+1)`.
///
/// Fails with [`RootError::Domain`] when `n <= 0`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use rootcalc_core::log2::ilog2;
///
/// assert_eq!(ilog2(&BigInt::from(1)).unwrap(), 0);
/// assert_eq!(ilog2(&BigInt::from(1023)).unwrap(), 9);
/// assert_eq!(ilog2(&BigInt::from(1024)).unwrap(), 10);
/// assert!(ilog2(&BigInt::from(0)).is_err());
/// ```
pub fn ilog2(n: &BigInt) -> Result<u64, RootError> {
    if !n.is_positive() {
        return Err(RootError::domain(Operation::Log2, n));
    }
    Ok(ilog2_positive(n))
}

/// `ilog2` for callers that already know `n > 0`.
#[inline]
pub(crate) fn ilog2_positive(n: &BigInt) -> u64 {
    debug_assert!(n.is_positive());
    n.bits() - 1
}

/// Bit-length calculator.
pub struct BitLength;

impl BitLength {
    /// Create a new bit-length calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for BitLength {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for BitLength {
    fn calculate_core(
        &self,
        _observer: &dyn TraceObserver,
        n: &BigInt,
    ) -> Result<BigInt, RootError> {
        ilog2(n).map(BigInt::from)
    }

    fn name(&self) -> &str {
        "BitLength"
    }

    fn operation(&self) -> Operation {
        Operation::Log2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::NoOpObserver;
    use num_traits::One;

    #[test]
    fn small_values() {
        assert_eq!(ilog2(&BigInt::from(1)).unwrap(), 0);
        assert_eq!(ilog2(&BigInt::from(2)).unwrap(), 1);
        assert_eq!(ilog2(&BigInt::from(3)).unwrap(), 1);
        assert_eq!(ilog2(&BigInt::from(4)).unwrap(), 2);
        assert_eq!(ilog2(&BigInt::from(255)).unwrap(), 7);
        assert_eq!(ilog2(&BigInt::from(256)).unwrap(), 8);
    }

    #[test]
    fn powers_of_two_and_neighbours() {
        for k in 1u64..300 {
            let p = BigInt::one() << k;
            assert_eq!(ilog2(&p).unwrap(), k);
            assert_eq!(ilog2(&(&p - 1)).unwrap(), k - 1);
            assert_eq!(ilog2(&(&p + 1)).unwrap(), k);
        }
    }

    #[test]
    fn zero_is_domain_error() {
        let err = ilog2(&BigInt::from(0)).unwrap_err();
        assert_eq!(
            err,
            RootError::Domain {
                operation: Operation::Log2,
                value: BigInt::from(0),
            }
        );
    }

    #[test]
    fn negative_is_domain_error() {
        assert!(matches!(
            ilog2(&BigInt::from(-8)),
            Err(RootError::Domain {
                operation: Operation::Log2,
                ..
            })
        ));
    }

    #[test]
    fn calculator_returns_bigint() {
        let calc = BitLength::new();
        let r = calc
            .calculate_core(&NoOpObserver, &BigInt::from(1_000_000))
            .unwrap();
        assert_eq!(r, BigInt::from(19));
        assert_eq!(calc.name(), "BitLength");
        assert_eq!(calc.operation(), Operation::Log2);
    }
}
