//! Floor square root by integer Newton iteration.
//!
//! The seed `x0 = 2^(w >> 1)`, with `w = floor(log2 n)`, is within a factor
//! of two of the true root. The truncated update
//! `x' = (x + n / x) >> 1` is applied once unconditionally; after that the
//! loop keeps going only while the iterate strictly decreases. The last
//! accepted iterate is `floor(sqrt n)`.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::calculator::{CoreCalculator, RootError};
use crate::log2::ilog2_positive;
use crate::observer::{TraceEvent, TraceObserver};
use crate::observers::NoOpObserver;
use crate::operation::Operation;

/// Return `floor(sqrt n)`, the unique `r >= 0` with `r^2 <= n < (r+1)^2`.
///
/// Fails with [`RootError::Domain`] when `n < 0`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use rootcalc_core::sqrt::isqrt;
///
/// assert_eq!(isqrt(&BigInt::from(15)).unwrap(), BigInt::from(3));
/// assert_eq!(isqrt(&BigInt::from(16)).unwrap(), BigInt::from(4));
/// assert!(isqrt(&BigInt::from(-1)).is_err());
/// ```
pub fn isqrt(n: &BigInt) -> Result<BigInt, RootError> {
    isqrt_observed(n, &NoOpObserver)
}

/// [`isqrt`], reporting every iteration to `observer`.
pub fn isqrt_observed(n: &BigInt, observer: &dyn TraceObserver) -> Result<BigInt, RootError> {
    if n.is_negative() {
        return Err(RootError::domain(Operation::Sqrt, n));
    }
    if n.is_zero() {
        return Ok(BigInt::zero());
    }

    let w = ilog2_positive(n);
    let mut x = BigInt::one() << (w >> 1);
    observer.on_event(&TraceEvent::Seed {
        operation: Operation::Sqrt,
        bit_length: w,
        guess: &x,
    });

    let mut next = newton_step(n, &x);
    let mut index = 0;
    loop {
        x = next;
        index += 1;
        observer.on_event(&TraceEvent::Step {
            operation: Operation::Sqrt,
            index,
            value: &x,
        });
        next = newton_step(n, &x);
        if next >= x {
            break;
        }
    }

    observer.on_event(&TraceEvent::Converged {
        operation: Operation::Sqrt,
        root: &x,
        rejected: &next,
    });
    Ok(x)
}

/// `(x + n / x) >> 1`; `x` is never zero here.
#[inline]
fn newton_step(n: &BigInt, x: &BigInt) -> BigInt {
    (x + n / x) >> 1u32
}

/// Newton square-root calculator.
pub struct NewtonSqrt;

impl NewtonSqrt {
    /// Create a new square-root calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NewtonSqrt {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NewtonSqrt {
    fn calculate_core(
        &self,
        observer: &dyn TraceObserver,
        n: &BigInt,
    ) -> Result<BigInt, RootError> {
        isqrt_observed(n, observer)
    }

    fn name(&self) -> &str {
        "NewtonSqrt"
    }

    fn operation(&self) -> Operation {
        Operation::Sqrt
    }
}
