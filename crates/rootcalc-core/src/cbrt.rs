//! Cube root truncated toward zero by integer Newton iteration.
//!
//! Negative inputs are answered through odd symmetry, `cbrt(n) = -cbrt(-n)`.
//! For `n > 0` the seed is `x0 = 2^(w / 3)` with `w = floor(log2 n)`, and the
//! truncated update is `x' = (2x + n / x^2) / 3`. As with the square root, the
//! first update is accepted unconditionally and the loop continues while the
//! iterate strictly decreases.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::calculator::{CoreCalculator, RootError};
use crate::log2::ilog2_positive;
use crate::observer::{TraceEvent, TraceObserver};
use crate::observers::NoOpObserver;
use crate::operation::Operation;

/// Return the cube root of `n` truncated toward zero.
///
/// For `n >= 0` this is the unique `r` with `r^3 <= n < (r+1)^3`; for
/// `n < 0` it is `-icbrt(-n)`. Defined for every integer.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use rootcalc_core::cbrt::icbrt;
///
/// assert_eq!(icbrt(&BigInt::from(7)), BigInt::from(1));
/// assert_eq!(icbrt(&BigInt::from(8)), BigInt::from(2));
/// assert_eq!(icbrt(&BigInt::from(-8)), BigInt::from(-2));
/// ```
#[must_use]
pub fn icbrt(n: &BigInt) -> BigInt {
    icbrt_observed(n, &NoOpObserver)
}

/// [`icbrt`], reporting every iteration to `observer`.
pub fn icbrt_observed(n: &BigInt, observer: &dyn TraceObserver) -> BigInt {
    if n.is_negative() {
        // -n is positive, so this recurses exactly once
        let root = -icbrt_observed(&-n, observer);
        observer.on_event(&TraceEvent::Negate {
            operation: Operation::Cbrt,
        });
        return root;
    }
    if n.is_zero() {
        return BigInt::zero();
    }

    let w = ilog2_positive(n);
    let mut x = BigInt::one() << (w / 3);
    observer.on_event(&TraceEvent::Seed {
        operation: Operation::Cbrt,
        bit_length: w,
        guess: &x,
    });

    let mut next = newton_step(n, &x);
    let mut index = 0;
    loop {
        x = next;
        index += 1;
        observer.on_event(&TraceEvent::Step {
            operation: Operation::Cbrt,
            index,
            value: &x,
        });
        next = newton_step(n, &x);
        if next >= x {
            break;
        }
    }

    observer.on_event(&TraceEvent::Converged {
        operation: Operation::Cbrt,
        root: &x,
        rejected: &next,
    });
    x
}

/// `(2x + n / x^2) / 3`; `x >= 1` whenever this runs.
#[inline]
fn newton_step(n: &BigInt, x: &BigInt) -> BigInt {
    (x * 2u32 + n / (x * x)) / 3u32
}

/// Newton cube-root calculator.
pub struct NewtonCbrt;

impl NewtonCbrt {
    /// Create a new cube-root calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NewtonCbrt {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NewtonCbrt {
    fn calculate_core(
        &self,
        observer: &dyn TraceObserver,
        n: &BigInt,
    ) -> Result<BigInt, RootError> {
        Ok(icbrt_observed(n, observer))
    }

    fn name(&self) -> &str {
        "NewtonCbrt"
    }

    fn operation(&self) -> Operation {
        Operation::Cbrt
    }
}
