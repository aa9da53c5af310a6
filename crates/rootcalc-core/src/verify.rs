//! Result verification against the defining inequalities.
//!
//! Each check costs one or two multiplications of result-sized numbers, far
//! less than the iteration that produced the result.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

use crate::calculator::RootError;
use crate::operation::Operation;

/// Check `2^w <= n < 2^(w+1)`.
pub fn check_log2(n: &BigInt, w: u64) -> Result<(), RootError> {
    let low = BigInt::one() << w;
    let high = &low << 1u32;
    if n.is_positive() && &low <= n && n < &high {
        Ok(())
    } else {
        Err(RootError::mismatch(Operation::Log2, n, &BigInt::from(w)))
    }
}

/// Check `r >= 0` and `r^2 <= n < (r+1)^2`.
pub fn check_sqrt(n: &BigInt, r: &BigInt) -> Result<(), RootError> {
    let r1 = r + 1u32;
    if !r.is_negative() && &(r * r) <= n && n < &(&r1 * &r1) {
        Ok(())
    } else {
        Err(RootError::mismatch(Operation::Sqrt, n, r))
    }
}

/// Check `r^3 <= n < (r+1)^3` for `n >= 0`, and `-r` against `-n` otherwise.
pub fn check_cbrt(n: &BigInt, r: &BigInt) -> Result<(), RootError> {
    if n.is_negative() {
        return check_cbrt(&-n, &-r).map_err(|_| RootError::mismatch(Operation::Cbrt, n, r));
    }
    let r1 = r + 1u32;
    if !r.is_negative() && &(r * r * r) <= n && n < &(&r1 * &r1 * &r1) {
        Ok(())
    } else {
        Err(RootError::mismatch(Operation::Cbrt, n, r))
    }
}

/// Check `result` as the output of `operation` applied to `n`.
pub fn check(operation: Operation, n: &BigInt, result: &BigInt) -> Result<(), RootError> {
    match operation {
        Operation::Log2 => match result.to_u64() {
            Some(w) => check_log2(n, w),
            None => Err(RootError::mismatch(operation, n, result)),
        },
        Operation::Sqrt => check_sqrt(n, result),
        Operation::Cbrt => check_cbrt(n, result),
    }
}
