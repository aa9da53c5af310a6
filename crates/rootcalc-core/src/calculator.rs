//! Calculator traits and the `RootCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `RootCalculator` is a decorator that adds the exact `u64` fast path.

use std::sync::Arc;

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{Signed, ToPrimitive};
use tracing::debug;

use crate::constants::FAST_PATH_MAX_BITS;
use crate::observer::TraceObserver;
use crate::operation::Operation;
use crate::options::Options;

/// Error type for root calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    /// The input lies outside the domain of the operation.
    #[error("domain error: {operation} is undefined for {value}")]
    Domain {
        /// Operation that rejected the input.
        operation: Operation,
        /// The rejected input.
        value: BigInt,
    },

    /// Textual input could not be parsed as an integer.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A result does not satisfy the defining inequality of its operation.
    #[error("verification failed: {operation}({input}) produced {result}")]
    Mismatch {
        /// Operation whose result was checked.
        operation: Operation,
        /// Input of the checked call.
        input: BigInt,
        /// The offending result.
        result: BigInt,
    },
}

impl RootError {
    pub(crate) fn domain(operation: Operation, value: &BigInt) -> Self {
        Self::Domain {
            operation,
            value: value.clone(),
        }
    }

    pub(crate) fn mismatch(operation: Operation, input: &BigInt, result: &BigInt) -> Self {
        Self::Mismatch {
            operation,
            input: input.clone(),
            result: result.clone(),
        }
    }
}

/// Public trait for root calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Apply the calculator's operation to `n`.
    fn calculate(
        &self,
        observer: &dyn TraceObserver,
        n: &BigInt,
        opts: &Options,
    ) -> Result<BigInt, RootError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;

    /// The operation this calculator performs.
    fn operation(&self) -> Operation;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `RootCalculator` which adds the fast path.
pub trait CoreCalculator: Send + Sync {
    /// Perform the calculation on an arbitrary-precision input.
    fn calculate_core(&self, observer: &dyn TraceObserver, n: &BigInt)
        -> Result<BigInt, RootError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;

    /// The operation this algorithm performs.
    fn operation(&self) -> Operation;
}

/// Decorator that wraps a `CoreCalculator` with the small-input fast path.
pub struct RootCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl RootCalculator {
    /// Create a new `RootCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Fast path for positive inputs that fit in a `u64`.
    ///
    /// Uses integer arithmetic only, so the result is exact.
    fn calculate_small(operation: Operation, n: u64) -> u64 {
        debug_assert!(n > 0);
        match operation {
            Operation::Log2 => u64::from(n.ilog2()),
            Operation::Sqrt => n.sqrt(),
            Operation::Cbrt => n.cbrt(),
        }
    }
}

impl Calculator for RootCalculator {
    fn calculate(
        &self,
        observer: &dyn TraceObserver,
        n: &BigInt,
        opts: &Options,
    ) -> Result<BigInt, RootError> {
        // Zero and negatives go through the core for domain handling
        if opts.fast_path && n.is_positive() && n.bits() <= FAST_PATH_MAX_BITS {
            if let Some(small) = n.to_u64() {
                let operation = self.inner.operation();
                debug!(%operation, input = small, "Using u64 fast path");
                return Ok(BigInt::from(Self::calculate_small(operation, small)));
            }
        }

        self.inner.calculate_core(observer, n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn operation(&self) -> Operation {
        self.inner.operation()
    }
}
