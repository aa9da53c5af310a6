//! GMP-based reference calculators using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled. These exist to
//! cross-check the Newton implementations, not to replace them.

use num_bigint::BigInt;
use num_traits::Signed;
use rug::Integer;

use crate::calculator::{CoreCalculator, RootError};
use crate::observer::TraceObserver;
use crate::operation::Operation;

/// Calculator delegating one operation to GMP.
pub struct GmpCalculator {
    operation: Operation,
}

impl GmpCalculator {
    /// Create a GMP calculator for `operation`.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }
}

fn to_rug(n: &BigInt) -> Result<Integer, RootError> {
    Integer::from_str_radix(&n.to_str_radix(16), 16).map_err(|e| RootError::Parse(e.to_string()))
}

fn from_rug(n: &Integer) -> Result<BigInt, RootError> {
    BigInt::parse_bytes(n.to_string_radix(16).as_bytes(), 16)
        .ok_or_else(|| RootError::Parse(format!("invalid GMP output: {n}")))
}

impl CoreCalculator for GmpCalculator {
    fn calculate_core(
        &self,
        _observer: &dyn TraceObserver,
        n: &BigInt,
    ) -> Result<BigInt, RootError> {
        // GMP panics on these, so reject them first
        match self.operation {
            Operation::Log2 if !n.is_positive() => {
                return Err(RootError::domain(self.operation, n));
            }
            Operation::Sqrt if n.is_negative() => {
                return Err(RootError::domain(self.operation, n));
            }
            _ => {}
        }

        let x = to_rug(n)?;
        match self.operation {
            Operation::Log2 => {
                let bits = u64::try_from(x.significant_bits())
                    .map_err(|e| RootError::Parse(e.to_string()))?;
                Ok(BigInt::from(bits - 1))
            }
            // mpz_sqrt truncates; mpz_root truncates toward zero for odd roots
            Operation::Sqrt => from_rug(&x.sqrt()),
            Operation::Cbrt => from_rug(&x.root(3)),
        }
    }

    fn name(&self) -> &str {
        match self.operation {
            Operation::Log2 => "GmpLog2",
            Operation::Sqrt => "GmpSqrt",
            Operation::Cbrt => "GmpCbrt",
        }
    }

    fn operation(&self) -> Operation {
        self.operation
    }
}
