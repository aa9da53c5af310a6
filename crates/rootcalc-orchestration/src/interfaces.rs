//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigInt;

use rootcalc_core::calculator::RootError;
use rootcalc_core::Operation;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful calculation.
    fn present_result(&self, result: &CalculationResult, value: &BigInt, details: bool);

    /// Present a timing summary of several calculations.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of applying one calculator to one input.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// Operation performed.
    pub operation: Operation,
    /// The input.
    pub input: BigInt,
    /// The computed value or a structured error.
    pub outcome: Result<BigInt, RootError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&BigInt> {
        self.outcome.as_ref().ok()
    }
}
