//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use num_bigint::BigInt;
use tracing::debug;

use rootcalc_core::calculator::{Calculator, RootError};
use rootcalc_core::observer::TraceObserver;
use rootcalc_core::observers::NoOpObserver;
use rootcalc_core::options::Options;
use rootcalc_core::verify;

use crate::interfaces::CalculationResult;

/// Apply every calculator to every input.
///
/// Results come back input-major, in the order of `inputs` then `calculators`.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    inputs: &[BigInt],
    opts: &Options,
) -> Vec<CalculationResult> {
    execute_calculations_with_observer(calculators, inputs, opts, &NoOpObserver)
}

/// Apply every calculator to every input, reporting iterations to `observer`.
pub fn execute_calculations_with_observer(
    calculators: &[Arc<dyn Calculator>],
    inputs: &[BigInt],
    opts: &Options,
    observer: &dyn TraceObserver,
) -> Vec<CalculationResult> {
    let jobs: Vec<(&BigInt, &Arc<dyn Calculator>)> = inputs
        .iter()
        .flat_map(|n| calculators.iter().map(move |calc| (n, calc)))
        .collect();

    if jobs.len() == 1 {
        // Single job: run directly
        let (n, calc) = jobs[0];
        return vec![run_one(calc.as_ref(), n, opts, observer)];
    }

    // Multiple jobs: run in parallel using rayon
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    debug!(jobs = jobs.len(), "Running calculations in parallel");
    jobs.into_par_iter()
        .map(|(n, calc)| run_one(calc.as_ref(), n, opts, observer))
        .collect()
}

fn run_one(
    calc: &dyn Calculator,
    n: &BigInt,
    opts: &Options,
    observer: &dyn TraceObserver,
) -> CalculationResult {
    let start = Instant::now();
    let outcome = calc.calculate(observer, n, opts).and_then(|value| {
        if opts.verify {
            verify::check(calc.operation(), n, &value)?;
        }
        Ok(value)
    });
    let duration = start.elapsed();

    CalculationResult {
        algorithm: calc.name().to_string(),
        operation: calc.operation(),
        input: n.clone(),
        outcome,
        duration,
    }
}

/// Analyze results: return the first error, and require that calculators
/// performing the same operation on the same input agree.
pub fn analyze_results(results: &[CalculationResult]) -> Result<(), RootError> {
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone());
    }

    for (i, a) in results.iter().enumerate() {
        for b in &results[i + 1..] {
            if a.operation != b.operation || a.input != b.input {
                continue;
            }
            if let (Ok(x), Ok(y)) = (&a.outcome, &b.outcome) {
                if x != y {
                    return Err(RootError::Mismatch {
                        operation: b.operation,
                        input: b.input.clone(),
                        result: y.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}
