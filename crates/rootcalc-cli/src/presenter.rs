//! CLI result presenter.

use num_bigint::BigInt;

use rootcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_result};
use crate::ui::{print_error, print_header};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    radix: u32,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, radix: u32) -> Self {
        Self {
            verbose,
            quiet,
            radix,
        }
    }

    /// The line printed for a result outside quiet mode, e.g. `sqrt(16) = 4`.
    #[must_use]
    pub fn result_line(&self, result: &CalculationResult, value: &BigInt) -> String {
        format!(
            "{}({}) = {}",
            result.operation,
            format_result(&result.input, self.radix, self.verbose),
            format_result(value, self.radix, self.verbose)
        )
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, value: &BigInt, details: bool) {
        if self.quiet {
            println!("{}", value.to_str_radix(self.radix));
            return;
        }

        if details {
            println!("Algorithm: {}", result.algorithm);
            println!("Input bits: {}", format_number(result.input.bits()));
            println!("Result bits: {}", format_number(value.bits()));
            println!("Duration: {}", format_duration(result.duration));
        }

        println!("{}", self.result_line(result, value));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!();
        print_header("Timings");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<12} {:>8} bits {:>12} [{}]",
                result.algorithm,
                format_number(result.input.bits()),
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
