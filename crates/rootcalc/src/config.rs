//! Application configuration from CLI flags and environment.

use clap::Parser;

use rootcalc_core::constants::DEFAULT_RADIX;
use rootcalc_core::options::Options;

/// RootCalc-rs — exact integer square roots, cube roots, and log2 of big integers.
#[derive(Parser, Debug)]
#[command(name = "rootcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Integers to operate on (comma-separated or repeated; `_` separators allowed).
    #[arg(
        env = "ROOTCALC_INPUT",
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub inputs: Vec<String>,

    /// Operation to run: sqrt, cbrt, log2, a comma-separated list, or all.
    #[arg(long, default_value = "all", env = "ROOTCALC_OP")]
    pub op: String,

    /// Radix for inputs and printed results (2-36).
    #[arg(long, default_value_t = DEFAULT_RADIX, value_parser = clap::value_parser!(u32).range(2..=36))]
    pub radix: u32,

    /// Check every result against its defining inequality.
    #[arg(long)]
    pub verify: bool,

    /// Always run the Newton iteration, even for inputs below 2^64.
    #[arg(long)]
    pub no_fast_path: bool,

    /// Verbose output: full-length values and iteration logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the results).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path (one result per line).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write every Newton iteration record to FILE as JSON lines.
    #[arg(long, value_name = "FILE")]
    pub trace: Option<String>,

    /// Largest iterate (in bits) logged in full with --verbose (0 = default).
    #[arg(long, default_value = "0")]
    pub log_value_bits: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether the Newton iterations are being observed (`--verbose` or `--trace`).
    #[must_use]
    pub fn traces_iterations(&self) -> bool {
        self.verbose || self.trace.is_some()
    }

    /// Calculation options derived from the flags.
    ///
    /// The fast path skips the iteration entirely, so it is off whenever the
    /// iteration is observed.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            fast_path: !self.no_fast_path && !self.traces_iterations(),
            verify: self.verify,
            log_value_bits: self.log_value_bits,
        }
        .normalize()
    }
}
