//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigInt;

/// Digits kept at each end of an abbreviated result.
const ABBREVIATED_EDGE: usize = 50;

/// Format a `BigInt` in `radix` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigInt, radix: u32, verbose: bool) -> String {
    let s = value.to_str_radix(radix);
    let digits = s.trim_start_matches('-').len();
    if !verbose && digits > 2 * ABBREVIATED_EDGE {
        // Only ASCII digits and '-', so byte slicing is safe
        format!(
            "{}...{} ({} digits)",
            &s[..s.len() - digits + ABBREVIATED_EDGE],
            &s[s.len() - ABBREVIATED_EDGE..],
            digits
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write results to a file, one per line, in `radix`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<'a>(
    path: &str,
    values: impl IntoIterator<Item = &'a BigInt>,
    radix: u32,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for value in values {
        writeln!(file, "{}", value.to_str_radix(radix))?;
    }
    file.flush()
}
