//! JSON-lines dump of Newton iteration records for `--trace`.
//!
//! Values are written as decimal strings so that no precision is lost.
//! Records of jobs that ran in parallel may interleave.

use std::io::{self, Write};

use serde_json::{json, Value};

use rootcalc_core::observer::TraceRecord;

/// Convert one record to a JSON object.
#[must_use]
pub fn record_to_json(record: &TraceRecord) -> Value {
    match record {
        TraceRecord::Seed {
            operation,
            bit_length,
            guess,
        } => json!({
            "event": "seed",
            "operation": operation.as_str(),
            "w": bit_length,
            "x0": guess.to_string(),
        }),
        TraceRecord::Step {
            operation,
            index,
            value,
        } => json!({
            "event": "step",
            "operation": operation.as_str(),
            "index": index,
            "x": value.to_string(),
        }),
        TraceRecord::Converged {
            operation,
            root,
            rejected,
        } => json!({
            "event": "converged",
            "operation": operation.as_str(),
            "root": root.to_string(),
            "next": rejected.to_string(),
        }),
        TraceRecord::Negate { operation } => json!({
            "event": "negate",
            "operation": operation.as_str(),
        }),
    }
}

/// Write records to `out`, one JSON object per line.
pub fn write_records(
    out: &mut impl Write,
    records: impl IntoIterator<Item = TraceRecord>,
) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, &record_to_json(&record))?;
        writeln!(out)?;
    }
    out.flush()
}

/// Write records to the file at `path`.
pub fn write_trace_file(
    path: &str,
    records: impl IntoIterator<Item = TraceRecord>,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_records(&mut file, records)
}
