//! Concrete observer implementations.

use crossbeam_channel::Sender;
use num_bigint::BigInt;
use parking_lot::Mutex;
use tracing::debug;

use crate::constants::DEFAULT_LOG_VALUE_BITS;
use crate::observer::{TraceEvent, TraceObserver, TraceRecord};

/// Observer that sends owned records through a channel (non-blocking).
///
/// Records are dropped when the channel is full.
pub struct ChannelObserver {
    sender: Sender<TraceRecord>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<TraceRecord>) -> Self {
        Self { sender }
    }
}

impl TraceObserver for ChannelObserver {
    fn on_event(&self, event: &TraceEvent<'_>) {
        let _ = self.sender.try_send(event.to_record());
    }
}

/// Observer that emits each event as a structured `tracing` event.
///
/// Values wider than `max_value_bits` are logged by bit length only.
pub struct LoggingObserver {
    max_value_bits: u64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given value size cap.
    #[must_use]
    pub fn new(max_value_bits: u64) -> Self {
        Self { max_value_bits }
    }

    fn render(&self, value: &BigInt) -> String {
        if value.bits() <= self.max_value_bits {
            value.to_string()
        } else {
            format!("<{} bits>", value.bits())
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_VALUE_BITS)
    }
}

impl TraceObserver for LoggingObserver {
    fn on_event(&self, event: &TraceEvent<'_>) {
        match *event {
            TraceEvent::Seed {
                operation,
                bit_length,
                guess,
            } => debug!(
                %operation,
                w = bit_length,
                x0 = %self.render(guess),
                "Newton seed"
            ),
            TraceEvent::Step {
                operation,
                index,
                value,
            } => debug!(
                %operation,
                index,
                x = %self.render(value),
                "Newton step"
            ),
            TraceEvent::Converged {
                operation,
                root,
                rejected,
            } => debug!(
                %operation,
                root = %self.render(root),
                next = %self.render(rejected),
                "Converged"
            ),
            TraceEvent::Negate { operation } => debug!(%operation, "Negated result"),
        }
    }
}

/// Observer that keeps every event as an owned record.
pub struct RecordingObserver {
    records: Mutex<Vec<TraceRecord>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the records so far.
    #[must_use]
    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.lock().clone()
    }

    /// Remove and return every record.
    pub fn take(&self) -> Vec<TraceRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Number of records so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceObserver for RecordingObserver {
    fn on_event(&self, event: &TraceEvent<'_>) {
        self.records.lock().push(event.to_record());
    }
}

/// Null object pattern — does nothing with events.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all events.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceObserver for NoOpObserver {
    fn on_event(&self, _event: &TraceEvent<'_>) {
        // Intentionally empty
    }
}
