//! Observer pattern for Newton iteration tracing.
//!
//! Each algorithm exists once; tracing is a callback it invokes at the
//! seed, after every accepted iterate, at convergence, and when a negative
//! cube-root input is handled by negation.

use std::sync::Arc;

use num_bigint::BigInt;
use parking_lot::RwLock;

use crate::operation::Operation;

/// A single iteration event, borrowing the values it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// The bit length of the operand and the initial guess x0 derived from it.
    Seed {
        /// Operation being traced.
        operation: Operation,
        /// floor(log2 n).
        bit_length: u64,
        /// The initial guess x0.
        guess: &'a BigInt,
    },
    /// An accepted iterate x_index (index starts at 1).
    Step {
        /// Operation being traced.
        operation: Operation,
        /// Position of the iterate in the sequence.
        index: usize,
        /// The iterate.
        value: &'a BigInt,
    },
    /// The iteration stopped: `rejected` was not smaller than `root`.
    Converged {
        /// Operation being traced.
        operation: Operation,
        /// The converged result.
        root: &'a BigInt,
        /// The candidate that ended the loop.
        rejected: &'a BigInt,
    },
    /// The result of a negated input was negated back.
    Negate {
        /// Operation being traced.
        operation: Operation,
    },
}

impl TraceEvent<'_> {
    /// The operation this event belongs to.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match *self {
            TraceEvent::Seed { operation, .. }
            | TraceEvent::Step { operation, .. }
            | TraceEvent::Converged { operation, .. }
            | TraceEvent::Negate { operation } => operation,
        }
    }

    /// Copy the event into an owned record.
    #[must_use]
    pub fn to_record(&self) -> TraceRecord {
        match *self {
            TraceEvent::Seed {
                operation,
                bit_length,
                guess,
            } => TraceRecord::Seed {
                operation,
                bit_length,
                guess: guess.clone(),
            },
            TraceEvent::Step {
                operation,
                index,
                value,
            } => TraceRecord::Step {
                operation,
                index,
                value: value.clone(),
            },
            TraceEvent::Converged {
                operation,
                root,
                rejected,
            } => TraceRecord::Converged {
                operation,
                root: root.clone(),
                rejected: rejected.clone(),
            },
            TraceEvent::Negate { operation } => TraceRecord::Negate { operation },
        }
    }
}

/// Owned counterpart of [`TraceEvent`], for observers that keep or send events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRecord {
    Seed {
        operation: Operation,
        bit_length: u64,
        guess: BigInt,
    },
    Step {
        operation: Operation,
        index: usize,
        value: BigInt,
    },
    Converged {
        operation: Operation,
        root: BigInt,
        rejected: BigInt,
    },
    Negate {
        operation: Operation,
    },
}

/// Observer trait for receiving iteration events.
pub trait TraceObserver: Send + Sync {
    /// Receive an iteration event.
    fn on_event(&self, event: &TraceEvent<'_>);
}

/// Subject that manages a collection of observers.
pub struct TraceSubject {
    observers: RwLock<Vec<Arc<dyn TraceObserver>>>,
}

impl TraceSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn TraceObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of an event.
    pub fn notify(&self, event: &TraceEvent<'_>) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for TraceSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceObserver for TraceSubject {
    fn on_event(&self, event: &TraceEvent<'_>) {
        self.notify(event);
    }
}
