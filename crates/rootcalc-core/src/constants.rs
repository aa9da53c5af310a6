//! Constants for the root calculators and the binary.

/// Largest operand bit length served by the `u64` fast path.
pub const FAST_PATH_MAX_BITS: u64 = 64;

/// Default cap (in bits) on values written out in full by `LoggingObserver`.
///
/// Larger iterates are logged by bit length only.
pub const DEFAULT_LOG_VALUE_BITS: u64 = 256;

/// Radix used when none is given.
pub const DEFAULT_RADIX: u32 = 10;

/// Exit codes for the `rootcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An input was outside the domain of the requested operation.
    pub const ERROR_DOMAIN: i32 = 2;
    /// A result failed verification or calculators disagreed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
