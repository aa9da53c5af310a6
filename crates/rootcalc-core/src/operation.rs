//! The integer operations supported by the calculators.

use std::fmt;
use std::str::FromStr;

use crate::calculator::RootError;

/// One of the three integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Floor base-2 logarithm.
    Log2,
    /// Floor square root.
    Sqrt,
    /// Cube root truncated toward zero.
    Cbrt,
}

impl Operation {
    /// Every operation, leaves first.
    pub const ALL: [Operation; 3] = [Operation::Log2, Operation::Sqrt, Operation::Cbrt];

    /// Short lowercase name, as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Log2 => "log2",
            Operation::Sqrt => "sqrt",
            Operation::Cbrt => "cbrt",
        }
    }

    /// Whether the operation is defined for every integer.
    #[must_use]
    pub fn is_total(self) -> bool {
        matches!(self, Operation::Cbrt)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log2" | "ilog2" => Ok(Operation::Log2),
            "sqrt" | "isqrt" => Ok(Operation::Sqrt),
            "cbrt" | "icbrt" => Ok(Operation::Cbrt),
            _ => Err(RootError::Config(format!("unknown operation: {s}"))),
        }
    }
}
