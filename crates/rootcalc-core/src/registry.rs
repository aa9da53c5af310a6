//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, RootCalculator, RootError};
use crate::cbrt::NewtonCbrt;
use crate::log2::BitLength;
use crate::operation::Operation;
use crate::sqrt::NewtonSqrt;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, RootError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, RootError> {
        #[cfg(feature = "gmp")]
        {
            if let Some(op) = name.strip_prefix("gmp-") {
                let operation: Operation = op.parse()?;
                let core = Arc::new(crate::calculator_gmp::GmpCalculator::new(operation));
                return Ok(Arc::new(RootCalculator::new(core)));
            }
        }

        let operation: Operation = name.parse()?;
        let calc: Arc<dyn Calculator> = match operation {
            Operation::Log2 => Arc::new(RootCalculator::new(Arc::new(BitLength::new()))),
            Operation::Sqrt => Arc::new(RootCalculator::new(Arc::new(NewtonSqrt::new()))),
            Operation::Cbrt => Arc::new(RootCalculator::new(Arc::new(NewtonCbrt::new()))),
        };
        Ok(calc)
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, RootError> {
        // Check cache first
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let calc = Self::create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        let names = vec!["log2", "sqrt", "cbrt"];
        #[cfg(feature = "gmp")]
        let names = {
            let mut names = names;
            names.extend(["gmp-log2", "gmp-sqrt", "gmp-cbrt"]);
            names
        };
        names
    }
}
