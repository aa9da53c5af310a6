//! Calculator selection logic.

use std::sync::Arc;

use rootcalc_core::calculator::{Calculator, RootError};
use rootcalc_core::registry::CalculatorFactory;

/// Get calculators to run for an `--op` value.
///
/// `all` selects every available calculator; otherwise the value is a
/// comma-separated list of calculator names.
pub fn get_calculators_to_run(
    op: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, RootError> {
    match op.trim() {
        "all" => {
            let names = factory.available();
            let mut calcs = Vec::new();
            for name in names {
                calcs.push(factory.get(name)?);
            }
            Ok(calcs)
        }
        list => {
            let mut calcs = Vec::new();
            for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                calcs.push(factory.get(name)?);
            }
            if calcs.is_empty() {
                return Err(RootError::Config("no operation selected".into()));
            }
            Ok(calcs)
        }
    }
}
