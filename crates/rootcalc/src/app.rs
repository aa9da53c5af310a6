//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use tracing::info;

use rootcalc_cli::output::write_to_file;
use rootcalc_cli::presenter::CLIResultPresenter;
use rootcalc_cli::ui::{print_header, print_warning};
use rootcalc_core::observer::TraceSubject;
use rootcalc_core::observers::{ChannelObserver, LoggingObserver};
use rootcalc_core::registry::DefaultFactory;
use rootcalc_core::{parse_integer, RootError};
use rootcalc_orchestration::calculator_selection::get_calculators_to_run;
use rootcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};
use rootcalc_orchestration::orchestrator::{
    analyze_results, execute_calculations_with_observer,
};

use crate::config::AppConfig;
use crate::trace::write_trace_file;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        rootcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

/// Parse every input in the configured radix.
pub fn parse_inputs(config: &AppConfig) -> Result<Vec<BigInt>, RootError> {
    config
        .inputs
        .iter()
        .map(|text| parse_integer(text, config.radix))
        .collect()
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let inputs = parse_inputs(config)?;

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.op, &factory)?;

    let subject = TraceSubject::new();
    if config.verbose {
        subject.register(Arc::new(LoggingObserver::new(opts.log_value_bits)));
    }
    let trace_channel = config.trace.as_ref().map(|_| crossbeam_channel::unbounded());
    if let Some((tx, _)) = &trace_channel {
        subject.register(Arc::new(ChannelObserver::new(tx.clone())));
    }

    info!(
        inputs = inputs.len(),
        calculators = calculators.len(),
        "Starting calculations"
    );
    let results = execute_calculations_with_observer(&calculators, &inputs, &opts, &subject);

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.radix);
    if config.details && !config.quiet {
        print_header(&full_version());
    }
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(result, value, config.details),
            Err(e) => presenter.present_error(&e.to_string()),
        }
    }

    // Present timings if multiple
    if config.details && results.len() > 1 {
        presenter.present_comparison(&results);
    }

    if let (Some(path), Some((_, rx))) = (&config.trace, &trace_channel) {
        write_trace_file(path, rx.try_iter())
            .with_context(|| format!("failed to write trace {path}"))?;
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if results.iter().all(|r| r.outcome.is_err()) {
            print_warning("no successful results to write");
        }
        write_to_file(path, results.iter().filter_map(CalculationResult::value), config.radix)
            .with_context(|| format!("failed to write {path}"))?;
    }

    let failed = results.iter().filter(|r| r.outcome.is_err()).count();
    analyze_results(&results).with_context(|| {
        if failed > 0 {
            format!("{failed} of {} calculations failed", results.len())
        } else {
            "calculators disagree".to_string()
        }
    })
}
