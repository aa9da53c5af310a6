//! RootCalc-rs — exact integer roots of big integers.

use std::io::IsTerminal;

use rootcalc_lib::{app, config, errors};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Parse CLI args first so --verbose can pick the log level
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && !rootcalc_cli::ui::is_color_disabled())
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        rootcalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
