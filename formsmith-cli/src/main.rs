//! Formsmith CLI - design and check form definitions.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Invalid form or values (`check`, `validate`), or any error

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use formsmith_cli::{commands, Cli, FormsmithConfig};

const DEBUG_FILTER: &str =
    "formsmith=debug,formsmith_cli=debug,formsmith_fields=debug,formsmith_designer=debug,formsmith_forms=debug";

fn main() {
    let cli = Cli::parse();

    let config = match FormsmithConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let filter = if cli.debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let exit_code = run(cli, &config);
    std::process::exit(exit_code);
}

fn run(cli: Cli, config: &FormsmithConfig) -> i32 {
    let mut stdout = io::stdout().lock();
    match commands::run(cli.command, config, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}
