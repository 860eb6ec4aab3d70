//! tms - translation-management server CLI
//!
//! A command-line interface for the projects, templates, file versions and
//! permissions of a translation-management server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tms_cli::commands::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // --debug wins over RUST_LOG
    let filter = if cli.debug {
        EnvFilter::new("tms=debug,tms_cli=debug,tms_core=debug,tms_http=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = tokio::select! {
        code = commands::execute(cli) => code,
        _ = tokio::signal::ctrl_c() => tms_cli::exit_code::ExitCode::Interrupted,
    };

    std::process::exit(exit_code.as_i32());
}
