//! Wisp CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wisp::cli::{Cli, CommandDispatcher, Commands};
use wisp::ui::create_ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("wisp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wisp=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Wisp starting with args: {:?}", cli);

    // --no-color rides the NO_COLOR convention so console picks it up too
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Only an explicit flag forces non-interactive here; create_ui also
    // degrades when stdout is not a terminal
    let is_interactive = match &cli.command {
        Some(Commands::Console(args)) => !args.non_interactive,
        _ => true,
    };

    let mut ui = create_ui(is_interactive);
    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
