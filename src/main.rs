//! civic-audit CLI entry point.

use std::process::ExitCode;

use civic_audit::cli::{Cli, CommandContext, CommandDispatcher};
use civic_audit::config::find_project_root;
use civic_audit::ui::{should_use_colors, OutputMode, TerminalUI};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("civic_audit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("civic_audit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("civic-audit starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let use_color = !cli.no_color && should_use_colors();

    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_default();
            find_project_root(&cwd).unwrap_or(cwd)
        }
    };

    let mut ui = TerminalUI::new(output_mode, use_color);
    let context = CommandContext::new(project_root).with_config(cli.config.clone());
    let dispatcher = CommandDispatcher::new(context);

    ExitCode::from(dispatcher.run(&cli, &mut ui) as u8)
}
