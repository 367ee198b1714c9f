//! tsc-lint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsc_lint::cli::{Cli, CommandDispatcher};
use tsc_lint::config::find_project_root;
use tsc_lint::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tsc_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsc_lint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("tsc-lint starting with args: {:?}", cli);

    let output_mode = OutputMode::from_quiet(cli.quiet);

    // Handle --no-color
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Determine project root
    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    let mut ui = create_ui(output_mode);

    let dispatcher =
        CommandDispatcher::new(project_root).with_config_override(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
