//! # Hexport CLI
//!
//! Composition root for the two demonstrations: the ports-and-adapters
//! order core and the graceful-shutdown server. Each invocation runs
//! exactly one of them; they share no state.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Dispatch to the appropriate command handler.
//! 4. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success (including a drain that timed out) |
//! |  1   | Server / system error   |
//! |  2   | Argument error          |

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod commands;
mod error;
mod logging;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own output (already user-friendly). `--help` /
            // `--version` are not errors: clap routes them to stdout with
            // exit code 0, while genuine argument errors go to stderr with
            // code 2. Honour clap's own stream/exit-code signals.
            if e.use_stderr() {
                eprint!("{}", e.render().ansi());
            } else {
                print!("{}", e.render().ansi());
            }
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Dispatch + 4. Error handling ───────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::PlaceOrder(args) => commands::place_order::execute(args, cli.global),
        Commands::Serve(args) => commands::serve::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    //
    //    Colour is disabled when stderr is not a TTY (same logic as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
