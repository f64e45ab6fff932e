//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexport",
    bin_name = "hexport",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Ports-and-adapters order demo plus a graceful-shutdown server",
    long_about = "Hexport demonstrates two small patterns: an order core that \
                  depends only on an abstract store (hexagonal architecture), \
                  and an HTTP server that drains in-flight work before exit.",
    after_help = "EXAMPLES:\n\
        \x20 hexport place-order\n\
        \x20 hexport place-order --adapter mock\n\
        \x20 hexport serve\n\
        \x20 hexport serve --host 127.0.0.1 --port 8080",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the order wiring demonstration.
    #[command(
        visible_alias = "order",
        about = "Place demo orders through injected store adapters",
        after_help = "EXAMPLES:\n\
            \x20 hexport place-order                    # both variants, like the demo\n\
            \x20 hexport place-order --adapter database\n\
            \x20 hexport place-order --adapter mock"
    )]
    PlaceOrder(PlaceOrderArgs),

    /// Start the slow-work HTTP server.
    #[command(
        about = "Serve GET /work and drain gracefully on termination",
        after_help = "EXAMPLES:\n\
            \x20 hexport serve\n\
            \x20 hexport serve --host 127.0.0.1 --port 8080\n\
            \x20 kill -TERM <pid>   # triggers the drain sequence"
    )]
    Serve(ServeArgs),
}

// ── place-order ───────────────────────────────────────────────────────────────

/// Arguments for `hexport place-order`.
#[derive(Debug, Args)]
pub struct PlaceOrderArgs {
    /// Which store variant to inject into the order.
    #[arg(
        short = 'a',
        long = "adapter",
        value_name = "ADAPTER",
        value_enum,
        default_value = "both",
        help = "Store adapter to wire into the order"
    )]
    pub adapter: AdapterKind,
}

/// Selectable store variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AdapterKind {
    /// The database-backed stand-in.
    Database,
    /// The console-logging mock.
    Mock,
    /// One order through each, like the original demonstration.
    Both,
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database => write!(f, "database"),
            Self::Mock => write!(f, "mock"),
            Self::Both => write!(f, "both"),
        }
    }
}

// ── serve ─────────────────────────────────────────────────────────────────────

/// Arguments for `hexport serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(
        long = "host",
        value_name = "HOST",
        default_value = "0.0.0.0",
        help = "Address to bind"
    )]
    pub host: String,

    /// Port to bind.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = 3000,
        help = "Port to bind"
    )]
    pub port: u16,
}

// ── tests ─────────────────────────────────────────────────────────────────────
