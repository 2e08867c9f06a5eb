//! CLI argument definitions for stockdeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | Fetch profile, price change, intraday chart, and news for one symbol |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Exit non-zero when any provider region failed |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Single-symbol stock dashboard over independent market-data and news
/// providers.
#[derive(Debug, Parser)]
#[command(
    name = "stockdeck",
    author,
    version,
    about = "Single-symbol stock dashboard CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat any failed provider region as a failure (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch all four dashboard regions for one ticker symbol.
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ticker symbol, e.g. AAPL.
    pub symbol: String,

    /// Compose the chart view with the dark palette.
    #[arg(long, default_value_t = false)]
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
