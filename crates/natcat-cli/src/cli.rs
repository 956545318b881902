//! CLI argument definitions for natcat.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `events` | Recent earthquakes with magnitude counts |
//! | `zones` | Monitored risk zones |
//! | `alerts` | Event/zone exposure alerts, largest limit first |
//! | `summary` | Deduplicated exposure totals |
//! | `report` | Events, alerts and summary in one payload |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--config` | `natcat.toml` | Configuration file |
//! | `--zones` | bundled | Zone catalog JSON file |
//! | `--events-file` | none | Read events from a GeoJSON snapshot |
//! | `--days` | `7` | Lookback window in days |
//! | `--min-magnitude` | `4.0` | Minimum event magnitude |
//!
//! # Examples
//!
//! ```bash
//! natcat summary --pretty
//! natcat alerts --days 30 --min-magnitude 5.5 --format table
//! natcat report --events-file snapshot.geojson --zones book.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Seismic exposure monitor for catastrophe treaty books.
#[derive(Debug, Parser)]
#[command(
    name = "natcat",
    author,
    version,
    about = "Seismic exposure monitor for catastrophe treaty books",
    long_about = "natcat pulls recent earthquakes from the USGS event service, matches them \
against circular treaty risk zones and reports which limits are exposed.\n\
\n\
Use 'natcat <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(long, short = 'q', global = true, default_value_t = false)]
    pub quiet: bool,

    /// Configuration file used instead of `./natcat.toml`.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Zone catalog JSON file; overrides `zones.path`.
    #[arg(long, global = true, value_name = "FILE")]
    pub zones: Option<PathBuf>,

    /// Read events from a GeoJSON snapshot instead of the live feed.
    #[arg(long, global = true, value_name = "FILE")]
    pub events_file: Option<PathBuf>,

    /// Lookback window in days (1-365); overrides `feed.lookback_days`.
    #[arg(long, global = true)]
    pub days: Option<u32>,

    /// Minimum event magnitude; overrides `feed.min_magnitude`.
    #[arg(long, global = true)]
    pub min_magnitude: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table for terminal display.
    Table,
    /// Single JSON envelope.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recent earthquakes, largest first.
    ///
    /// # Examples
    ///
    ///   natcat events
    ///   natcat events --limit 10 --format table
    Events(EventsArgs),

    /// List monitored risk zones.
    ///
    /// # Examples
    ///
    ///   natcat zones
    ///   natcat zones --region JP
    Zones(ZonesArgs),

    /// List exposure alerts ordered by zone limit.
    ///
    /// # Examples
    ///
    ///   natcat alerts
    ///   natcat alerts --event us7000abcd
    Alerts(AlertsArgs),

    /// Aggregate exposure across all alerts.
    Summary,

    /// Events, zones at risk, ranked alerts and summary in one payload.
    Report,
}

#[derive(Debug, Clone, Args)]
pub struct EventsArgs {
    /// Return at most this many events.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct ZonesArgs {
    /// Only zones in this region code.
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct AlertsArgs {
    /// Only alerts triggered by this event id.
    #[arg(long)]
    pub event: Option<String>,

    /// Return at most this many alerts.
    #[arg(long)]
    pub limit: Option<usize>,
}
