//! Command-line arguments for `avfx`.
//!
//! ```bash
//! avfx --from USD --to EUR --start 2002-01-01 --end 2020-01-01
//! avfx --from EUR --to JPY --start 2024-01-01 --end 2024-03-31 --output-size compact --print
//! ```
//!
//! The API key comes from `--api-key` or, when omitted, `ALPHA_VANTAGE_API_KEY`.

use std::path::PathBuf;

use avfx_rs::{FxFunction, OutputSize};
use chrono::NaiveDate;
use clap::Parser;
use url::Url;

/// Download an FX time series from Alpha Vantage into `<out-dir>/<FROM>-<TO>.csv`.
#[derive(Debug, Parser)]
#[command(name = "avfx", author, version, about)]
pub struct Cli {
    /// Base currency symbol (e.g. USD).
    #[arg(long = "from")]
    pub from_symbol: String,

    /// Quote currency symbol (e.g. EUR).
    #[arg(long = "to")]
    pub to_symbol: String,

    /// First date to keep, inclusive (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub start: NaiveDate,

    /// Last date to keep, inclusive (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub end: NaiveDate,

    #[arg(long, value_enum, default_value_t = FxFunction::Daily)]
    pub function: FxFunction,

    #[arg(long, value_enum, default_value_t = OutputSize::Full)]
    pub output_size: OutputSize,

    /// Directory the CSV is written to; created if missing.
    #[arg(long, default_value = "temp")]
    pub out_dir: PathBuf,

    /// API key. Falls back to the ALPHA_VANTAGE_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the query endpoint.
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Overall request timeout in seconds. Default: none.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write rows in ascending date order instead of provider order.
    #[arg(long)]
    pub chronological: bool,

    /// Print the filtered rows to stdout.
    #[arg(long)]
    pub print: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
