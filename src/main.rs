mod cli;

use std::process::ExitCode;
use std::time::Duration;

use avfx_rs::{ErrorKind, FxClient, FxError, export_csv};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(exit_code(&error))
        }
    }
}

async fn run(cli: Cli) -> Result<(), FxError> {
    let mut builder = FxClient::builder();
    builder = match cli.api_key {
        Some(key) => builder.api_key(key),
        None => builder.api_key_from_env(),
    };
    if let Some(url) = cli.base_url {
        builder = builder.base_query(url);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let (from, to) = (cli.from_symbol.trim(), cli.to_symbol.trim());
    let resp = client
        .series(from, to)
        .function(cli.function)
        .output_size(cli.output_size)
        .between(cli.start, cli.end)
        .fetch_full()
        .await?;

    if let Some(refreshed) = resp.meta.as_ref().and_then(|m| m.last_refreshed.as_deref()) {
        info!(last_refreshed = refreshed, "provider data");
    }

    let mut series = resp.series;
    if series.is_empty() {
        warn!(start = %cli.start, end = %cli.end, "no data available for the specified date range");
        return Ok(());
    }
    if cli.chronological {
        series.sort_by_date();
    }

    if cli.print {
        for (date, q) in series.iter() {
            println!(
                "{date}: open={} high={} low={} close={}",
                q.open, q.high, q.low, q.close
            );
        }
    }

    let path = export_csv(&series, from, to, &cli.out_dir)?;
    info!(rows = series.len(), path = %path.display(), "data saved");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// 1 and 2 belong to clap (usage errors exit with 2).
const fn exit_code(error: &FxError) -> u8 {
    match error.kind() {
        ErrorKind::Config => 3,
        ErrorKind::Fetch => 4,
        ErrorKind::Schema => 5,
        ErrorKind::Data => 6,
        ErrorKind::Export => 7,
    }
}
