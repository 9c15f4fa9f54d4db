//! CSV export of a quote series.
//!
//! The file layout is fixed: a `Date,Open,High,Low,Close` header, then one
//! unquoted row per entry in series order, `\n`-terminated. Missing fields are
//! written as [`MISSING_SENTINEL`](crate::core::MISSING_SENTINEL).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::{FxError, QuoteSeries};

pub const HEADER: [&str; 5] = ["Date", "Open", "High", "Low", "Close"];

/// `<from>-<to>.csv`
pub fn file_name(from_symbol: &str, to_symbol: &str) -> String {
    format!("{from_symbol}-{to_symbol}.csv")
}

/// Write `series` as CSV to any writer.
pub fn write_csv<W: Write>(series: &QuoteSeries, writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for (date, q) in series.iter() {
        wtr.write_record([
            date.format("%Y-%m-%d").to_string().as_str(),
            q.open.as_str(),
            q.high.as_str(),
            q.low.as_str(),
            q.close.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `series` to `<out_dir>/<from>-<to>.csv`, creating `out_dir` if needed.
///
/// An existing file of the same name is overwritten. Returns the absolute path written.
///
/// # Errors
///
/// Returns [`FxError::Export`] if the directory cannot be created or the file cannot be written.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(series, out_dir), err, fields(rows = series.len()))
)]
pub fn export_csv(
    series: &QuoteSeries,
    from_symbol: &str,
    to_symbol: &str,
    out_dir: impl AsRef<Path>,
) -> Result<PathBuf, FxError> {
    let dir = out_dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| FxError::export(dir, e))?;

    let path = std::path::absolute(dir.join(file_name(from_symbol, to_symbol)))
        .map_err(|e| FxError::export(dir, e))?;

    let file = fs::File::create(&path).map_err(|e| FxError::export(&path, e))?;
    write_csv(series, file).map_err(|e| FxError::export(&path, e.into()))?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), "series exported");

    Ok(path)
}
