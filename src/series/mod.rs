//! FX time-series requests.

mod assemble;
mod fetch;
mod params;
mod wire;

pub use params::{FxFunction, OutputSize};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::{DateRange, FxClient, FxError, QuoteSeries, SeriesResponse};
use crate::export::export_csv;
use assemble::{assemble_series, split_envelope};
use fetch::fetch_series_body;

/// A builder for fetching the quote series of one currency pair.
///
/// Each `fetch*` call issues exactly one GET request. There is no retry; any
/// failure is returned as is.
///
/// # Example
///
/// ```no_run
/// # use avfx_rs::FxClient;
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FxClient::from_env()?;
/// let series = client
///     .series("USD", "EUR")
///     .between(
///         NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
///     )
///     .fetch()
///     .await?;
/// println!("{} days", series.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    #[doc(hidden)]
    pub(crate) client: FxClient,
    #[doc(hidden)]
    pub(crate) from_symbol: String,
    #[doc(hidden)]
    pub(crate) to_symbol: String,
    #[doc(hidden)]
    pub(crate) function: FxFunction,
    #[doc(hidden)]
    pub(crate) output_size: OutputSize,
    #[doc(hidden)]
    pub(crate) range: Option<DateRange>,
}

impl SeriesBuilder {
    /// Creates a new `SeriesBuilder` for the `from`/`to` pair.
    ///
    /// Surrounding whitespace is stripped from both symbols; the trimmed form is
    /// what goes on the wire and into exported file names.
    pub fn new(client: &FxClient, from_symbol: impl Into<String>, to_symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            from_symbol: from_symbol.into().trim().to_string(),
            to_symbol: to_symbol.into().trim().to_string(),
            function: FxFunction::default(),
            output_size: OutputSize::default(),
            range: None,
        }
    }

    /// Sets the provider function. (Default: `FX_DAILY`)
    pub fn function(mut self, function: FxFunction) -> Self {
        self.function = function;
        self
    }

    /// Sets the output size. (Default: `full`)
    pub fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Keep only dates in `start..=end`. Without a range every date is returned.
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range(DateRange::new(start, end))
    }

    /// Keep only dates inside `range` (inclusive). Replaces any earlier `between`.
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Fetches the series, filtered to the configured range.
    ///
    /// # Errors
    ///
    /// See [`SeriesBuilder::fetch_full`].
    pub async fn fetch(self) -> Result<QuoteSeries, FxError> {
        Ok(self.fetch_full().await?.series)
    }

    /// Fetches the series together with the provider's metadata.
    ///
    /// # Errors
    ///
    /// - [`FxError::Config`] if either symbol is empty.
    /// - [`FxError::Http`] / [`FxError::Status`] if the request fails.
    /// - [`FxError::Schema`] if the body lacks the series object.
    /// - [`FxError::Data`] if a series key is not a `YYYY-MM-DD` date.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(from = %self.from_symbol, to = %self.to_symbol))
    )]
    pub async fn fetch_full(self) -> Result<SeriesResponse, FxError> {
        non_empty(&self.from_symbol, "from symbol")?;
        non_empty(&self.to_symbol, "to symbol")?;
        let (from, to) = (self.from_symbol.as_str(), self.to_symbol.as_str());

        let body =
            fetch_series_body(&self.client, from, to, self.function, self.output_size).await?;
        let (meta, entries) = split_envelope(&body, self.function.series_key())?;
        let series = assemble_series(entries, self.range.as_ref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(entries = series.len(), "series assembled");

        Ok(SeriesResponse { meta, series })
    }

    /// Fetches the series and writes it to `<out_dir>/<from>-<to>.csv`.
    ///
    /// Nothing is written if the fetch fails. Returns the absolute path of the file.
    pub async fn fetch_to_csv(self, out_dir: impl AsRef<Path>) -> Result<PathBuf, FxError> {
        let from = self.from_symbol.clone();
        let to = self.to_symbol.clone();
        let series = self.fetch().await?;
        export_csv(&series, &from, &to, out_dir)
    }
}

fn non_empty(symbol: &str, what: &str) -> Result<(), FxError> {
    if symbol.is_empty() {
        return Err(FxError::Config(format!("{what} must not be empty")));
    }
    Ok(())
}
