//! avfx-rs: Alpha Vantage FX time-series client.
//!
//! Fetches the daily (or weekly/monthly) quote series of a currency pair,
//! restricts it to an inclusive date window and exports it as CSV.
//!
//! ```no_run
//! # use avfx_rs::{FxClient, DateRange};
//! # use chrono::NaiveDate;
//! # #[tokio::main]
//! # async fn main() -> Result<(), avfx_rs::FxError> {
//! let client = FxClient::from_env()?;
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2002, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//! );
//! let path = client.series("USD", "EUR").range(range).fetch_to_csv("temp").await?;
//! println!("saved to {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod export;
pub mod series;

pub use crate::core::{
    API_KEY_ENV, DateRange, ErrorKind, FxClient, FxClientBuilder, FxError, MISSING_SENTINEL,
    QuoteRecord, QuoteSeries, QuoteValue, SeriesMeta, SeriesResponse,
};
pub use export::{export_csv, write_csv};
pub use series::{FxFunction, OutputSize, SeriesBuilder};
