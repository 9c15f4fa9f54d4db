//! Core components of the `avfx-rs` client.
//!
//! - The [`FxClient`] and its builder.
//! - The [`FxError`] type and its [`ErrorKind`] categories.
//! - The quote data model ([`QuoteSeries`], [`QuoteRecord`], [`DateRange`]).

/// The client (`FxClient`), builder, and configuration.
pub mod client;
/// The error type (`FxError`) for the crate.
pub mod error;
/// Quote data model shared by fetching and exporting.
pub mod models;

pub use client::{API_KEY_ENV, FxClient, FxClientBuilder};
pub use error::{ErrorKind, FxError};
pub use models::{
    DateRange, MISSING_SENTINEL, QuoteRecord, QuoteSeries, QuoteValue, SeriesMeta, SeriesResponse,
};
