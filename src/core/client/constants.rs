//! Centralized constants for default endpoints, credentials and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("avfx-rs/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
