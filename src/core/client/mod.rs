//! Public client surface + builder.
//! Defaults (endpoint, UA, credential env var) live in `constants`.

mod constants;

pub use constants::API_KEY_ENV;

use crate::core::FxError;
use crate::series::SeriesBuilder;
use constants::{DEFAULT_BASE_QUERY, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client, the query endpoint and the API key.
///
/// The key is resolved once, when the client is built, and reused for every request.
#[derive(Clone)]
pub struct FxClient {
    http: Client,
    base_query: Url,
    api_key: String,
}

impl fmt::Debug for FxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FxClient")
            .field("base_query", &self.base_query.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl FxClient {
    /// Create a new builder.
    pub fn builder() -> FxClientBuilder {
        FxClientBuilder::default()
    }

    /// Build a client with default settings, reading the key from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, FxError> {
        Self::builder().api_key_from_env().build()
    }

    /// Start a time-series request for the `from`/`to` currency pair.
    pub fn series(&self, from_symbol: impl Into<String>, to_symbol: impl Into<String>) -> SeriesBuilder {
        SeriesBuilder::new(self, from_symbol, to_symbol)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FxClientBuilder {
    api_key: Option<String>,
    key_from_env: bool,
    user_agent: Option<String>,
    base_query: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FxClientBuilder {
    /// Use an explicit API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self.key_from_env = false;
        self
    }

    /// Read the API key from [`API_KEY_ENV`] when `build()` runs.
    pub fn api_key_from_env(mut self) -> Self {
        self.api_key = None;
        self.key_from_env = true;
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query endpoint (e.g., `https://www.alphavantage.co/query`).
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] when no non-empty API key is available, and
    /// [`FxError::Http`] if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<FxClient, FxError> {
        let api_key = if self.key_from_env {
            std::env::var(API_KEY_ENV).ok()
        } else {
            self.api_key
        };
        let api_key = match api_key.map(|k| k.trim().to_string()) {
            Some(k) if !k.is_empty() => k,
            _ if self.key_from_env => {
                return Err(FxError::Config(format!(
                    "API key is missing: set {API_KEY_ENV}"
                )));
            }
            _ => return Err(FxError::Config("API key is missing".into())),
        };

        let base_query = match self.base_query {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FxClient {
            http,
            base_query,
            api_key,
        })
    }
}
