use url::Url;

use super::params::{FxFunction, OutputSize};
use crate::core::{FxClient, FxError};

pub(crate) async fn fetch_series_body(
    client: &FxClient,
    from_symbol: &str,
    to_symbol: &str,
    function: FxFunction,
    output_size: OutputSize,
) -> Result<String, FxError> {
    let mut url = client.base_query().clone();
    url.query_pairs_mut()
        .append_pair("function", function.as_str())
        .append_pair("from_symbol", from_symbol)
        .append_pair("to_symbol", to_symbol)
        .append_pair("apikey", client.api_key())
        .append_pair("outputsize", output_size.as_str());

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %redacted(&url), "requesting series");

    // reqwest errors carry the request URL, which includes the key
    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FxError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            url: redacted(&url),
        });
    }

    resp.text().await.map_err(|e| FxError::Http(e.without_url()))
}

/// `url` with the `apikey` query value masked.
pub(crate) fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "REDACTED".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut out = url.clone();
    if !pairs.is_empty() {
        out.query_pairs_mut().clear().extend_pairs(pairs);
    }
    out.to_string()
}
