use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::wire::{FxEnvelope, decode_quote};
use crate::core::{DateRange, FxError, QuoteSeries, SeriesMeta};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pull the series object out of the response body.
///
/// Only a non-object body or a missing/non-object series value is a schema error.
pub(crate) fn split_envelope(
    body: &str,
    series_key: &str,
) -> Result<(Option<SeriesMeta>, Map<String, Value>), FxError> {
    let root: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| FxError::Schema(format!("response is not a JSON object: {e}")))?;
    let mut envelope = FxEnvelope::from_map(root);

    match envelope.rest.remove(series_key) {
        Some(Value::Object(entries)) => Ok((envelope.meta, entries)),
        Some(_) => Err(FxError::Schema(format!("'{series_key}' is not a JSON object"))),
        None => {
            let msg = format!("no '{series_key}' data found in the response");
            Err(FxError::Schema(match envelope.provider_message {
                Some(provider) => format!("{msg}: {provider}"),
                None => msg,
            }))
        }
    }
}

/// Strict `YYYY-MM-DD`; chrono alone would also accept unpadded months and days.
pub(crate) fn parse_date_key(key: &str) -> Result<NaiveDate, FxError> {
    let well_formed = key.len() == 10
        && key.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(FxError::Data(format!(
            "series key {key:?} is not a YYYY-MM-DD date"
        )));
    }
    NaiveDate::parse_from_str(key, DATE_FORMAT)
        .map_err(|e| FxError::Data(format!("series key {key:?} is not a valid date: {e}")))
}

/// Every key is parsed before filtering, so one bad key fails the whole series.
pub(crate) fn assemble_series(
    entries: Map<String, Value>,
    range: Option<&DateRange>,
) -> Result<QuoteSeries, FxError> {
    let mut out = Vec::with_capacity(entries.len());
    for (key, node) in entries {
        let date = parse_date_key(&key)?;
        let record = decode_quote(node)
            .map_err(|e| FxError::Data(format!("quote for {date}: {e}")))?;
        out.push((date, record));
    }

    let mut series = QuoteSeries::from_unique(out);
    if let Some(range) = range {
        series.retain_range(range);
    }
    Ok(series)
}
