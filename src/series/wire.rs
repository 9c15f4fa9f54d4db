use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::core::{QuoteRecord, QuoteValue, SeriesMeta};

/* Top-level FX time-series response. Only the series object is required;
everything else is read best-effort and a type mismatch reads as absent. */

const META_KEY: &str = "Meta Data";
const PROVIDER_MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

pub(crate) struct FxEnvelope {
    pub(crate) meta: Option<SeriesMeta>,
    pub(crate) provider_message: Option<String>,
    pub(crate) rest: Map<String, Value>,
}

impl FxEnvelope {
    pub(crate) fn from_map(mut rest: Map<String, Value>) -> Self {
        let meta = rest
            .remove(META_KEY)
            .and_then(|node| MetaNode::deserialize(node).ok())
            .map(SeriesMeta::from);
        // Message the provider sends instead of data (bad symbol, rate limit, premium endpoint).
        let provider_message = PROVIDER_MESSAGE_KEYS
            .iter()
            .find_map(|k| rest.get(*k).and_then(Value::as_str))
            .map(str::to_string);
        Self {
            meta,
            provider_message,
            rest,
        }
    }
}

/* Daily meta numbers its fields one past weekly/monthly because of "4. Output Size". */

#[derive(Deserialize)]
struct MetaNode {
    #[serde(rename = "1. Information", default)]
    information: Option<RawText>,
    #[serde(rename = "2. From Symbol", default)]
    from_symbol: Option<RawText>,
    #[serde(rename = "3. To Symbol", default)]
    to_symbol: Option<RawText>,
    #[serde(rename = "4. Output Size", default)]
    output_size: Option<RawText>,
    #[serde(rename = "5. Last Refreshed", alias = "4. Last Refreshed", default)]
    last_refreshed: Option<RawText>,
    #[serde(rename = "6. Time Zone", alias = "5. Time Zone", default)]
    time_zone: Option<RawText>,
}

fn to_text(raw: Option<RawText>) -> Option<String> {
    match to_value(raw) {
        QuoteValue::Present(s) => Some(s),
        QuoteValue::Missing => None,
    }
}

impl From<MetaNode> for SeriesMeta {
    fn from(m: MetaNode) -> Self {
        SeriesMeta {
            information: to_text(m.information),
            from_symbol: to_text(m.from_symbol),
            to_symbol: to_text(m.to_symbol),
            output_size: to_text(m.output_size),
            last_refreshed: to_text(m.last_refreshed),
            time_zone: to_text(m.time_zone),
        }
    }
}

/* Per-date quote object */

#[derive(Deserialize, Default)]
pub(crate) struct RawQuote {
    #[serde(rename = "1. open", default)]
    open: Option<RawText>,
    #[serde(rename = "2. high", default)]
    high: Option<RawText>,
    #[serde(rename = "3. low", default)]
    low: Option<RawText>,
    #[serde(rename = "4. close", default)]
    close: Option<RawText>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
    Other(IgnoredAny),
}

fn to_value(raw: Option<RawText>) -> QuoteValue {
    match raw {
        Some(RawText::Text(s)) => QuoteValue::Present(s),
        Some(RawText::Number(n)) => QuoteValue::Present(n.to_string()),
        Some(RawText::Other(_)) | None => QuoteValue::Missing,
    }
}

impl From<RawQuote> for QuoteRecord {
    fn from(r: RawQuote) -> Self {
        QuoteRecord {
            open: to_value(r.open),
            high: to_value(r.high),
            low: to_value(r.low),
            close: to_value(r.close),
        }
    }
}

/// Decode one series entry. Anything that is not an object yields an all-missing record.
pub(crate) fn decode_quote(node: Value) -> Result<QuoteRecord, serde_json::Error> {
    let raw = match node {
        Value::Object(_) => RawQuote::deserialize(node)?,
        _ => RawQuote::default(),
    };
    Ok(raw.into())
}
