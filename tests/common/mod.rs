#![allow(dead_code)]

use avfx_rs::FxClient;
use chrono::NaiveDate;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";
pub const DAILY_KEY: &str = "Time Series FX (Daily)";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, pair: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, pair, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> FxClient {
    FxClient::builder()
        .api_key(API_KEY)
        .base_query(Url::parse(&server.url("/query")).unwrap())
        .build()
        .unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Mock a `FX_DAILY` request for the pair, answering with `body`.
pub fn mock_fx_daily<'a>(server: &'a MockServer, from: &str, to: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "FX_DAILY")
            .query_param("from_symbol", from)
            .query_param("to_symbol", to)
            .query_param("apikey", API_KEY)
            .query_param("outputsize", "full");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_fx_daily_fixture<'a>(server: &'a MockServer, from: &str, to: &str) -> Mock<'a> {
    let body = fixture("fx_daily", &format!("{from}-{to}"), "json");
    mock_fx_daily(server, from, to, body)
}
