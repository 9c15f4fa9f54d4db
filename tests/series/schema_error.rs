use avfx_rs::{ErrorKind, FxError};

use crate::common::{client_for, date, mock_fx_daily, setup_server};

#[tokio::test]
async fn missing_series_key_is_schema_error_and_writes_nothing() {
    let server = setup_server();
    let body = r#"{"Meta Data": {"2. From Symbol": "USD"}}"#.to_string();
    let mock = mock_fx_daily(&server, "USD", "EUR", body);
    let client = client_for(&server);
    let dir = tempfile::tempdir().unwrap();

    let err = client
        .series("USD", "EUR")
        .between(date("2020-01-01"), date("2020-01-03"))
        .fetch_to_csv(dir.path())
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(!dir.path().join("USD-EUR.csv").exists());
}

#[tokio::test]
async fn provider_message_is_carried_in_schema_error() {
    let server = setup_server();
    let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#
        .to_string();
    let mock = mock_fx_daily(&server, "USD", "EUR", body);
    let client = client_for(&server);

    let err = client.series("USD", "EUR").fetch().await.unwrap_err();
    mock.assert();

    match err {
        FxError::Schema(msg) => {
            assert!(msg.contains("Time Series FX (Daily)"));
            assert!(msg.contains("rate limit"));
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_schema_error() {
    let server = setup_server();
    let mock = mock_fx_daily(&server, "USD", "EUR", "<html>busy</html>".to_string());
    let client = client_for(&server);

    let err = client.series("USD", "EUR").fetch().await.unwrap_err();
    mock.assert();
    assert_eq!(err.kind(), ErrorKind::Schema);
}
