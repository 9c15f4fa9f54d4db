use avfx_rs::{ErrorKind, FxError};

use crate::common::{DAILY_KEY, client_for, date, mock_fx_daily, setup_server};

#[tokio::test]
async fn unparsable_date_key_fails_the_whole_call() {
    let server = setup_server();
    let body = format!(
        r#"{{"{DAILY_KEY}": {{
            "2020-01-02": {{"1. open": "1.1"}},
            "01/03/2020": {{"1. open": "1.2"}}
        }}}}"#
    );
    let mock = mock_fx_daily(&server, "USD", "EUR", body);
    let client = client_for(&server);

    let err = client
        .series("USD", "EUR")
        .between(date("2020-01-01"), date("2020-01-31"))
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Data);
    match err {
        FxError::Data(msg) => assert!(msg.contains("01/03/2020"), "{msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}
