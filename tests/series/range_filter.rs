use crate::common::{DAILY_KEY, client_for, date, mock_fx_daily, setup_server};
use avfx_rs::DateRange;
use chrono::Duration;

fn payload(dates: &[chrono::NaiveDate]) -> String {
    let entries: Vec<String> = dates
        .iter()
        .map(|d| format!(r#""{d}": {{"1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1"}}"#))
        .collect();
    format!(r#"{{"{DAILY_KEY}": {{{}}}}}"#, entries.join(","))
}

#[tokio::test]
async fn range_is_inclusive_and_excludes_everything_else() {
    let start = date("2021-03-10");
    let end = date("2021-03-20");
    // every day from ten days before to ten days after the window
    let all: Vec<_> = (-10..=20)
        .map(|i| start + Duration::days(i))
        .rev()
        .collect();

    let server = setup_server();
    let mock = mock_fx_daily(&server, "GBP", "JPY", payload(&all));
    let client = client_for(&server);

    let series = client
        .series("GBP", "JPY")
        .range(DateRange::new(start, end))
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(series.len(), 11);
    assert!(series.get(start).is_some(), "start boundary must be kept");
    assert!(series.get(end).is_some(), "end boundary must be kept");
    for d in series.dates() {
        assert!(start <= d && d <= end, "{d} outside range");
    }
    for d in all.iter().filter(|d| **d < start || **d > end) {
        assert!(series.get(*d).is_none(), "{d} should be filtered out");
    }
}

#[tokio::test]
async fn single_day_range_keeps_only_that_day() {
    let day = date("2020-02-29");
    let server = setup_server();
    let mock = mock_fx_daily(
        &server,
        "USD",
        "EUR",
        payload(&[date("2020-03-01"), day, date("2020-02-28")]),
    );
    let client = client_for(&server);

    let series = client
        .series("USD", "EUR")
        .between(day, day)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(series.dates().collect::<Vec<_>>(), vec![day]);
}

#[tokio::test]
async fn reversed_range_yields_empty_series() {
    let server = setup_server();
    let mock = mock_fx_daily(&server, "USD", "EUR", payload(&[date("2020-01-02")]));
    let client = client_for(&server);

    let series = client
        .series("USD", "EUR")
        .between(date("2020-01-03"), date("2020-01-01"))
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(series.is_empty());
}
