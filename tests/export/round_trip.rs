use avfx_rs::{QuoteRecord, QuoteSeries, QuoteValue, export_csv};

use crate::common::date;

fn sample() -> QuoteSeries {
    let full = |o: &str, h: &str, l: &str, c: &str| QuoteRecord {
        open: o.into(),
        high: h.into(),
        low: l.into(),
        close: c.into(),
    };
    [
        (date("2020-01-03"), full("1.1170", "1.1190", "1.1120", "1.1160")),
        (
            date("2020-01-02"),
            QuoteRecord {
                open: "1.05".into(),
                low: "1.01".into(),
                ..Default::default()
            },
        ),
        (date("2019-12-31"), full("1.1200", "1.1240", "1.1190", "1.1210")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn exported_csv_reparses_to_the_same_values() {
    let series = sample();
    let dir = tempfile::tempdir().unwrap();
    let path = export_csv(&series, "EUR", "USD", dir.path()).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        rdr.headers().unwrap(),
        &csv::StringRecord::from(vec!["Date", "Open", "High", "Low", "Close"])
    );

    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), series.len());

    for (row, (d, q)) in rows.iter().zip(series.iter()) {
        assert_eq!(&row[0], d.format("%Y-%m-%d").to_string());
        assert_eq!(&row[1], q.open.as_str());
        assert_eq!(&row[2], q.high.as_str());
        assert_eq!(&row[3], q.low.as_str());
        assert_eq!(&row[4], q.close.as_str());
    }

    // the partially missing record comes back with the sentinel
    assert_eq!(&rows[1][2], "N/A");
    assert_eq!(&rows[1][4], "N/A");
    assert_eq!(series.get(date("2020-01-02")).unwrap().high, QuoteValue::Missing);
}

#[test]
fn missing_field_row_matches_expected_text() {
    let series: QuoteSeries = [(
        date("2020-01-02"),
        QuoteRecord {
            open: "1.05".into(),
            low: "1.01".into(),
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();

    let dir = tempfile::tempdir().unwrap();
    let path = export_csv(&series, "USD", "EUR", dir.path()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, "Date,Open,High,Low,Close\n2020-01-02,1.05,N/A,1.01,N/A\n");
}
