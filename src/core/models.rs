use std::fmt;

use chrono::NaiveDate;

/// Text written in place of a quote field the provider did not supply.
pub const MISSING_SENTINEL: &str = "N/A";

/// A single open/high/low/close value as the provider sent it.
///
/// Values are kept as text so the exported file reproduces the provider's digits exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuoteValue {
    /// The provider supplied this value.
    Present(String),
    /// The field was absent or null upstream.
    #[default]
    Missing,
}

impl QuoteValue {
    /// The value's text, or [`MISSING_SENTINEL`] when missing.
    pub fn as_str(&self) -> &str {
        match self {
            QuoteValue::Present(s) => s,
            QuoteValue::Missing => MISSING_SENTINEL,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, QuoteValue::Missing)
    }
}

impl fmt::Display for QuoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for QuoteValue {
    fn from(s: &str) -> Self {
        QuoteValue::Present(s.to_string())
    }
}

/// One day's quote for a currency pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRecord {
    pub open: QuoteValue,
    pub high: QuoteValue,
    pub low: QuoteValue,
    pub close: QuoteValue,
}

/// An inclusive calendar-date window.
///
/// `start <= end` is not enforced; a reversed range contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Per-date quotes for one currency pair.
///
/// Entries keep the order in which they were inserted, which for fetched series
/// is the provider's document order (Alpha Vantage sends newest first).
/// Call [`QuoteSeries::sort_by_date`] for ascending dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSeries {
    entries: Vec<(NaiveDate, QuoteRecord)>,
}

impl QuoteSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller guarantees the dates are distinct.
    pub(crate) fn from_unique(entries: Vec<(NaiveDate, QuoteRecord)>) -> Self {
        Self { entries }
    }

    /// Insert a record. An existing entry for the same date is replaced in place.
    pub fn insert(&mut self, date: NaiveDate, record: QuoteRecord) {
        match self.entries.iter_mut().find(|(d, _)| *d == date) {
            Some(slot) => slot.1 = record,
            None => self.entries.push((date, record)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&QuoteRecord> {
        self.entries.iter().find(|(d, _)| *d == date).map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &QuoteRecord)> {
        self.entries.iter().map(|(d, r)| (d, r))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    /// First entry in iteration order.
    pub fn first(&self) -> Option<(&NaiveDate, &QuoteRecord)> {
        self.entries.first().map(|(d, r)| (d, r))
    }

    /// Last entry in iteration order.
    pub fn last(&self) -> Option<(&NaiveDate, &QuoteRecord)> {
        self.entries.last().map(|(d, r)| (d, r))
    }

    /// Keep only the entries whose date lies inside `range`, preserving order.
    pub fn retain_range(&mut self, range: &DateRange) {
        self.entries.retain(|(d, _)| range.contains(*d));
    }

    /// Reorder entries by ascending date.
    pub fn sort_by_date(&mut self) {
        self.entries.sort_by_key(|(d, _)| *d);
    }
}

impl FromIterator<(NaiveDate, QuoteRecord)> for QuoteSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, QuoteRecord)>>(iter: I) -> Self {
        let mut series = QuoteSeries::new();
        for (date, record) in iter {
            series.insert(date, record);
        }
        series
    }
}

impl IntoIterator for QuoteSeries {
    type Item = (NaiveDate, QuoteRecord);
    type IntoIter = std::vec::IntoIter<(NaiveDate, QuoteRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The provider's `Meta Data` block. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesMeta {
    pub information: Option<String>,
    pub from_symbol: Option<String>,
    pub to_symbol: Option<String>,
    pub output_size: Option<String>,
    pub last_refreshed: Option<String>,
    pub time_zone: Option<String>,
}

/// A filtered series together with the provider's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesResponse {
    pub meta: Option<SeriesMeta>,
    pub series: QuoteSeries,
}
