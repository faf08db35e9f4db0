use std::fs;

use chrono::NaiveDate;
use market_chart_rs::api::{ChartSession, Metric};
use market_chart_rs::error::ChartError;
use market_chart_rs::ingest::{CsvFileSource, DailyRecordSource, HistoricalQuery, parse_daily_csv};

const EXPORT: &str = "\u{feff}Date,Open,High,Low,Close,Volume
31-Mar-15,126.09,126.49,124.36,124.43,42090553
30-Mar-15,124.05,126.40,124.00,126.37,47099670
27-Mar-15,124.57,124.70,122.91,123.25,39395989
26-Mar-15,122.76,124.88,122.60,124.24,
25-Mar-15,-,127.00,-,123.38,51655177
not-a-date,1,2,3,4,5
24-Mar-15,127.23
";

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, month, day).expect("date")
}

#[test]
fn malformed_rows_are_dropped_and_blank_cells_are_absent() {
    let records = parse_daily_csv(EXPORT.as_bytes()).expect("parse");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].date, day(3, 31));
    assert_eq!(records[3].volume, None);
    assert_eq!(records[4].opening, None);
    assert_eq!(records[4].low, None);
    assert_eq!(records[4].high, Some(127.0));
}

#[test]
fn iso_dates_are_accepted() {
    let input = "Date,Open,High,Low,Close,Volume\n2015-03-05,1.5,2.0,1.0,1.75,100\n";
    let records = parse_daily_csv(input.as_bytes()).expect("parse");
    assert_eq!(records[0].date, day(3, 5));
}

#[test]
fn file_source_filters_rows_to_query_range() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("aapl.csv");
    fs::write(&path, EXPORT).expect("write csv");

    let mut source = CsvFileSource::new(&path);
    let query = HistoricalQuery::new("AAPL", day(3, 26), day(3, 30)).expect("query");
    let records = source.fetch(&query).expect("fetch");

    let dates: Vec<NaiveDate> = records.iter().map(|record| record.date).collect();
    assert_eq!(dates, vec![day(3, 30), day(3, 27), day(3, 26)]);
}

#[test]
fn file_source_feeds_a_session_in_date_order() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("aapl.csv");
    fs::write(&path, EXPORT).expect("write csv");

    let mut source = CsvFileSource::new(&path);
    let query = HistoricalQuery::new("AAPL", day(3, 1), day(3, 31)).expect("query");
    let mut session = ChartSession::default();
    let chart_set = session.refresh(&mut source, &query).expect("refresh");

    assert_eq!(chart_set.dates().date_at(0), Some(day(3, 25)));
    let closing = chart_set.series(Metric::Closing);
    assert_eq!(closing.get(0).and_then(|sample| sample.y), Some(123.38));
    assert_eq!(closing.max_y().expect("max"), 126.37);
}

#[test]
fn range_without_rows_is_no_data() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("aapl.csv");
    fs::write(&path, EXPORT).expect("write csv");

    let mut source = CsvFileSource::new(&path);
    let query = HistoricalQuery::new("AAPL", day(1, 1), day(2, 1)).expect("query");
    assert!(matches!(source.fetch(&query), Err(ChartError::NoData)));
}

#[test]
fn missing_file_is_an_ingestion_error() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let mut source = CsvFileSource::new(temp_dir.path().join("missing.csv"));
    let query = HistoricalQuery::new("AAPL", day(1, 1), day(2, 1)).expect("query");
    assert!(matches!(source.fetch(&query), Err(ChartError::Ingestion(_))));
}
