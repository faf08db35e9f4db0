use std::io::Read;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::DailyRecord;
use crate::error::{ChartError, ChartResult};

/// Day-first pattern used by the historical endpoint, e.g. `5-Mar-15`.
const ENDPOINT_DATE_PATTERN: &str = "%d-%b-%y";
const ISO_DATE_PATTERN: &str = "%Y-%m-%d";

const COLUMN_COUNT: usize = 6;

/// Parses daily rows laid out as `Date,Open,High,Low,Close,Volume`.
///
/// The header row is skipped. Numeric cells that do not parse become absent
/// values; rows with a bad date or missing columns are dropped with a
/// warning. An input without any usable row is `NoData`.
pub fn parse_daily_csv<R: Read>(reader: R) -> ChartResult<Vec<DailyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (row, result) in csv_reader.records().enumerate() {
        let row_number = row + 2;
        let row_values =
            result.map_err(|err| ChartError::Ingestion(format!("failed to read csv: {err}")))?;

        if row_values.len() < COLUMN_COUNT {
            warn!(row = row_number, columns = row_values.len(), "dropping short csv row");
            dropped += 1;
            continue;
        }

        let Some(date) = parse_date(&row_values[0]) else {
            warn!(row = row_number, value = &row_values[0], "dropping csv row with invalid date");
            dropped += 1;
            continue;
        };

        records.push(DailyRecord::new(
            date,
            parse_price(&row_values[1]),
            parse_price(&row_values[4]),
            parse_price(&row_values[3]),
            parse_price(&row_values[2]),
            row_values[5].parse::<u64>().ok(),
        ));
    }

    debug!(rows = records.len(), dropped, "parsed daily csv");
    if records.is_empty() {
        return Err(ChartError::NoData);
    }
    Ok(records)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ENDPOINT_DATE_PATTERN)
        .or_else(|_| NaiveDate::parse_from_str(value, ISO_DATE_PATTERN))
        .ok()
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::parse_daily_csv;
    use crate::error::ChartError;

    #[test]
    fn columns_map_to_record_fields() {
        let input = "Date,Open,High,Low,Close,Volume\n28-Dec-15,107.5,109.0,106.2,108.1,31000\n";
        let records = parse_daily_csv(input.as_bytes()).expect("parse");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2015, 12, 28).expect("date"));
        assert_eq!(record.opening, Some(107.5));
        assert_eq!(record.high, Some(109.0));
        assert_eq!(record.low, Some(106.2));
        assert_eq!(record.closing, Some(108.1));
        assert_eq!(record.volume, Some(31_000));
    }

    #[test]
    fn placeholder_cells_become_absent_values() {
        let input = "Date,Open,High,Low,Close,Volume\n5-Mar-15,-,-,-,128.0,-\n";
        let records = parse_daily_csv(input.as_bytes()).expect("parse");
        assert_eq!(records[0].opening, None);
        assert_eq!(records[0].closing, Some(128.0));
        assert_eq!(records[0].volume, None);
    }

    #[test]
    fn header_only_input_is_no_data() {
        let input = "Date,Open,High,Low,Close,Volume\n";
        assert!(matches!(parse_daily_csv(input.as_bytes()), Err(ChartError::NoData)));
    }
}
