use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// URL template of the historical daily-price CSV endpoint.
///
/// Placeholders: `{ticker}`, `{from}`, `{to}`.
pub const DEFAULT_HISTORICAL_URL_TEMPLATE: &str = "http://www.google.com/finance/historical?q={ticker}&histperiod=daily&startdate={from}&enddate={to}&output=csv";

const URL_DATE_PATTERN: &str = "%b+%-d+%Y";

/// Ticker and inclusive date range of one historical fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalQuery {
    ticker: String,
    from: NaiveDate,
    to: NaiveDate,
}

impl HistoricalQuery {
    pub fn new(ticker: impl Into<String>, from: NaiveDate, to: NaiveDate) -> ChartResult<Self> {
        let query = Self {
            ticker: ticker.into().trim().to_owned(),
            from,
            to,
        };
        query.validate()?;
        Ok(query)
    }

    /// Rejects empty tickers and ranges whose start is not before their end.
    pub fn validate(&self) -> ChartResult<()> {
        if self.ticker.is_empty() || self.ticker.chars().any(char::is_whitespace) {
            return Err(ChartError::InvalidData(format!(
                "invalid ticker `{}`",
                self.ticker
            )));
        }
        if self.from >= self.to {
            return Err(ChartError::InvalidDateRange {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    #[must_use]
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.from..=self.to).contains(&date)
    }

    /// Fills a URL template such as [`DEFAULT_HISTORICAL_URL_TEMPLATE`].
    #[must_use]
    pub fn request_url(&self, template: &str) -> String {
        template
            .replace("{ticker}", &self.ticker)
            .replace("{from}", &self.from.format(URL_DATE_PATTERN).to_string())
            .replace("{to}", &self.to.format(URL_DATE_PATTERN).to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_HISTORICAL_URL_TEMPLATE, HistoricalQuery};
    use crate::error::ChartError;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn request_url_formats_dates_with_plus_separators() {
        let query = HistoricalQuery::new("AAPL", day(2015, 1, 5), day(2015, 12, 28)).expect("query");
        assert_eq!(
            query.request_url(DEFAULT_HISTORICAL_URL_TEMPLATE),
            "http://www.google.com/finance/historical?q=AAPL&histperiod=daily\
             &startdate=Jan+5+2015&enddate=Dec+28+2015&output=csv"
        );
    }

    #[test]
    fn reversed_or_equal_range_is_rejected() {
        let same = HistoricalQuery::new("AAPL", day(2015, 3, 1), day(2015, 3, 1));
        assert!(matches!(same, Err(ChartError::InvalidDateRange { .. })));

        let reversed = HistoricalQuery::new("AAPL", day(2015, 3, 2), day(2015, 3, 1));
        assert!(matches!(reversed, Err(ChartError::InvalidDateRange { .. })));
    }

    #[test]
    fn blank_ticker_is_rejected() {
        let query = HistoricalQuery::new("   ", day(2015, 3, 1), day(2015, 4, 1));
        assert!(matches!(query, Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn range_is_inclusive() {
        let query = HistoricalQuery::new("MSFT", day(2015, 3, 1), day(2015, 3, 31)).expect("query");
        assert!(query.contains(day(2015, 3, 1)));
        assert!(query.contains(day(2015, 3, 31)));
        assert!(!query.contains(day(2015, 4, 1)));
    }
}
