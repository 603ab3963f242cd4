//! Response records and typed request enums.

use chrono::NaiveDate;

mod company;
pub use self::company::{CompanyProfile, SearchResult, StockNews, StockScreenerResult};

mod market;
pub use self::market::{HistoricalPrice, Interval, Quote};

mod crypto;
pub use self::crypto::{ChartBar, CryptoHistoricalPrice, CryptoInfo, CryptoNews, CryptoQuote};

mod financials;
pub use self::financials::{BalanceSheet, CashFlowStatement, FinancialGrowth, IncomeStatement, Period};

/// Parses the date part of `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daily_and_intraday_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2);
        assert_eq!(parse_date("2024-01-02"), expected);
        assert_eq!(parse_date("2024-01-02 09:35:00"), expected);
        assert_eq!(parse_date("01/02/2024"), None);
        assert_eq!(parse_date(""), None);
    }
}
