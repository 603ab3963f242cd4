//! Quote and price-history records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

record! {
    /// Real-time quote for a listed security.
    pub struct Quote {
        pub symbol: String => "symbol",
        pub name: Option<String> => "name",
        pub price: f64 => "price",
        pub changes_percentage: Option<f64> => "changesPercentage",
        pub change: Option<f64> => "change",
        pub day_low: Option<f64> => "dayLow",
        pub day_high: Option<f64> => "dayHigh",
        pub year_high: Option<f64> => "yearHigh",
        pub year_low: Option<f64> => "yearLow",
        pub market_cap: Option<f64> => "marketCap",
        pub price_avg50: Option<f64> => "priceAvg50",
        pub price_avg200: Option<f64> => "priceAvg200",
        pub exchange: Option<String> => "exchange",
        pub volume: Option<i64> => "volume",
        pub avg_volume: Option<i64> => "avgVolume",
        pub open: Option<f64> => "open",
        pub previous_close: Option<f64> => "previousClose",
        pub eps: Option<f64> => "eps",
        pub pe: Option<f64> => "pe",
        pub earnings_announcement: Option<String> => "earningsAnnouncement",
        pub shares_outstanding: Option<i64> => "sharesOutstanding",
        /// Unix seconds.
        pub timestamp: Option<i64> => "timestamp",
    }
}

record! {
    /// One bar of price history.
    pub struct HistoricalPrice {
        pub date: String => "date",
        pub open: f64 => "open",
        pub high: f64 => "high",
        pub low: f64 => "low",
        pub close: f64 => "close",
        pub adj_close: Option<f64> => "adjClose",
        pub volume: i64 => "volume",
        pub unadjusted_volume: Option<i64> => "unadjustedVolume",
        pub change: Option<f64> => "change",
        pub change_percent: Option<f64> => "changePercent",
        pub vwap: Option<f64> => "vwap",
        pub label: Option<String> => "label",
        pub change_over_time: Option<f64> => "changeOverTime",
    }
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }
}

/// Bar width for the `historical-chart/{interval}` endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    #[default]
    OneMin,
    FiveMin,
    FifteenMin,
    ThirtyMin,
    OneHour,
    FourHour,
    OneDay,
}

impl Interval {
    /// Path segment sent to the API.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMin => "1min",
            Interval::FiveMin => "5min",
            Interval::FifteenMin => "15min",
            Interval::ThirtyMin => "30min",
            Interval::OneHour => "1hour",
            Interval::FourHour => "4hour",
            Interval::OneDay => "1day",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Interval::OneMin),
            "5min" => Ok(Interval::FiveMin),
            "15min" => Ok(Interval::FifteenMin),
            "30min" => Ok(Interval::ThirtyMin),
            "1hour" => Ok(Interval::OneHour),
            "4hour" => Ok(Interval::FourHour),
            "1day" => Ok(Interval::OneDay),
            other => Err(format!(
                "unknown interval '{}', expected one of 1min, 5min, 15min, 30min, 1hour, 4hour, 1day",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::Record;

    #[test]
    fn interval_round_trips_through_str() {
        for interval in [
            Interval::OneMin,
            Interval::FiveMin,
            Interval::FifteenMin,
            Interval::ThirtyMin,
            Interval::OneHour,
            Interval::FourHour,
            Interval::OneDay,
        ] {
            assert_eq!(interval.as_str().parse::<Interval>(), Ok(interval));
        }
        assert!("2min".parse::<Interval>().is_err());
    }

    #[test]
    fn historical_price_requires_integer_volume() {
        let bar = json!({
            "date": "2024-01-02", "open": 187.15, "high": 188.44,
            "low": 183.89, "close": 185.64, "volume": 82488700
        });
        let price = HistoricalPrice::from_json(&bar).unwrap();
        assert_eq!(price.volume, 82_488_700);
        assert_eq!(price.adj_close, None);
        assert_eq!(price.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 2));

        let mut integral = bar.clone();
        integral["volume"] = json!(82488700.0);
        assert_eq!(HistoricalPrice::from_json(&integral).unwrap().volume, 82_488_700);

        let mut bad = bar.clone();
        bad["volume"] = json!("82488700");
        assert!(HistoricalPrice::from_json(&bad).is_err());
    }
}
