//! Cryptocurrency records and the chart-bar derivation used for intraday prices.

use chrono::NaiveDate;

record! {
    /// Real-time quote for a cryptocurrency pair.
    pub struct CryptoQuote {
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
        pub volume: Option<f64> => "volume",
        pub open: Option<f64> => "open",
        pub previous_close: Option<f64> => "previousClose",
        pub timestamp: Option<i64> => "timestamp",
    }
}

record! {
    /// Entry of the available-cryptocurrencies list.
    pub struct CryptoInfo {
        pub symbol: String => "symbol",
        pub name: String => "name",
        pub exchange: Option<String> => "exchange",
        pub ico_date: Option<String> => "icoDate",
        pub circulating_supply: Option<f64> => "circulatingSupply",
        pub total_supply: Option<f64> => "totalSupply",
    }
}

record! {
    /// A dated price point for a cryptocurrency.
    pub struct CryptoHistoricalPrice {
        pub symbol: String => "symbol",
        pub date: String => "date",
        pub price: f64 => "price",
        pub volume: Option<f64> => "volume",
    }
}

impl CryptoHistoricalPrice {
    /// Builds a price point from an intraday chart bar: the bar's close
    /// becomes the price, volume is carried through.
    pub fn from_chart_bar(symbol: &str, bar: ChartBar) -> Self {
        Self {
            symbol: symbol.to_string(),
            date: bar.date,
            price: bar.close,
            volume: bar.volume,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }
}

record! {
    /// OHLC bar from `historical-chart/{interval}`; carries no symbol.
    pub struct ChartBar {
        pub date: String => "date",
        pub open: f64 => "open",
        pub high: f64 => "high",
        pub low: f64 => "low",
        pub close: f64 => "close",
        pub volume: Option<f64> => "volume",
    }
}

record! {
    /// A cryptocurrency news article.
    pub struct CryptoNews {
        pub symbol: String => "symbol",
        pub published_date: String => "publishedDate",
        pub publisher: String => "publisher",
        pub title: String => "title",
        pub image: Option<String> => "image",
        pub site: String => "site",
        pub text: String => "text",
        pub url: String => "url",
    }
}
