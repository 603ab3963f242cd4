use super::common::{DateRange, Params, Query, QueryCommon};

/// Query for the news endpoints (`news/stock`, `news/crypto`, `news/crypto-latest`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsQuery {
    pub common: QueryCommon,
    /// Comma-separated ticker list, e.g. `AAPL,MSFT` or `BTCUSD`.
    pub symbols: Option<String>,
    pub range: DateRange,
}

impl Query for NewsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> Params {
        let params = Params::new().with_opt("symbols", self.symbols.as_deref());
        let params = self.range.apply(params);
        self.common.apply(params)
    }
}

impl NewsQuery {
    /// News for one or more comma-separated symbols.
    pub fn for_symbols(symbols: &str) -> Self {
        Self {
            symbols: Some(symbols.to_string()),
            ..Self::default()
        }
    }

    /// First page of the latest-news feed, 20 articles.
    pub fn latest() -> Self {
        Self::default().with_page(0).with_limit(20)
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn symbols_and_pagination() {
        let params = NewsQuery::for_symbols("AAPL,MSFT")
            .with_page(2)
            .with_limit(50)
            .to_params();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("symbols".to_string(), "AAPL,MSFT".to_string()),
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn latest_sends_defaults() {
        let params = NewsQuery::latest().to_params();
        assert!(params.get("symbols").is_none());
        assert_eq!(params.get("page").map(|v| v.to_string()), Some("0".to_string()));
        assert_eq!(params.get("limit").map(|v| v.to_string()), Some("20".to_string()));
    }

    #[test]
    fn date_range_included() {
        let range = DateRange::new().with_from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let params = NewsQuery::for_symbols("BTCUSD").with_range(range).to_params();
        assert_eq!(params.get("from").map(|v| v.to_string()), Some("2024-03-01".to_string()));
        assert!(params.get("to").is_none());
    }
}
