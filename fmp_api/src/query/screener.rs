use super::common::{Params, Query, QueryCommon};

/// Filters for the `company-screener` endpoint.
///
/// Every filter is optional; unset filters are not sent. Field names follow
/// Rust convention and map to the API's camelCase keys
/// (`market_cap_more_than` → `marketCapMoreThan`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenerQuery {
    pub common: QueryCommon,
    pub market_cap_more_than: Option<i64>,
    pub market_cap_lower_than: Option<i64>,
    pub price_more_than: Option<f64>,
    pub price_lower_than: Option<f64>,
    pub beta_more_than: Option<f64>,
    pub beta_lower_than: Option<f64>,
    pub volume_more_than: Option<i64>,
    pub volume_lower_than: Option<i64>,
    pub dividend_more_than: Option<f64>,
    pub dividend_lower_than: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub exchange: Option<String>,
    pub is_etf: Option<bool>,
    pub is_fund: Option<bool>,
    pub is_actively_trading: Option<bool>,
}

impl Query for ScreenerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> Params {
        let params = Params::new()
            .with_opt("marketCapMoreThan", self.market_cap_more_than)
            .with_opt("marketCapLowerThan", self.market_cap_lower_than)
            .with_opt("priceMoreThan", self.price_more_than)
            .with_opt("priceLowerThan", self.price_lower_than)
            .with_opt("betaMoreThan", self.beta_more_than)
            .with_opt("betaLowerThan", self.beta_lower_than)
            .with_opt("volumeMoreThan", self.volume_more_than)
            .with_opt("volumeLowerThan", self.volume_lower_than)
            .with_opt("dividendMoreThan", self.dividend_more_than)
            .with_opt("dividendLowerThan", self.dividend_lower_than)
            .with_opt("sector", self.sector.as_deref())
            .with_opt("industry", self.industry.as_deref())
            .with_opt("country", self.country.as_deref())
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("isEtf", self.is_etf)
            .with_opt("isFund", self.is_fund)
            .with_opt("isActivelyTrading", self.is_actively_trading);
        self.common.apply(params)
    }
}

impl ScreenerQuery {
    pub fn with_market_cap_more_than(mut self, value: i64) -> Self {
        self.market_cap_more_than = Some(value);
        self
    }
    pub fn with_market_cap_lower_than(mut self, value: i64) -> Self {
        self.market_cap_lower_than = Some(value);
        self
    }

    pub fn with_price_more_than(mut self, value: f64) -> Self {
        self.price_more_than = Some(value);
        self
    }
    pub fn with_price_lower_than(mut self, value: f64) -> Self {
        self.price_lower_than = Some(value);
        self
    }

    pub fn with_beta_more_than(mut self, value: f64) -> Self {
        self.beta_more_than = Some(value);
        self
    }
    pub fn with_beta_lower_than(mut self, value: f64) -> Self {
        self.beta_lower_than = Some(value);
        self
    }

    pub fn with_volume_more_than(mut self, value: i64) -> Self {
        self.volume_more_than = Some(value);
        self
    }
    pub fn with_volume_lower_than(mut self, value: i64) -> Self {
        self.volume_lower_than = Some(value);
        self
    }

    pub fn with_dividend_more_than(mut self, value: f64) -> Self {
        self.dividend_more_than = Some(value);
        self
    }
    pub fn with_dividend_lower_than(mut self, value: f64) -> Self {
        self.dividend_lower_than = Some(value);
        self
    }

    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sector = Some(sector.to_string());
        self
    }

    pub fn with_industry(mut self, industry: &str) -> Self {
        self.industry = Some(industry.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_exchange(mut self, exchange: &str) -> Self {
        self.exchange = Some(exchange.to_string());
        self
    }

    pub fn with_is_etf(mut self, is_etf: bool) -> Self {
        self.is_etf = Some(is_etf);
        self
    }

    pub fn with_is_fund(mut self, is_fund: bool) -> Self {
        self.is_fund = Some(is_fund);
        self
    }

    pub fn with_is_actively_trading(mut self, is_actively_trading: bool) -> Self {
        self.is_actively_trading = Some(is_actively_trading);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Query, ScreenerQuery};

    #[test]
    fn test_screener_query() {
        let url = Url::parse("https://example.com/company-screener").unwrap();

        insta::assert_snapshot!(ScreenerQuery::default()
            .with_market_cap_more_than(1_000_000_000)
            .with_price_lower_than(250.5)
            .with_sector("Technology")
            .with_is_etf(false)
            .with_is_actively_trading(true)
            .with_limit(10)
            .add_to_url(&url)
            .to_string(), @"https://example.com/company-screener?marketCapMoreThan=1000000000&priceLowerThan=250.5&sector=Technology&isEtf=false&isActivelyTrading=true&limit=10");

        insta::assert_snapshot!(ScreenerQuery::default()
            .add_to_url(&url)
            .to_string(), @"https://example.com/company-screener");
    }
}
