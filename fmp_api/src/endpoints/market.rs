use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    gateway::Gateway,
    query::{DateRange, Params},
    types::{HistoricalPrice, Interval, Quote},
    Error,
};

/// Quotes, price history and sector/industry aggregates.
#[derive(Clone, Copy, Debug)]
pub struct MarketEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Real-time quote for `symbol`.
    pub async fn quote(&self, symbol: &str) -> Result<Vec<Quote>, Error> {
        self.gateway
            .get_records("quote", Params::new().with("symbol", symbol))
            .await
    }

    /// OHLCV bars at `interval` granularity.
    pub async fn historical_chart(
        &self,
        symbol: &str,
        interval: Interval,
        range: &DateRange,
    ) -> Result<Vec<HistoricalPrice>, Error> {
        let params = range.apply(Params::new().with("symbol", symbol));
        self.gateway
            .get_records(&format!("historical-chart/{}", interval), params)
            .await
    }

    /// Daily end-of-day prices. `timeseries` caps the number of days.
    pub async fn historical_price(
        &self,
        symbol: &str,
        range: &DateRange,
        timeseries: Option<u32>,
    ) -> Result<Value, Error> {
        let params = range
            .apply(Params::new().with("symbol", symbol))
            .with_opt("timeseries", timeseries);
        self.gateway.get("historical-price-eod/light", params).await
    }

    /// Price-to-earnings ratios per industry on `date`.
    pub async fn industry_pe(
        &self,
        date: NaiveDate,
        exchange: Option<&str>,
        industry: Option<&str>,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .with("date", date)
            .with_opt("exchange", exchange)
            .with_opt("industry", industry);
        self.gateway.get("industry_pe", params).await
    }

    /// Price-to-earnings ratios per sector on `date`.
    pub async fn sector_pe(
        &self,
        date: NaiveDate,
        exchange: Option<&str>,
        sector: Option<&str>,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .with("date", date)
            .with_opt("exchange", exchange)
            .with_opt("sector", sector);
        self.gateway.get("sector_pe", params).await
    }

    /// Average daily change per industry on `date`.
    pub async fn industry_performance(
        &self,
        date: NaiveDate,
        exchange: Option<&str>,
        industry: Option<&str>,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .with("date", date)
            .with_opt("exchange", exchange)
            .with_opt("industry", industry);
        self.gateway.get("sector-performance", params).await
    }

    /// Price-to-earnings history for one sector.
    pub async fn historical_sector_pe(
        &self,
        sector: &str,
        exchange: Option<&str>,
        range: &DateRange,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .with("sector", sector)
            .with_opt("exchange", exchange);
        self.gateway
            .get("historical-sector-performance", range.apply(params))
            .await
    }
}
