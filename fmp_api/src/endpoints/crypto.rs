use crate::{
    gateway::Gateway,
    query::{DateRange, NewsQuery, Params, Query},
    schema::parse_records,
    types::{ChartBar, CryptoHistoricalPrice, CryptoInfo, CryptoNews, CryptoQuote, Interval},
    Error,
};

/// Cryptocurrency quotes, history and news.
#[derive(Clone, Copy, Debug)]
pub struct CryptoEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> CryptoEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Real-time quote for a pair such as `BTCUSD`.
    pub async fn crypto_quote(&self, symbol: &str) -> Result<Vec<CryptoQuote>, Error> {
        self.gateway
            .get_records("quote", Params::new().with("symbol", symbol))
            .await
    }

    /// Every cryptocurrency the API lists.
    pub async fn crypto_list(&self) -> Result<Vec<CryptoInfo>, Error> {
        self.gateway
            .get_records("symbol/available-cryptocurrencies", Params::new())
            .await
    }

    /// End-of-day prices.
    pub async fn crypto_historical_price(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> Result<Vec<CryptoHistoricalPrice>, Error> {
        let params = range.apply(Params::new().with("symbol", symbol));
        self.gateway
            .get_records("historical-price-eod/light", params)
            .await
    }

    /// Intraday prices. Chart bars carry no symbol, so each close is paired
    /// with the requested `symbol`.
    pub async fn crypto_intraday(
        &self,
        symbol: &str,
        interval: Interval,
        range: &DateRange,
    ) -> Result<Vec<CryptoHistoricalPrice>, Error> {
        let params = range.apply(Params::new().with("symbol", symbol));
        let value = self
            .gateway
            .get(&format!("historical-chart/{}", interval), params)
            .await?;
        let bars = parse_records::<ChartBar>(&value)?;
        Ok(bars
            .into_iter()
            .map(|bar| CryptoHistoricalPrice::from_chart_bar(symbol, bar))
            .collect())
    }

    /// Latest crypto headlines. The API serves up to 250 per page; the
    /// usual first request is page 0 with 20 articles.
    pub async fn crypto_news_latest(&self, page: u32, limit: u32) -> Result<Vec<CryptoNews>, Error> {
        let query = NewsQuery::default().with_page(page).with_limit(limit);
        self.gateway
            .get_records("news/crypto-latest", query.to_params())
            .await
    }

    /// Crypto news for the symbols in `query`. Page 0 and 20 articles are
    /// sent when the query leaves them unset.
    pub async fn search_crypto_news(&self, query: &NewsQuery) -> Result<Vec<CryptoNews>, Error> {
        let params = query
            .to_params()
            .with_default("page", 0u32)
            .with_default("limit", 20u32);
        self.gateway.get_records("news/crypto", params).await
    }
}
