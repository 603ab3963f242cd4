use serde_json::Value;

use crate::{
    gateway::Gateway,
    query::{NewsQuery, Params, Query, ScreenerQuery},
    types::{CompanyProfile, SearchResult, StockNews, StockScreenerResult},
    Error,
};

/// Company profiles, symbol lookup, screening and stock news.
#[derive(Clone, Copy, Debug)]
pub struct CompanyEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> CompanyEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Fetches the company profile for `symbol`.
    pub async fn profile(&self, symbol: &str) -> Result<Vec<CompanyProfile>, Error> {
        self.gateway
            .get_records("profile", Params::new().with("symbol", symbol))
            .await
    }

    /// Searches tickers by company name or symbol fragment.
    pub async fn search_symbol(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        self.search_by_name(query).await
    }

    /// Searches tickers by full or partial company name.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        self.gateway
            .get_records("search-name", Params::new().with("query", query))
            .await
    }

    /// Company data for a Central Index Key. Returned as raw JSON.
    pub async fn search_by_cik(&self, cik: &str) -> Result<Value, Error> {
        self.gateway
            .get(
                &format!("cik_search/{}", urlencoding::encode(cik)),
                Params::new(),
            )
            .await
    }

    pub async fn search_by_cusip(&self, cusip: &str) -> Result<Value, Error> {
        self.gateway
            .get("cusip", Params::new().with("cusip", cusip))
            .await
    }

    pub async fn search_by_isin(&self, isin: &str) -> Result<Value, Error> {
        self.gateway
            .get("search-isin", Params::new().with("isin", isin))
            .await
    }

    /// Every listed symbol with name, price and exchange.
    pub async fn stock_list(&self) -> Result<Value, Error> {
        self.gateway.get("stock/list", Params::new()).await
    }

    /// Screens stocks by market, price and classification filters.
    pub async fn screen_stocks(
        &self,
        query: &ScreenerQuery,
    ) -> Result<Vec<StockScreenerResult>, Error> {
        self.gateway
            .get_records("company-screener", query.to_params())
            .await
    }

    /// News articles for the symbols in `query`.
    pub async fn search_stock_news(&self, query: &NewsQuery) -> Result<Vec<StockNews>, Error> {
        self.gateway
            .get_records("news/stock", query.to_params())
            .await
    }
}
