//! Company profile, search, screener and stock-news records.

record! {
    /// Company profile returned by the `profile` endpoint.
    pub struct CompanyProfile {
        pub symbol: String => "symbol",
        /// Last traded price.
        pub price: f64 => "price",
        pub beta: Option<f64> => "beta",
        /// Average daily volume.
        pub vol_avg: Option<i64> => "volAvg",
        /// Market capitalization in the reporting currency.
        pub mkt_cap: Option<f64> => "mktCap",
        pub last_div: Option<f64> => "lastDiv",
        /// 52-week range, e.g. `"164.08-199.62"`.
        pub range: Option<String> => "range",
        pub changes: Option<f64> => "changes",
        pub company_name: String => "companyName",
        pub currency: Option<String> => "currency",
        pub cik: Option<String> => "cik",
        pub isin: Option<String> => "isin",
        pub cusip: Option<String> => "cusip",
        pub exchange: Option<String> => "exchange",
        pub exchange_short_name: Option<String> => "exchangeShortName",
        pub industry: Option<String> => "industry",
        pub website: Option<String> => "website",
        pub description: Option<String> => "description",
        pub ceo: Option<String> => "ceo",
        pub sector: Option<String> => "sector",
        pub country: Option<String> => "country",
        /// Headcount as reported; the API sends it as a string.
        pub full_time_employees: Option<String> => "fullTimeEmployees",
        pub phone: Option<String> => "phone",
        pub address: Option<String> => "address",
        pub city: Option<String> => "city",
        pub state: Option<String> => "state",
        pub zip: Option<String> => "zip",
        pub dcf_diff: Option<f64> => "dcfDiff",
        pub dcf: Option<f64> => "dcf",
        pub image: Option<String> => "image",
        pub ipo_date: Option<String> => "ipoDate",
        pub default_image: Option<bool> => "defaultImage",
        pub is_etf: Option<bool> => "isEtf",
        pub is_actively_trading: Option<bool> => "isActivelyTrading",
        pub is_adr: Option<bool> => "isAdr",
        pub is_fund: Option<bool> => "isFund",
    }
}

record! {
    /// A ticker match from the symbol / name search.
    pub struct SearchResult {
        pub symbol: String => "symbol",
        pub name: String => "name",
        pub currency: Option<String> => "currency",
        pub stock_exchange: Option<String> => "stockExchange",
        pub exchange_short_name: Option<String> => "exchangeShortName",
    }
}

record! {
    /// One row of the stock screener.
    pub struct StockScreenerResult {
        pub symbol: String => "symbol",
        pub company_name: String => "companyName",
        pub market_cap: Option<f64> => "marketCap",
        pub sector: Option<String> => "sector",
        pub industry: Option<String> => "industry",
        pub beta: Option<f64> => "beta",
        pub price: Option<f64> => "price",
        pub last_annual_dividend: Option<f64> => "lastAnnualDividend",
        pub volume: Option<i64> => "volume",
        pub exchange: Option<String> => "exchange",
        pub exchange_short_name: Option<String> => "exchangeShortName",
        pub country: Option<String> => "country",
        pub is_etf: Option<bool> => "isEtf",
        pub is_actively_trading: Option<bool> => "isActivelyTrading",
    }
}

record! {
    /// A news article about a listed company.
    pub struct StockNews {
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
