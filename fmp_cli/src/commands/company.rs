use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::{Client, Query, ScreenerQuery};

use crate::output::{
    build_profile_rows, build_screener_rows, build_search_rows, print_json, render, OutputFormat,
};

#[derive(Args)]
pub struct ProfileArgs {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchBy {
    Name,
    Cik,
    Cusip,
    Isin,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Company name fragment, or an identifier when --by is cik, cusip or isin
    pub query: String,

    /// What the query is matched against
    #[arg(long, value_enum, default_value = "name")]
    pub by: SearchBy,
}

#[derive(Args)]
pub struct ScreenArgs {
    /// Minimum market cap in USD
    #[arg(long)]
    pub market_cap_min: Option<i64>,

    /// Maximum market cap in USD
    #[arg(long)]
    pub market_cap_max: Option<i64>,

    #[arg(long)]
    pub price_min: Option<f64>,

    #[arg(long)]
    pub price_max: Option<f64>,

    #[arg(long)]
    pub beta_min: Option<f64>,

    #[arg(long)]
    pub beta_max: Option<f64>,

    #[arg(long)]
    pub volume_min: Option<i64>,

    #[arg(long)]
    pub volume_max: Option<i64>,

    #[arg(long)]
    pub dividend_min: Option<f64>,

    #[arg(long)]
    pub dividend_max: Option<f64>,

    /// Filter by sector (e.g. Technology)
    #[arg(long)]
    pub sector: Option<String>,

    /// Filter by industry (e.g. "Consumer Electronics")
    #[arg(long)]
    pub industry: Option<String>,

    /// Filter by country code (e.g. US)
    #[arg(long)]
    pub country: Option<String>,

    /// Filter by exchange (e.g. NASDAQ)
    #[arg(long)]
    pub exchange: Option<String>,

    /// Only ETFs (true) or exclude them (false)
    #[arg(long)]
    pub etf: Option<bool>,

    /// Only funds (true) or exclude them (false)
    #[arg(long)]
    pub fund: Option<bool>,

    /// Only actively trading symbols (true) or only inactive ones (false)
    #[arg(long)]
    pub actively_trading: Option<bool>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run_profile(args: &ProfileArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let profiles = client.company().profile(&args.symbol).await?;
    render(&profiles, build_profile_rows, format)
}

pub async fn run_search(args: &SearchArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let company = client.company();
    let raw = match args.by {
        SearchBy::Name => {
            let results = company.search_by_name(&args.query).await?;
            return render(&results, build_search_rows, format);
        }
        SearchBy::Cik => company.search_by_cik(&args.query).await?,
        SearchBy::Cusip => company.search_by_cusip(&args.query).await?,
        SearchBy::Isin => company.search_by_isin(&args.query).await?,
    };
    // Identifier lookups have no fixed record shape.
    print_json(&raw);
    Ok(())
}

pub async fn run_screen(args: &ScreenArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = build_screener_query(args);
    let results = client.company().screen_stocks(&query).await?;
    render(&results, build_screener_rows, format)
}

fn build_screener_query(args: &ScreenArgs) -> ScreenerQuery {
    let mut query = ScreenerQuery::default();
    if let Some(v) = args.market_cap_min {
        query = query.with_market_cap_more_than(v);
    }
    if let Some(v) = args.market_cap_max {
        query = query.with_market_cap_lower_than(v);
    }
    if let Some(v) = args.price_min {
        query = query.with_price_more_than(v);
    }
    if let Some(v) = args.price_max {
        query = query.with_price_lower_than(v);
    }
    if let Some(v) = args.beta_min {
        query = query.with_beta_more_than(v);
    }
    if let Some(v) = args.beta_max {
        query = query.with_beta_lower_than(v);
    }
    if let Some(v) = args.volume_min {
        query = query.with_volume_more_than(v);
    }
    if let Some(v) = args.volume_max {
        query = query.with_volume_lower_than(v);
    }
    if let Some(v) = args.dividend_min {
        query = query.with_dividend_more_than(v);
    }
    if let Some(v) = args.dividend_max {
        query = query.with_dividend_lower_than(v);
    }
    if let Some(sector) = &args.sector {
        query = query.with_sector(sector);
    }
    if let Some(industry) = &args.industry {
        query = query.with_industry(industry);
    }
    if let Some(country) = &args.country {
        query = query.with_country(country);
    }
    if let Some(exchange) = &args.exchange {
        query = query.with_exchange(exchange);
    }
    if let Some(v) = args.etf {
        query = query.with_is_etf(v);
    }
    if let Some(v) = args.fund {
        query = query.with_is_fund(v);
    }
    if let Some(v) = args.actively_trading {
        query = query.with_is_actively_trading(v);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    query
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fmp_api::ParamValue;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        screen: ScreenArgs,
    }

    #[test]
    fn screener_flags_map_to_query_keys() {
        let harness = Harness::parse_from([
            "fmp",
            "--market-cap-min",
            "1000000000",
            "--sector",
            "Technology",
            "--etf",
            "false",
            "--limit",
            "10",
        ]);
        let params = build_screener_query(&harness.screen).to_params();
        assert_eq!(params.get("marketCapMoreThan"), Some(&ParamValue::Int(1_000_000_000)));
        assert_eq!(params.get("isEtf"), Some(&ParamValue::Bool(false)));
        assert_eq!(params.get("limit"), Some(&ParamValue::Int(10)));
        assert_eq!(params.get("isFund"), None);
    }
}
