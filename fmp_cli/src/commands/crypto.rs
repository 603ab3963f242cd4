use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fmp_api::types::Interval;
use fmp_api::{Client, NewsQuery, Query};

use super::market::date_range;
use crate::output::{
    build_crypto_info_rows, build_crypto_news_rows, build_crypto_quote_rows, build_price_rows,
    render, OutputFormat,
};

#[derive(Args)]
pub struct CryptoArgs {
    #[command(subcommand)]
    pub command: CryptoCommand,
}

#[derive(Subcommand)]
pub enum CryptoCommand {
    /// Real-time quote for a pair (e.g. BTCUSD)
    Quote { symbol: String },
    /// All listed cryptocurrencies
    List,
    /// Daily prices, or intraday prices with --interval
    Prices(PricesArgs),
    /// Crypto news, latest or for given symbols
    News(CryptoNewsArgs),
}

#[derive(Args)]
pub struct PricesArgs {
    /// Pair symbol (e.g. BTCUSD)
    pub symbol: String,

    /// Intraday bar width: 1min, 5min, 15min, 30min, 1hour, 4hour
    #[arg(long)]
    pub interval: Option<Interval>,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Args)]
pub struct CryptoNewsArgs {
    /// Comma-separated symbols; omit for the latest headlines
    #[arg(long)]
    pub symbols: Option<String>,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Page number (0-indexed)
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Articles per page (max 250)
    #[arg(long, default_value = "20")]
    pub limit: u32,
}

pub async fn run(args: &CryptoArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let crypto = client.crypto();
    match &args.command {
        CryptoCommand::Quote { symbol } => {
            let quotes = crypto.crypto_quote(symbol).await?;
            render(&quotes, build_crypto_quote_rows, format)
        }
        CryptoCommand::List => {
            let coins = crypto.crypto_list().await?;
            render(&coins, build_crypto_info_rows, format)
        }
        CryptoCommand::Prices(a) => {
            let range = date_range(a.from, a.to);
            let prices = match a.interval {
                Some(interval) => crypto.crypto_intraday(&a.symbol, interval, &range).await?,
                None => crypto.crypto_historical_price(&a.symbol, &range).await?,
            };
            render(&prices, build_price_rows, format)
        }
        CryptoCommand::News(a) => {
            let articles = match &a.symbols {
                Some(symbols) => {
                    let query = NewsQuery::for_symbols(symbols)
                        .with_range(date_range(a.from, a.to))
                        .with_page(a.page)
                        .with_limit(a.limit);
                    crypto.search_crypto_news(&query).await?
                }
                None => crypto.crypto_news_latest(a.page, a.limit).await?,
            };
            render(&articles, build_crypto_news_rows, format)
        }
    }
}
