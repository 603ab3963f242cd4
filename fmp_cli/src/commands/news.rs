use anyhow::Result;
use clap::Args;
use fmp_api::{Client, NewsQuery, Query};

use crate::output::{build_stock_news_rows, render, OutputFormat};

#[derive(Args)]
pub struct NewsArgs {
    /// Comma-separated ticker symbols (e.g. AAPL,MSFT)
    pub symbols: String,

    /// Page number (0-indexed)
    #[arg(long)]
    pub page: Option<u32>,

    /// Articles per page
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: &NewsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let mut query = NewsQuery::for_symbols(&args.symbols);
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    let articles = client.company().search_stock_news(&query).await?;
    render(&articles, build_stock_news_rows, format)
}
