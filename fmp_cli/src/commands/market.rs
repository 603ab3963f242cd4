use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fmp_api::types::Interval;
use fmp_api::{Client, DateRange};

use crate::output::{build_bar_rows, build_quote_rows, print_json, render, OutputFormat};

#[derive(Args)]
pub struct QuoteArgs {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: String,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: String,

    /// Bar width: 1min, 5min, 15min, 30min, 1hour, 4hour, 1day
    #[arg(long, default_value = "1day")]
    pub interval: Interval,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Daily end-of-day series instead of bars; prints raw JSON
    #[arg(long)]
    pub eod: bool,

    /// With --eod, number of days to return
    #[arg(long, requires = "eod")]
    pub timeseries: Option<u32>,
}

#[derive(Args)]
pub struct SectorArgs {
    #[command(subcommand)]
    pub command: SectorCommand,
}

#[derive(Subcommand)]
pub enum SectorCommand {
    /// P/E ratios by sector on a date
    Pe(SnapshotArgs),
    /// P/E ratios by industry on a date
    IndustryPe(SnapshotArgs),
    /// Average daily change by industry on a date
    Performance(SnapshotArgs),
    /// P/E history for one sector
    History(HistoryArgs),
}

#[derive(Args)]
pub struct SnapshotArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Filter by exchange (e.g. NASDAQ)
    #[arg(long)]
    pub exchange: Option<String>,

    /// Filter by sector or industry name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Sector name (e.g. Energy)
    pub sector: String,

    #[arg(long)]
    pub exchange: Option<String>,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,
}

pub async fn run_quote(args: &QuoteArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let quotes = client.market().quote(&args.symbol).await?;
    render(&quotes, build_quote_rows, format)
}

pub async fn run_chart(args: &ChartArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let range = date_range(args.from, args.to);
    let market = client.market();
    if args.eod {
        let raw = market
            .historical_price(&args.symbol, &range, args.timeseries)
            .await?;
        print_json(&raw);
        return Ok(());
    }
    let bars = market
        .historical_chart(&args.symbol, args.interval, &range)
        .await?;
    render(&bars, build_bar_rows, format)
}

/// Sector and industry aggregates have no fixed record shape and are printed
/// as JSON regardless of the output format.
pub async fn run_sector(args: &SectorArgs, client: &Client) -> Result<()> {
    let market = client.market();
    let raw = match &args.command {
        SectorCommand::Pe(a) => {
            market
                .sector_pe(a.date, a.exchange.as_deref(), a.name.as_deref())
                .await?
        }
        SectorCommand::IndustryPe(a) => {
            market
                .industry_pe(a.date, a.exchange.as_deref(), a.name.as_deref())
                .await?
        }
        SectorCommand::Performance(a) => {
            market
                .industry_performance(a.date, a.exchange.as_deref(), a.name.as_deref())
                .await?
        }
        SectorCommand::History(a) => {
            market
                .historical_sector_pe(&a.sector, a.exchange.as_deref(), &date_range(a.from, a.to))
                .await?
        }
    };
    print_json(&raw);
    Ok(())
}

pub(crate) fn date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> DateRange {
    DateRange { from, to }
}
