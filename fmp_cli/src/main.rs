mod commands;
mod output;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use fmp_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fmp")]
#[command(about = "Query market data from Financial Modeling Prep")]
struct Cli {
    /// API key; falls back to FMP_API_KEY (also read from .env)
    #[arg(long, env = "FMP_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API root (e.g. a local mock server)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Output format: table, json, csv or markdown
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Company profile
    Profile(commands::company::ProfileArgs),
    /// Real-time stock quote
    Quote(commands::market::QuoteArgs),
    /// Find symbols by name or identifier
    Search(commands::company::SearchArgs),
    /// Screen stocks by market and classification filters
    Screen(Box<commands::company::ScreenArgs>),
    /// Price history
    Chart(commands::market::ChartArgs),
    /// Sector and industry valuation snapshots
    Sector(commands::market::SectorArgs),
    /// Financial statements and growth
    Statement(commands::statements::StatementArgs),
    /// Cryptocurrency quotes, prices and news
    Crypto(commands::crypto::CryptoArgs),
    /// Stock news
    News(commands::news::NewsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("fmp=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow!("no API key: pass --api-key or set FMP_API_KEY"))?;
    let mut config = ClientConfig::new(api_key).with_timeout(Duration::from_secs(cli.timeout));
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = Client::with_config(config)?;
    tracing::debug!(base_url = client.gateway().base_url(), "client ready");
    let format = cli.output;

    let result = match &cli.command {
        Commands::Profile(args) => commands::company::run_profile(args, &client, format).await,
        Commands::Quote(args) => commands::market::run_quote(args, &client, format).await,
        Commands::Search(args) => commands::company::run_search(args, &client, format).await,
        Commands::Screen(args) => commands::company::run_screen(args.as_ref(), &client, format).await,
        Commands::Chart(args) => commands::market::run_chart(args, &client, format).await,
        Commands::Sector(args) => commands::market::run_sector(args, &client).await,
        Commands::Statement(args) => commands::statements::run(args, &client, format).await,
        Commands::Crypto(args) => commands::crypto::run(args, &client, format).await,
        Commands::News(args) => commands::news::run(args, &client, format).await,
    };

    client.close();
    result
}
