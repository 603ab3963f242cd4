use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use fmp_api::types::{
    BalanceSheet, CashFlowStatement, CompanyProfile, CryptoHistoricalPrice, CryptoInfo,
    CryptoNews, CryptoQuote, FinancialGrowth, HistoricalPrice, IncomeStatement, Quote,
    SearchResult, StockNews, StockScreenerResult,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct QuoteRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
    #[tabled(rename = "Day Range")]
    #[serde(rename = "Day Range")]
    day_range: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled, Serialize)]
pub struct ProfileRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Industry")]
    #[serde(rename = "Industry")]
    industry: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "CEO")]
    #[serde(rename = "CEO")]
    ceo: String,
}

#[derive(Tabled, Serialize)]
pub struct SearchRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Exchange")]
    #[serde(rename = "Exchange")]
    exchange: String,
}

#[derive(Tabled, Serialize)]
pub struct ScreenerRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Beta")]
    #[serde(rename = "Beta")]
    beta: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Exchange")]
    #[serde(rename = "Exchange")]
    exchange: String,
}

#[derive(Tabled, Serialize)]
pub struct BarRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
pub struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
pub struct CryptoInfoRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Exchange")]
    #[serde(rename = "Exchange")]
    exchange: String,
    #[tabled(rename = "Circulating Supply")]
    #[serde(rename = "Circulating Supply")]
    circulating_supply: String,
}

#[derive(Tabled, Serialize)]
pub struct NewsRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Publisher")]
    #[serde(rename = "Publisher")]
    publisher: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
}

#[derive(Tabled, Serialize)]
pub struct IncomeRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Gross Profit")]
    #[serde(rename = "Gross Profit")]
    gross_profit: String,
    #[tabled(rename = "Operating Income")]
    #[serde(rename = "Operating Income")]
    operating_income: String,
    #[tabled(rename = "Net Income")]
    #[serde(rename = "Net Income")]
    net_income: String,
    #[tabled(rename = "EPS (diluted)")]
    #[serde(rename = "EPS (diluted)")]
    eps_diluted: String,
}

#[derive(Tabled, Serialize)]
pub struct BalanceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Total Assets")]
    #[serde(rename = "Total Assets")]
    total_assets: String,
    #[tabled(rename = "Total Liabilities")]
    #[serde(rename = "Total Liabilities")]
    total_liabilities: String,
    #[tabled(rename = "Equity")]
    #[serde(rename = "Equity")]
    equity: String,
    #[tabled(rename = "Cash")]
    #[serde(rename = "Cash")]
    cash: String,
    #[tabled(rename = "Net Debt")]
    #[serde(rename = "Net Debt")]
    net_debt: String,
}

#[derive(Tabled, Serialize)]
pub struct CashFlowRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Operating CF")]
    #[serde(rename = "Operating CF")]
    operating_cash_flow: String,
    #[tabled(rename = "CapEx")]
    #[serde(rename = "CapEx")]
    capital_expenditure: String,
    #[tabled(rename = "Free CF")]
    #[serde(rename = "Free CF")]
    free_cash_flow: String,
    #[tabled(rename = "Dividends")]
    #[serde(rename = "Dividends")]
    dividends_paid: String,
}

#[derive(Tabled, Serialize)]
pub struct GrowthRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Net Income")]
    #[serde(rename = "Net Income")]
    net_income: String,
    #[tabled(rename = "EPS")]
    #[serde(rename = "EPS")]
    eps: String,
    #[tabled(rename = "Free CF")]
    #[serde(rename = "Free CF")]
    free_cash_flow: String,
}

// -- Row builders --

pub fn build_quote_rows(quotes: &[Quote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            symbol: q.symbol.clone(),
            name: q.name.clone().unwrap_or_default(),
            price: format!("{:.2}", q.price),
            change: format_pct(q.changes_percentage),
            day_range: match (q.day_low, q.day_high) {
                (Some(low), Some(high)) => format!("{:.2}-{:.2}", low, high),
                _ => "-".to_string(),
            },
            volume: format_count(q.volume.map(|v| v as f64)),
            market_cap: format_money(q.market_cap),
        })
        .collect()
}

pub fn build_crypto_quote_rows(quotes: &[CryptoQuote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            symbol: q.symbol.clone(),
            name: q.name.clone().unwrap_or_default(),
            price: format!("{:.2}", q.price),
            change: format_pct(q.changes_percentage),
            day_range: match (q.day_low, q.day_high) {
                (Some(low), Some(high)) => format!("{:.2}-{:.2}", low, high),
                _ => "-".to_string(),
            },
            volume: format_count(q.volume),
            market_cap: format_money(q.market_cap),
        })
        .collect()
}

pub fn build_profile_rows(profiles: &[CompanyProfile]) -> Vec<ProfileRow> {
    profiles
        .iter()
        .map(|p| ProfileRow {
            symbol: p.symbol.clone(),
            company: p.company_name.clone(),
            price: format!("{:.2}", p.price),
            market_cap: format_money(p.mkt_cap),
            sector: p.sector.clone().unwrap_or_default(),
            industry: p.industry.clone().unwrap_or_default(),
            country: p.country.clone().unwrap_or_default(),
            ceo: p.ceo.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_search_rows(results: &[SearchResult]) -> Vec<SearchRow> {
    results
        .iter()
        .map(|r| SearchRow {
            symbol: r.symbol.clone(),
            name: r.name.clone(),
            currency: r.currency.clone().unwrap_or_default(),
            exchange: r
                .exchange_short_name
                .clone()
                .or_else(|| r.stock_exchange.clone())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_screener_rows(results: &[StockScreenerResult]) -> Vec<ScreenerRow> {
    results
        .iter()
        .map(|r| ScreenerRow {
            symbol: r.symbol.clone(),
            company: r.company_name.clone(),
            price: r.price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "-".to_string()),
            market_cap: format_money(r.market_cap),
            beta: r.beta.map(|b| format!("{:.2}", b)).unwrap_or_else(|| "-".to_string()),
            sector: r.sector.clone().unwrap_or_default(),
            exchange: r.exchange_short_name.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_bar_rows(bars: &[HistoricalPrice]) -> Vec<BarRow> {
    bars.iter()
        .map(|b| BarRow {
            date: b.date.clone(),
            open: format!("{:.2}", b.open),
            high: format!("{:.2}", b.high),
            low: format!("{:.2}", b.low),
            close: format!("{:.2}", b.close),
            volume: format_count(Some(b.volume as f64)),
        })
        .collect()
}

pub fn build_price_rows(prices: &[CryptoHistoricalPrice]) -> Vec<PriceRow> {
    prices
        .iter()
        .map(|p| PriceRow {
            date: p.date.clone(),
            symbol: p.symbol.clone(),
            price: format!("{:.2}", p.price),
            volume: format_count(p.volume),
        })
        .collect()
}

pub fn build_crypto_info_rows(coins: &[CryptoInfo]) -> Vec<CryptoInfoRow> {
    coins
        .iter()
        .map(|c| CryptoInfoRow {
            symbol: c.symbol.clone(),
            name: c.name.clone(),
            exchange: c.exchange.clone().unwrap_or_default(),
            circulating_supply: format_count(c.circulating_supply),
        })
        .collect()
}

pub fn build_stock_news_rows(articles: &[StockNews]) -> Vec<NewsRow> {
    articles
        .iter()
        .map(|a| NewsRow {
            published: a.published_date.clone(),
            symbol: a.symbol.clone(),
            publisher: a.publisher.clone(),
            title: a.title.clone(),
        })
        .collect()
}

pub fn build_crypto_news_rows(articles: &[CryptoNews]) -> Vec<NewsRow> {
    articles
        .iter()
        .map(|a| NewsRow {
            published: a.published_date.clone(),
            symbol: a.symbol.clone(),
            publisher: a.publisher.clone(),
            title: a.title.clone(),
        })
        .collect()
}

pub fn build_income_rows(statements: &[IncomeStatement]) -> Vec<IncomeRow> {
    statements
        .iter()
        .map(|s| IncomeRow {
            date: s.date.clone(),
            period: s.period.clone(),
            revenue: format_money(s.revenue),
            gross_profit: format_money(s.gross_profit),
            operating_income: format_money(s.operating_income),
            net_income: format_money(s.net_income),
            eps_diluted: s.eps_diluted.map(|e| format!("{:.2}", e)).unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_balance_rows(sheets: &[BalanceSheet]) -> Vec<BalanceRow> {
    sheets
        .iter()
        .map(|s| BalanceRow {
            date: s.date.clone(),
            period: s.period.clone(),
            total_assets: format_money(s.total_assets),
            total_liabilities: format_money(s.total_liabilities),
            equity: format_money(s.total_stockholders_equity),
            cash: format_money(s.cash_and_cash_equivalents),
            net_debt: format_money(s.net_debt),
        })
        .collect()
}

pub fn build_cash_flow_rows(statements: &[CashFlowStatement]) -> Vec<CashFlowRow> {
    statements
        .iter()
        .map(|s| CashFlowRow {
            date: s.date.clone(),
            period: s.period.clone(),
            operating_cash_flow: format_money(s.operating_cash_flow),
            capital_expenditure: format_money(s.capital_expenditure),
            free_cash_flow: format_money(s.free_cash_flow),
            dividends_paid: format_money(s.dividends_paid),
        })
        .collect()
}

pub fn build_growth_rows(growth: &[FinancialGrowth]) -> Vec<GrowthRow> {
    growth
        .iter()
        .map(|g| GrowthRow {
            date: g.date.clone(),
            period: g.period.clone(),
            revenue: format_ratio(g.revenue_growth),
            net_income: format_ratio(g.net_income_growth),
            eps: format_ratio(g.eps_growth),
            free_cash_flow: format_ratio(g.free_cash_flow_growth),
        })
        .collect()
}

// -- Rendering --

/// Prints `records` in `format`. JSON carries the full records; the other
/// formats go through `build` to produce display rows.
pub fn render<T, R>(records: &[T], build: fn(&[T]) -> Vec<R>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(&records),
        OutputFormat::Table => println!("{}", Table::new(build(records))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build(records));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(std::io::stdout(), build(records))?,
    }
    Ok(())
}

pub fn write_csv<W: Write, R: Serialize>(writer: W, rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_money(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("{}${:.2}T", sign, abs / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{}${:.2}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}${:.2}", sign, abs)
    }
}

fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 1_000_000_000.0 => format!("{:.2}B", v / 1_000_000_000.0),
        Some(v) if v >= 1_000_000.0 => format!("{:.1}M", v / 1_000_000.0),
        Some(v) if v >= 1_000.0 => format!("{:.1}K", v / 1_000.0),
        Some(v) => format!("{}", v),
        None => "-".to_string(),
    }
}

/// The API reports `changesPercentage` already scaled to percent.
fn format_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:+.2}%", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Growth fields are fractions (0.05 is 5%).
fn format_ratio(value: Option<f64>) -> String {
    format_pct(value.map(|v| v * 100.0))
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
