use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::types::Period;
use fmp_api::{Client, Query, StatementQuery, SymbolPlacement};

use crate::output::{
    build_balance_rows, build_cash_flow_rows, build_growth_rows, build_income_rows, render,
    OutputFormat,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatementKind {
    Income,
    Balance,
    CashFlow,
    Growth,
}

#[derive(Args)]
pub struct StatementArgs {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: String,

    /// Which statement to fetch
    #[arg(long, value_enum, default_value = "income")]
    pub kind: StatementKind,

    /// Reporting period: annual or quarter
    #[arg(long, default_value = "annual")]
    pub period: Period,

    /// Number of periods to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Send the symbol as a query parameter instead of a path segment
    #[arg(long)]
    pub symbol_param: bool,
}

pub async fn run(args: &StatementArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = build_query(args);
    let financials = client.financials();
    match args.kind {
        StatementKind::Income => {
            let rows = financials.income_statement(&query).await?;
            render(&rows, build_income_rows, format)
        }
        StatementKind::Balance => {
            let rows = financials.balance_sheet(&query).await?;
            render(&rows, build_balance_rows, format)
        }
        StatementKind::CashFlow => {
            let rows = financials.cash_flow_statement(&query).await?;
            render(&rows, build_cash_flow_rows, format)
        }
        StatementKind::Growth => {
            let rows = financials.financial_growth(&query).await?;
            render(&rows, build_growth_rows, format)
        }
    }
}

fn build_query(args: &StatementArgs) -> StatementQuery {
    let placement = if args.symbol_param {
        SymbolPlacement::Query
    } else {
        SymbolPlacement::Path
    };
    let query = StatementQuery::new(&args.symbol)
        .with_period(args.period)
        .with_placement(placement);
    match args.limit {
        Some(limit) => query.with_limit(limit),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        statement: StatementArgs,
    }

    #[test]
    fn defaults_to_annual_income_in_path() {
        let harness = Harness::parse_from(["fmp", "AAPL"]);
        assert_eq!(harness.statement.kind, StatementKind::Income);
        let query = build_query(&harness.statement);
        assert_eq!(query.path("income-statement"), "income-statement/AAPL");
        assert_eq!(query.period, Period::Annual);
        assert_eq!(query.common.limit, None);
    }

    #[test]
    fn quarterly_cash_flow_with_symbol_param() {
        let harness = Harness::parse_from([
            "fmp",
            "MSFT",
            "--kind",
            "cash-flow",
            "--period",
            "quarter",
            "--limit",
            "4",
            "--symbol-param",
        ]);
        assert_eq!(harness.statement.kind, StatementKind::CashFlow);
        let query = build_query(&harness.statement);
        assert_eq!(query.placement, SymbolPlacement::Query);
        assert_eq!(query.period, Period::Quarter);
        assert_eq!(query.common.limit, Some(4));
    }
}
