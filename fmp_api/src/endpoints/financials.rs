use crate::{
    gateway::Gateway,
    query::{Query, StatementQuery},
    schema::Record,
    types::{BalanceSheet, CashFlowStatement, FinancialGrowth, IncomeStatement},
    Error,
};

/// Financial statements and growth metrics.
#[derive(Clone, Copy, Debug)]
pub struct FinancialsEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> FinancialsEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    async fn statements<T: Record>(
        &self,
        endpoint: &str,
        query: &StatementQuery,
    ) -> Result<Vec<T>, Error> {
        self.gateway
            .get_records(&query.path(endpoint), query.to_params())
            .await
    }

    pub async fn income_statement(
        &self,
        query: &StatementQuery,
    ) -> Result<Vec<IncomeStatement>, Error> {
        self.statements("income-statement", query).await
    }

    pub async fn balance_sheet(&self, query: &StatementQuery) -> Result<Vec<BalanceSheet>, Error> {
        self.statements("balance-sheet-statement", query).await
    }

    pub async fn cash_flow_statement(
        &self,
        query: &StatementQuery,
    ) -> Result<Vec<CashFlowStatement>, Error> {
        self.statements("cash-flow-statement", query).await
    }

    /// Period-over-period growth rates.
    pub async fn financial_growth(
        &self,
        query: &StatementQuery,
    ) -> Result<Vec<FinancialGrowth>, Error> {
        self.statements("financial-growth", query).await
    }
}
