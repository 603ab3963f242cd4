//! Financial-statement and growth records.
//!
//! Every statement shares the same header (`date`, `symbol`, currency, CIK,
//! filing dates, `period`); all line items are nullable floats.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Self::Annual),
            "quarter" => Ok(Self::Quarter),
            other => Err(format!("unknown period '{}', expected annual or quarter", other)),
        }
    }
}

record! {
    /// Income statement for one reporting period.
    pub struct IncomeStatement {
        pub date: String => "date",
        pub symbol: String => "symbol",
        pub reported_currency: String => "reportedCurrency",
        pub cik: String => "cik",
        pub filling_date: Option<String> => "fillingDate",
        pub accepted_date: String => "acceptedDate",
        pub calendar_year: Option<String> => "calendarYear",
        pub period: String => "period",
        pub revenue: Option<f64> => "revenue",
        pub cost_of_revenue: Option<f64> => "costOfRevenue",
        pub gross_profit: Option<f64> => "grossProfit",
        pub gross_profit_ratio: Option<f64> => "grossProfitRatio",
        pub research_and_development_expenses: Option<f64> => "researchAndDevelopmentExpenses",
        pub general_and_administrative_expenses: Option<f64> => "generalAndAdministrativeExpenses",
        pub selling_and_marketing_expenses: Option<f64> => "sellingAndMarketingExpenses",
        pub selling_general_and_administrative_expenses: Option<f64> => "sellingGeneralAndAdministrativeExpenses",
        pub other_expenses: Option<f64> => "otherExpenses",
        pub operating_expenses: Option<f64> => "operatingExpenses",
        pub cost_and_expenses: Option<f64> => "costAndExpenses",
        pub interest_income: Option<f64> => "interestIncome",
        pub interest_expense: Option<f64> => "interestExpense",
        pub depreciation_and_amortization: Option<f64> => "depreciationAndAmortization",
        pub ebitda: Option<f64> => "ebitda",
        pub ebitda_ratio: Option<f64> => "ebitdaratio",
        pub operating_income: Option<f64> => "operatingIncome",
        pub operating_income_ratio: Option<f64> => "operatingIncomeRatio",
        pub total_other_income_expenses_net: Option<f64> => "totalOtherIncomeExpensesNet",
        pub income_before_tax: Option<f64> => "incomeBeforeTax",
        pub income_before_tax_ratio: Option<f64> => "incomeBeforeTaxRatio",
        pub income_tax_expense: Option<f64> => "incomeTaxExpense",
        pub net_income: Option<f64> => "netIncome",
        pub net_income_ratio: Option<f64> => "netIncomeRatio",
        pub eps: Option<f64> => "eps",
        pub eps_diluted: Option<f64> => "epsdiluted",
        pub weighted_average_shs_out: Option<f64> => "weightedAverageShsOut",
        pub weighted_average_shs_out_dil: Option<f64> => "weightedAverageShsOutDil",
    }
}

impl IncomeStatement {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }

    /// Net income over revenue, when both are reported and revenue is positive.
    pub fn net_margin(&self) -> Option<f64> {
        match (self.net_income, self.revenue) {
            (Some(net), Some(revenue)) if revenue > 0.0 => Some(net / revenue),
            _ => None,
        }
    }
}

record! {
    /// Balance sheet snapshot for one reporting period.
    pub struct BalanceSheet {
        pub date: String => "date",
        pub symbol: String => "symbol",
        pub reported_currency: String => "reportedCurrency",
        pub cik: String => "cik",
        pub filling_date: Option<String> => "fillingDate",
        pub accepted_date: String => "acceptedDate",
        pub calendar_year: Option<String> => "calendarYear",
        pub period: String => "period",
        pub cash_and_cash_equivalents: Option<f64> => "cashAndCashEquivalents",
        pub short_term_investments: Option<f64> => "shortTermInvestments",
        pub cash_and_short_term_investments: Option<f64> => "cashAndShortTermInvestments",
        pub net_receivables: Option<f64> => "netReceivables",
        pub inventory: Option<f64> => "inventory",
        pub other_current_assets: Option<f64> => "otherCurrentAssets",
        pub total_current_assets: Option<f64> => "totalCurrentAssets",
        pub property_plant_equipment_net: Option<f64> => "propertyPlantEquipmentNet",
        pub goodwill: Option<f64> => "goodwill",
        pub intangible_assets: Option<f64> => "intangibleAssets",
        pub goodwill_and_intangible_assets: Option<f64> => "goodwillAndIntangibleAssets",
        pub long_term_investments: Option<f64> => "longTermInvestments",
        pub tax_assets: Option<f64> => "taxAssets",
        pub other_non_current_assets: Option<f64> => "otherNonCurrentAssets",
        pub total_non_current_assets: Option<f64> => "totalNonCurrentAssets",
        pub other_assets: Option<f64> => "otherAssets",
        pub total_assets: Option<f64> => "totalAssets",
        pub account_payables: Option<f64> => "accountPayables",
        pub short_term_debt: Option<f64> => "shortTermDebt",
        pub tax_payables: Option<f64> => "taxPayables",
        pub deferred_revenue: Option<f64> => "deferredRevenue",
        pub other_current_liabilities: Option<f64> => "otherCurrentLiabilities",
        pub total_current_liabilities: Option<f64> => "totalCurrentLiabilities",
        pub long_term_debt: Option<f64> => "longTermDebt",
        pub deferred_revenue_non_current: Option<f64> => "deferredRevenueNonCurrent",
        pub deferred_tax_liabilities_non_current: Option<f64> => "deferredTaxLiabilitiesNonCurrent",
        pub other_non_current_liabilities: Option<f64> => "otherNonCurrentLiabilities",
        pub total_non_current_liabilities: Option<f64> => "totalNonCurrentLiabilities",
        pub other_liabilities: Option<f64> => "otherLiabilities",
        pub capital_lease_obligations: Option<f64> => "capitalLeaseObligations",
        pub total_liabilities: Option<f64> => "totalLiabilities",
        pub preferred_stock: Option<f64> => "preferredStock",
        pub common_stock: Option<f64> => "commonStock",
        pub retained_earnings: Option<f64> => "retainedEarnings",
        pub accumulated_other_comprehensive_income_loss: Option<f64> => "accumulatedOtherComprehensiveIncomeLoss",
        pub othertotal_stockholders_equity: Option<f64> => "othertotalStockholdersEquity",
        pub total_stockholders_equity: Option<f64> => "totalStockholdersEquity",
        pub total_equity: Option<f64> => "totalEquity",
        pub total_liabilities_and_stockholders_equity: Option<f64> => "totalLiabilitiesAndStockholdersEquity",
        pub minority_interest: Option<f64> => "minorityInterest",
        pub total_liabilities_and_total_equity: Option<f64> => "totalLiabilitiesAndTotalEquity",
        pub total_investments: Option<f64> => "totalInvestments",
        pub total_debt: Option<f64> => "totalDebt",
        pub net_debt: Option<f64> => "netDebt",
    }
}

impl BalanceSheet {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }
}

record! {
    /// Cash-flow statement for one reporting period.
    pub struct CashFlowStatement {
        pub date: String => "date",
        pub symbol: String => "symbol",
        pub reported_currency: String => "reportedCurrency",
        pub cik: String => "cik",
        pub filling_date: Option<String> => "fillingDate",
        pub accepted_date: String => "acceptedDate",
        pub calendar_year: Option<String> => "calendarYear",
        pub period: String => "period",
        pub net_income: Option<f64> => "netIncome",
        pub depreciation_and_amortization: Option<f64> => "depreciationAndAmortization",
        pub deferred_income_tax: Option<f64> => "deferredIncomeTax",
        pub stock_based_compensation: Option<f64> => "stockBasedCompensation",
        pub change_in_working_capital: Option<f64> => "changeInWorkingCapital",
        pub accounts_receivables: Option<f64> => "accountsReceivables",
        pub inventory: Option<f64> => "inventory",
        pub accounts_payables: Option<f64> => "accountsPayables",
        pub other_working_capital: Option<f64> => "otherWorkingCapital",
        pub other_non_cash_items: Option<f64> => "otherNonCashItems",
        pub net_cash_provided_by_operating_activities: Option<f64> => "netCashProvidedByOperatingActivities",
        pub investments_in_property_plant_and_equipment: Option<f64> => "investmentsInPropertyPlantAndEquipment",
        pub acquisitions_net: Option<f64> => "acquisitionsNet",
        pub purchases_of_investments: Option<f64> => "purchasesOfInvestments",
        pub sales_maturities_of_investments: Option<f64> => "salesMaturitiesOfInvestments",
        // "Activites" is the API's spelling.
        pub other_investing_activites: Option<f64> => "otherInvestingActivites",
        pub net_cash_used_for_investing_activites: Option<f64> => "netCashUsedForInvestingActivites",
        pub debt_repayment: Option<f64> => "debtRepayment",
        pub common_stock_issued: Option<f64> => "commonStockIssued",
        pub common_stock_repurchased: Option<f64> => "commonStockRepurchased",
        pub dividends_paid: Option<f64> => "dividendsPaid",
        pub other_financing_activites: Option<f64> => "otherFinancingActivites",
        pub net_cash_used_provided_by_financing_activities: Option<f64> => "netCashUsedProvidedByFinancingActivities",
        pub effect_of_forex_changes_on_cash: Option<f64> => "effectOfForexChangesOnCash",
        pub net_change_in_cash: Option<f64> => "netChangeInCash",
        pub cash_at_end_of_period: Option<f64> => "cashAtEndOfPeriod",
        pub cash_at_beginning_of_period: Option<f64> => "cashAtBeginningOfPeriod",
        pub operating_cash_flow: Option<f64> => "operatingCashFlow",
        pub capital_expenditure: Option<f64> => "capitalExpenditure",
        pub free_cash_flow: Option<f64> => "freeCashFlow",
    }
}

impl CashFlowStatement {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }
}

record! {
    /// Period-over-period growth rates.
    pub struct FinancialGrowth {
        pub symbol: String => "symbol",
        pub date: String => "date",
        pub period: String => "period",
        pub revenue_growth: Option<f64> => "revenueGrowth",
        pub gross_profit_growth: Option<f64> => "grossProfitGrowth",
        pub ebit_growth: Option<f64> => "ebitgrowth",
        pub operating_income_growth: Option<f64> => "operatingIncomeGrowth",
        pub net_income_growth: Option<f64> => "netIncomeGrowth",
        pub eps_growth: Option<f64> => "epsgrowth",
        pub eps_diluted_growth: Option<f64> => "epsdilutedGrowth",
        pub operating_cash_flow_growth: Option<f64> => "operatingCashFlowGrowth",
        pub free_cash_flow_growth: Option<f64> => "freeCashFlowGrowth",
        pub asset_growth: Option<f64> => "assetGrowth",
        pub book_value_per_share_growth: Option<f64> => "bookValueperShareGrowth",
        pub debt_growth: Option<f64> => "debtGrowth",
        pub receivables_growth: Option<f64> => "receivablesGrowth",
        pub inventory_growth: Option<f64> => "inventoryGrowth",
        pub rd_expense_growth: Option<f64> => "rdexpenseGrowth",
        pub sga_expenses_growth: Option<f64> => "sgaexpensesGrowth",
    }
}

impl FinancialGrowth {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        super::parse_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::Record;

    fn header() -> serde_json::Value {
        json!({
            "date": "2023-09-30",
            "symbol": "AAPL",
            "reportedCurrency": "USD",
            "cik": "0000320193",
            "fillingDate": "2023-11-03",
            "acceptedDate": "2023-11-02 18:08:27",
            "calendarYear": "2023",
            "period": "FY"
        })
    }

    #[test]
    fn irregular_wire_names_are_mapped() {
        let mut value = header();
        value["ebitdaratio"] = json!(0.33);
        value["epsdiluted"] = json!(6.13);
        value["netIncome"] = json!(96_995_000_000i64);
        value["revenue"] = json!(383_285_000_000i64);
        let statement = IncomeStatement::from_json(&value).unwrap();
        assert_eq!(statement.ebitda_ratio, Some(0.33));
        assert_eq!(statement.eps_diluted, Some(6.13));
        assert_eq!(statement.net_income, Some(96_995_000_000.0));
        assert!(statement.net_margin().unwrap() > 0.25);
        assert_eq!(statement.parsed_date(), NaiveDate::from_ymd_opt(2023, 9, 30));
        assert_eq!(
            IncomeStatement::schema().canonical_name("weightedAverageShsOutDil"),
            Some("weighted_average_shs_out_dil")
        );
    }

    #[test]
    fn statement_header_fields_are_required() {
        let mut value = header();
        value.as_object_mut().unwrap().remove("acceptedDate");
        let err = BalanceSheet::from_json(&value).unwrap_err();
        assert_eq!(err.field(), Some("accepted_date"));
        assert_eq!(err.entity(), "BalanceSheet");
    }

    #[test]
    fn line_items_default_to_none() {
        let flow = CashFlowStatement::from_json(&header()).unwrap();
        assert_eq!(flow.free_cash_flow, None);
        assert_eq!(flow.period, "FY");
    }

    #[test]
    fn growth_uses_lowercase_aliases() {
        let growth = FinancialGrowth::from_json(&json!({
            "symbol": "AAPL", "date": "2023-09-30", "period": "FY",
            "ebitgrowth": -0.04, "bookValueperShareGrowth": 0.24
        }))
        .unwrap();
        assert_eq!(growth.ebit_growth, Some(-0.04));
        assert_eq!(growth.book_value_per_share_growth, Some(0.24));
    }

    #[test]
    fn period_parses() {
        assert_eq!("quarter".parse::<Period>(), Ok(Period::Quarter));
        assert_eq!(Period::default().as_str(), "annual");
        assert!("monthly".parse::<Period>().is_err());
    }
}
