use super::common::{Params, Query, QueryCommon};
use crate::types::Period;

/// Where the ticker goes in a financial-statement request.
///
/// The API has served these endpoints both as `income-statement/AAPL` and as
/// `income-statement?symbol=AAPL`; which one a deployment expects is a
/// per-endpoint fact, so it is chosen per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `{endpoint}/{symbol}`.
    #[default]
    Path,
    /// `{endpoint}?symbol={symbol}`.
    Query,
}

/// Query for the financial-statement family of endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct StatementQuery {
    pub common: QueryCommon,
    pub symbol: String,
    pub period: Period,
    pub placement: SymbolPlacement,
}

impl Query for StatementQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> Params {
        let params = match self.placement {
            SymbolPlacement::Path => Params::new(),
            SymbolPlacement::Query => Params::new().with("symbol", self.symbol.as_str()),
        };
        let params = params.with("period", self.period.as_str());
        self.common.apply(params)
    }
}

impl StatementQuery {
    /// Annual statements for `symbol`, symbol in the path.
    pub fn new(symbol: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            symbol: symbol.to_string(),
            period: Period::default(),
            placement: SymbolPlacement::default(),
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn with_placement(mut self, placement: SymbolPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Request path for `endpoint` under this query's placement. A symbol in
    /// the path is percent-encoded as a single segment.
    pub fn path(&self, endpoint: &str) -> String {
        match self.placement {
            SymbolPlacement::Path => format!("{}/{}", endpoint, urlencoding::encode(&self.symbol)),
            SymbolPlacement::Query => endpoint.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_placement() {
        let query = StatementQuery::new("AAPL").with_limit(5);
        assert_eq!(query.path("income-statement"), "income-statement/AAPL");
        assert_eq!(
            query.to_params().to_pairs(),
            vec![
                ("period".to_string(), "annual".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn path_symbol_is_a_single_segment() {
        let query = StatementQuery::new("BRK.B?x=1#y");
        assert_eq!(query.path("income-statement"), "income-statement/BRK.B%3Fx%3D1%23y");
        assert_eq!(StatementQuery::new("BRK.B").path("income-statement"), "income-statement/BRK.B");
    }

    #[test]
    fn query_placement() {
        let query = StatementQuery::new("MSFT")
            .with_period(Period::Quarter)
            .with_placement(SymbolPlacement::Query);
        assert_eq!(query.path("balance-sheet-statement"), "balance-sheet-statement");
        assert_eq!(
            query.to_params().to_pairs(),
            vec![
                ("symbol".to_string(), "MSFT".to_string()),
                ("period".to_string(), "quarter".to_string()),
            ]
        );
    }
}
