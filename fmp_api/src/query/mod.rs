mod common;
pub use self::common::{DateRange, ParamValue, Params, Query, QueryCommon};

mod screener;
pub use self::screener::ScreenerQuery;

mod news;
pub use self::news::NewsQuery;

mod statement;
pub use self::statement::{StatementQuery, SymbolPlacement};
