//! Typed client for the Financial Modeling Prep REST API.
//!
//! Every endpoint funnels through a single [`Gateway`], which attaches the
//! credential, serializes query parameters, classifies the response and hands
//! the JSON payload to the [`schema`] layer for validation into records.

#[macro_use]
mod macros;

mod client;
mod endpoints;
mod errors;
mod gateway;
mod query;
pub mod schema;
pub mod types;

pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::endpoints::{CompanyEndpoints, CryptoEndpoints, FinancialsEndpoints, MarketEndpoints};
pub use self::errors::{Error, SchemaValidationError};
pub use self::gateway::{ErrorEnvelope, Gateway, API_KEY_PARAM, ERROR_MESSAGE_KEY};
pub use self::query::{
    DateRange, NewsQuery, ParamValue, Params, Query, QueryCommon, ScreenerQuery, StatementQuery,
    SymbolPlacement,
};
pub use reqwest::Method;
