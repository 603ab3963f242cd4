//! Endpoint groups. Each borrows the client's [`Gateway`](crate::Gateway)
//! and exposes one method per API route.

mod company;
mod crypto;
mod financials;
mod market;

pub use self::company::CompanyEndpoints;
pub use self::crypto::CryptoEndpoints;
pub use self::financials::FinancialsEndpoints;
pub use self::market::MarketEndpoints;
