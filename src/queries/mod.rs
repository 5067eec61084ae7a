//! Query modules for the Pricebook SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`DataStore`](crate::store::DataStore) and exposes methods taking a
//! [`FilterSelection`](crate::models::FilterSelection) and returning
//! `Result<T>` with serde-serializable payloads.

pub mod detail;
pub mod options;
pub mod stats;
pub mod trend;

pub use detail::DetailQuery;
pub use options::OptionsQuery;
pub use stats::StatsQuery;
pub use trend::TrendQuery;
