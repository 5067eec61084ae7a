//! Pricebook SDK for Rust.
//!
//! Provides a high-level client for the HZ office's pricebook analytics.
//! Two CSV exports (per-month product pricing and per-month shipment
//! quantities) are loaded once, cleaned, joined on canonical month and
//! product keys, and served to a presentation layer as a filterable detail
//! table, summary statistics and a gap-filled dual-axis trend series.
//!
//! # Quick start
//!
//! ```no_run
//! use pricebook_sdk::{FilterSelection, PricebookSdk};
//!
//! let sdk = PricebookSdk::builder().data_dir("./data").build().unwrap();
//!
//! // The detail table for one product
//! let selection = FilterSelection::all().with_product_id("7200");
//! let rows = sdk.detail().rows(&selection).unwrap();
//!
//! // The trend series behind the dual-axis chart
//! let trend = sdk.trend().series(&selection).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod sources;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncPricebookSdk;
pub use error::{PricebookError, Result};
pub use loader::{LoadReport, LoadedTables};
pub use models::{
    DimensionStats, FilterOptions, FilterSelection, JoinedRow, PriceRecord, ProductProfile,
    ProductStats, ProductVariant, SalesRecord, TrendPoint,
};
pub use store::DataStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sources::SourceFiles;

// ---------------------------------------------------------------------------
// PricebookSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PricebookSdk`] instance.
///
/// Use [`PricebookSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PricebookSdkBuilder::build) to create the
/// SDK.
pub struct PricebookSdkBuilder {
    data_dir: Option<PathBuf>,
    price_path: Option<PathBuf>,
    sales_path: Option<PathBuf>,
    office: String,
    floor_month: String,
}

impl Default for PricebookSdkBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            price_path: None,
            sales_path: None,
            office: config::TARGET_OFFICE.to_string(),
            floor_month: config::FLOOR_MONTH.to_string(),
        }
    }
}

impl PricebookSdkBuilder {
    /// Set the directory holding `price_all.csv` and `sales_all.csv`.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/pricebook-sdk` on Linux). Explicit per-file
    /// paths take precedence over the directory.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set an explicit path for the pricing table.
    pub fn price_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.price_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set an explicit path for the shipments table.
    pub fn sales_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sales_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Restrict the shipments table to a different office.
    ///
    /// Defaults to [`config::TARGET_OFFICE`].
    pub fn office(mut self, office: impl Into<String>) -> Self {
        self.office = office.into();
        self
    }

    /// Set the earliest reporting month kept after load (inclusive).
    ///
    /// Must be a canonical 6-digit `YYYYMM` key. Defaults to
    /// [`config::FLOOR_MONTH`].
    pub fn floor_month(mut self, floor_month: impl Into<String>) -> Self {
        self.floor_month = floor_month.into();
        self
    }

    /// Build the SDK.
    ///
    /// This resolves the source file paths but does **not** read them
    /// eagerly -- the tables are loaded lazily on first query.
    pub fn build(self) -> Result<PricebookSdk> {
        if normalize::display_month(&self.floor_month).is_none() {
            return Err(PricebookError::InvalidArgument(format!(
                "floor month '{}' is not a 6-digit YYYYMM key",
                self.floor_month
            )));
        }

        let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        let price_path = self
            .price_path
            .unwrap_or_else(|| dir.join(config::PRICE_FILE));
        let sales_path = self
            .sales_path
            .unwrap_or_else(|| dir.join(config::SALES_FILE));

        let store = DataStore::new(
            SourceFiles::new(price_path, sales_path),
            self.office,
            self.floor_month,
        );
        Ok(PricebookSdk { store })
    }
}

// ---------------------------------------------------------------------------
// PricebookSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Pricebook SDK.
///
/// Wraps a [`DataStore`] (which owns the source files and the memoized load
/// result) and exposes domain-specific query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`PricebookSdk::builder()`].
#[derive(Debug)]
pub struct PricebookSdk {
    store: DataStore,
}

impl PricebookSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PricebookSdkBuilder {
        PricebookSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the detail-table query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying store
    /// and builds the joined display table per selection.
    pub fn detail(&self) -> queries::DetailQuery<'_> {
        queries::DetailQuery::new(&self.store)
    }

    /// Access the summary-statistics query interface.
    pub fn stats(&self) -> queries::StatsQuery<'_> {
        queries::StatsQuery::new(&self.store)
    }

    /// Access the trend-series query interface.
    pub fn trend(&self) -> queries::TrendQuery<'_> {
        queries::TrendQuery::new(&self.store)
    }

    /// Access the filter-options query interface.
    pub fn filters(&self) -> queries::OptionsQuery<'_> {
        queries::OptionsQuery::new(&self.store)
    }

    // -- Data access and cache control --------------------------------------

    /// The loaded tables, reading the source files on first use.
    pub fn tables(&self) -> Result<Arc<LoadedTables>> {
        self.store.tables()
    }

    /// Row-level anomaly counters from the current load.
    pub fn report(&self) -> Result<LoadReport> {
        Ok(self.store.tables()?.report.clone())
    }

    /// Whether the cached tables are missing or behind the files on disk.
    pub fn is_stale(&self) -> Result<bool> {
        self.store.is_stale()
    }

    /// Drop the cached tables; the next query loads fresh.
    pub fn invalidate(&self) {
        self.store.invalidate()
    }

    /// Force a fresh load and return the new tables.
    pub fn reload(&self) -> Result<Arc<LoadedTables>> {
        self.store.reload()
    }

    /// Check the source files and invalidate the cache if they changed.
    ///
    /// Returns `true` if the cache was stale and has been invalidated
    /// (meaning the next query re-reads the files), `false` if already up
    /// to date.
    pub fn refresh(&self) -> Result<bool> {
        let stale = self.store.is_stale()?;
        if stale {
            self.store.invalidate();
            eprintln!("Pricebook sources changed; cached tables invalidated");
        }
        Ok(stale)
    }

    /// Return a reference to the underlying [`DataStore`] for advanced usage.
    pub fn store(&self) -> &DataStore {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PricebookSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources = self.store.sources();
        write!(
            f,
            "PricebookSdk(price={}, sales={}, loaded={})",
            sources.price_path.display(),
            sources.sales_path.display(),
            self.store.is_loaded()
        )
    }
}
