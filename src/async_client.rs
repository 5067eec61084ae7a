//! Async wrapper around [`PricebookSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! queries are CPU-bound passes over small in-memory tables, so each call is
//! short-lived.
//!
//! # Example
//!
//! ```no_run
//! # use pricebook_sdk::{AsyncPricebookSdk, FilterSelection};
//! # async fn example() -> pricebook_sdk::Result<()> {
//! let sdk = AsyncPricebookSdk::builder().data_dir("./data").build().await?;
//!
//! // Run any sync SDK method via closure
//! let rows = sdk.run(|s| s.detail().rows(&FilterSelection::all())).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{PricebookError, Result};
use crate::loader::LoadReport;
use crate::models::{
    DimensionStats, FilterOptions, FilterSelection, JoinedRow, ProductProfile, ProductStats,
    TrendPoint,
};
use crate::PricebookSdk;

// ---------------------------------------------------------------------------
// AsyncPricebookSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPricebookSdk`] instance.
#[derive(Default)]
pub struct AsyncPricebookSdkBuilder {
    data_dir: Option<PathBuf>,
    price_path: Option<PathBuf>,
    sales_path: Option<PathBuf>,
    office: Option<String>,
    floor_month: Option<String>,
}

impl AsyncPricebookSdkBuilder {
    /// Set the directory holding the two source files.
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
    pub fn office(mut self, office: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self
    }

    /// Set the earliest reporting month kept after load (inclusive).
    pub fn floor_month(mut self, floor_month: impl Into<String>) -> Self {
        self.floor_month = Some(floor_month.into());
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool so it won't block the
    /// async event loop.
    pub async fn build(self) -> Result<AsyncPricebookSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = PricebookSdk::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(path) = self.price_path {
                builder = builder.price_path(path);
            }
            if let Some(path) = self.sales_path {
                builder = builder.sales_path(path);
            }
            if let Some(office) = self.office {
                builder = builder.office(office);
            }
            if let Some(floor) = self.floor_month {
                builder = builder.floor_month(floor);
            }
            let sdk = builder.build()?;
            Ok(AsyncPricebookSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| PricebookError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPricebookSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PricebookSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`PricebookSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncPricebookSdk {
    inner: Arc<Mutex<PricebookSdk>>,
}

impl AsyncPricebookSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPricebookSdkBuilder {
        AsyncPricebookSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&PricebookSdk` reference and should return a
    /// `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PricebookSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| PricebookError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PricebookError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Build the detail table asynchronously.
    pub async fn detail_rows(&self, selection: FilterSelection) -> Result<Vec<JoinedRow>> {
        self.run(move |s| s.detail().rows(&selection)).await
    }

    /// Build the per-dimension summary asynchronously.
    pub async fn dimension_stats(
        &self,
        selection: FilterSelection,
    ) -> Result<Vec<DimensionStats>> {
        self.run(move |s| s.stats().by_dimension(&selection)).await
    }

    /// Build the per-product summary asynchronously.
    pub async fn product_stats(&self, selection: FilterSelection) -> Result<Vec<ProductStats>> {
        self.run(move |s| s.stats().by_product(&selection)).await
    }

    /// Build a single product's profile asynchronously.
    pub async fn product_profile(&self, product_id: String) -> Result<Option<ProductProfile>> {
        self.run(move |s| s.stats().profile(&product_id)).await
    }

    /// Build the trend series asynchronously.
    pub async fn trend_series(&self, selection: FilterSelection) -> Result<Vec<TrendPoint>> {
        self.run(move |s| s.trend().series(&selection)).await
    }

    /// Fetch the selector option lists asynchronously.
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        self.run(|s| s.filters().all()).await
    }

    /// Fetch the current load report asynchronously.
    pub async fn report(&self) -> Result<LoadReport> {
        self.run(|s| s.report()).await
    }

    /// Check the source files and invalidate the cache if they changed.
    pub async fn refresh(&self) -> Result<bool> {
        self.run(|s| s.refresh()).await
    }
}
