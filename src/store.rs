//! Memoized access to the loaded tables, keyed by source-file identity.
//!
//! The tables are loaded on first access and shared behind an `Arc`; a
//! change to either source file's length or modification time triggers a
//! transparent reload on the next access. Callers can also invalidate or
//! reload explicitly -- there is no other hidden cache state.

use std::cell::RefCell;
use std::sync::Arc;

use crate::error::{PricebookError, Result};
use crate::loader::{self, LoadedTables};
use crate::sources::{SourceFiles, SourceSignature};

#[derive(Debug)]
struct CachedLoad {
    signature: SourceSignature,
    tables: Arc<LoadedTables>,
}

/// Owns the source files and the memoized load result.
#[derive(Debug)]
pub struct DataStore {
    sources: SourceFiles,
    office: String,
    floor_month: String,
    cached: RefCell<Option<CachedLoad>>,
}

impl DataStore {
    pub fn new(sources: SourceFiles, office: String, floor_month: String) -> Self {
        Self {
            sources,
            office,
            floor_month,
            cached: RefCell::new(None),
        }
    }

    pub fn sources(&self) -> &SourceFiles {
        &self.sources
    }

    /// The loaded tables, reading the source files only when needed.
    ///
    /// Returns the cached result while the source signature is unchanged;
    /// otherwise loads (or re-loads) first.
    pub fn tables(&self) -> Result<Arc<LoadedTables>> {
        // Stamp before reading, so a write racing the read shows up as a
        // signature mismatch on the next access. An unreadable file falls
        // through to load(), which reports which table could still be read.
        let signature = self.sources.signature().ok();
        if let Some(current) = signature {
            if let Some(cached) = self.cached.borrow().as_ref() {
                if cached.signature == current {
                    return Ok(Arc::clone(&cached.tables));
                }
            }
        }

        let tables = Arc::new(self.load()?);
        let signature = match signature {
            Some(current) => current,
            None => self
                .sources
                .signature()
                .map_err(|e| data_load_error(None, None, e))?,
        };
        *self.cached.borrow_mut() = Some(CachedLoad {
            signature,
            tables: Arc::clone(&tables),
        });
        Ok(tables)
    }

    /// Whether the cache is missing or behind the files on disk.
    pub fn is_stale(&self) -> Result<bool> {
        match self.cached.borrow().as_ref() {
            None => Ok(true),
            Some(cached) => Ok(cached.signature != self.sources.signature()?),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.borrow().is_some()
    }

    /// Drop the cached tables; the next access loads fresh.
    pub fn invalidate(&self) {
        *self.cached.borrow_mut() = None;
    }

    /// Force a fresh load regardless of the cached signature.
    pub fn reload(&self) -> Result<Arc<LoadedTables>> {
        self.invalidate();
        self.tables()
    }

    /// Read and build both tables.
    ///
    /// Any failure is wrapped with the header lists known at that point and
    /// reported before being returned, so a broken source surfaces its
    /// inferred columns instead of just an opaque error.
    fn load(&self) -> Result<LoadedTables> {
        let price = match self.sources.read_price() {
            Ok(table) => table,
            Err(e) => return Err(data_load_error(None, None, e)),
        };

        let sales = match self.sources.read_sales() {
            Ok(table) => table,
            Err(e) => return Err(data_load_error(Some(price.headers.clone()), None, e)),
        };

        loader::build_tables(&price, &sales, &self.office, &self.floor_month).map_err(|e| {
            data_load_error(
                Some(price.headers.clone()),
                Some(sales.headers.clone()),
                e,
            )
        })
    }
}

fn data_load_error(
    price_columns: Option<Vec<String>>,
    sales_columns: Option<Vec<String>>,
    source: PricebookError,
) -> PricebookError {
    eprintln!("Data load failed: {source}");
    if let Some(cols) = &price_columns {
        eprintln!("  price columns: {cols:?}");
    }
    if let Some(cols) = &sales_columns {
        eprintln!("  sales columns: {cols:?}");
    }
    PricebookError::DataLoad {
        price_columns,
        sales_columns,
        source: Box::new(source),
    }
}
