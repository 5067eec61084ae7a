//! Summary statistics: by dimension, by product, and per-product profiles.
//!
//! All price aggregates run over non-null net prices only; groups with no
//! usable price are left out of the result instead of carrying NaN rows.

use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::filter;
use crate::models::{
    DimensionStats, FilterSelection, ProductProfile, ProductStats, ProductVariant,
};
use crate::store::DataStore;

// ---------------------------------------------------------------------------
// PriceAccum
// ---------------------------------------------------------------------------

struct PriceAccum {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl PriceAccum {
    fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

// ---------------------------------------------------------------------------
// StatsQuery
// ---------------------------------------------------------------------------

/// Query interface for the two summary tables and product profiles.
pub struct StatsQuery<'a> {
    store: &'a DataStore,
}

impl<'a> StatsQuery<'a> {
    /// Create a new `StatsQuery` bound to the given store.
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Mean/min/max net price per dimension, sorted by dimension.
    ///
    /// Dimensions whose rows all have null prices are excluded.
    pub fn by_dimension(&self, selection: &FilterSelection) -> Result<Vec<DimensionStats>> {
        let tables = self.store.tables()?;
        let (price_rows, _) = filter::apply(&tables.prices, &tables.sales, selection);

        let mut groups: BTreeMap<String, PriceAccum> = BTreeMap::new();
        for price in &price_rows {
            if let Some(value) = price.net_price {
                groups
                    .entry(price.dimension.clone())
                    .or_insert_with(PriceAccum::new)
                    .push(value);
            }
        }

        Ok(groups
            .into_iter()
            .map(|(dimension, acc)| DimensionStats {
                dimension,
                avg_price: acc.mean(),
                min_price: acc.min,
                max_price: acc.max,
                samples: acc.count,
            })
            .collect())
    }

    /// Mean/min/max/latest net price per `(product_id, description)` group,
    /// sorted by product id.
    ///
    /// "Latest" is the net price of the last row in month-ascending order
    /// that has a price present (ties on month resolve to the later row).
    pub fn by_product(&self, selection: &FilterSelection) -> Result<Vec<ProductStats>> {
        let tables = self.store.tables()?;
        let (price_rows, _) = filter::apply(&tables.prices, &tables.sales, selection);

        // Loaded price rows are month-ascending, so the last write wins.
        let mut groups: BTreeMap<(String, String), (PriceAccum, Option<f64>)> = BTreeMap::new();
        for price in &price_rows {
            if let Some(value) = price.net_price {
                let entry = groups
                    .entry((price.product_id.clone(), price.description.clone()))
                    .or_insert_with(|| (PriceAccum::new(), None));
                entry.0.push(value);
                entry.1 = Some(value);
            }
        }

        Ok(groups
            .into_iter()
            .map(|((product_id, description), (acc, latest))| ProductStats {
                product_id,
                description,
                avg_price: acc.mean(),
                min_price: acc.min,
                max_price: acc.max,
                latest_price: latest,
            })
            .collect())
    }

    /// Chart-header info for one product over the full loaded tables:
    /// distinct `(description, dimension)` variants in first-seen order,
    /// average price, and total shipped quantity.
    ///
    /// Returns `None` when the product appears in neither table.
    pub fn profile(&self, product_id: &str) -> Result<Option<ProductProfile>> {
        let tables = self.store.tables()?;

        let mut variants = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut acc = PriceAccum::new();
        for price in tables.prices.iter().filter(|p| p.product_id == product_id) {
            let key = (price.description.clone(), price.dimension.clone());
            if seen.insert(key) {
                variants.push(ProductVariant {
                    description: price.description.clone(),
                    dimension: price.dimension.clone(),
                });
            }
            if let Some(value) = price.net_price {
                acc.push(value);
            }
        }

        let mut sales_rows = 0usize;
        let mut total_qty = 0.0;
        for sale in tables.sales.iter().filter(|s| s.product_id == product_id) {
            sales_rows += 1;
            total_qty += sale.shipped_qty;
        }

        if variants.is_empty() && sales_rows == 0 {
            return Ok(None);
        }

        let avg_price = if acc.count > 0 { Some(acc.mean()) } else { None };
        Ok(Some(ProductProfile {
            product_id: product_id.to_string(),
            variants,
            avg_price,
            total_qty,
        }))
    }
}
