//! Detail-table query: filtered price rows left-joined with shipments.

use std::collections::HashMap;

use crate::error::Result;
use crate::filter;
use crate::models::{FilterSelection, JoinedRow};
use crate::normalize;
use crate::store::DataStore;

// ---------------------------------------------------------------------------
// DetailQuery
// ---------------------------------------------------------------------------

/// Query interface for the flat display table.
pub struct DetailQuery<'a> {
    store: &'a DataStore,
}

impl<'a> DetailQuery<'a> {
    /// Create a new `DetailQuery` bound to the given store.
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Build the display table for the given selection.
    ///
    /// Left join of filtered price rows onto filtered sales rows on
    /// `(month, product_id)`. Every price row appears exactly once: if
    /// several sales rows ever shared a key (the source treats the key as
    /// unique, so this is defensive) only the first match counts, and price
    /// rows without a match keep a quantity of 0 rather than being dropped.
    /// Sorted by display month, newest first.
    pub fn rows(&self, selection: &FilterSelection) -> Result<Vec<JoinedRow>> {
        let tables = self.store.tables()?;
        let (price_rows, sales_rows) = filter::apply(&tables.prices, &tables.sales, selection);

        let mut qty_by_key: HashMap<(&str, &str), f64> = HashMap::new();
        for sale in &sales_rows {
            qty_by_key
                .entry((sale.month.as_str(), sale.product_id.as_str()))
                .or_insert(sale.shipped_qty);
        }

        let mut rows: Vec<JoinedRow> = price_rows
            .iter()
            .map(|price| JoinedRow {
                display_month: normalize::display_month(&price.month)
                    .unwrap_or_else(|| price.month.clone()),
                dimension: price.dimension.clone(),
                product_id: price.product_id.clone(),
                description: price.description.clone(),
                net_price: price.net_price,
                prior_month_price: price.prior_month_price,
                price_delta: price.price_delta,
                shipped_qty: qty_by_key
                    .get(&(price.month.as_str(), price.product_id.as_str()))
                    .copied()
                    .unwrap_or(0.0),
            })
            .collect();

        rows.sort_by(|a, b| b.display_month.cmp(&a.display_month));
        Ok(rows)
    }
}
