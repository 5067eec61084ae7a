//! Selector option lists for the presentation layer's filter widgets.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::FilterOptions;
use crate::store::DataStore;

/// Query interface for the filter widgets' option lists.
pub struct OptionsQuery<'a> {
    store: &'a DataStore,
}

impl<'a> OptionsQuery<'a> {
    /// Create a new `OptionsQuery` bound to the given store.
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Sorted distinct product ids, dimensions and months.
    ///
    /// All three lists are sourced from the price table, which drives the
    /// selectors; sales-only products can still be reached through the
    /// product-id filter by exact value.
    pub fn all(&self) -> Result<FilterOptions> {
        let tables = self.store.tables()?;

        let mut product_ids = BTreeSet::new();
        let mut dimensions = BTreeSet::new();
        let mut months = BTreeSet::new();
        for price in &tables.prices {
            product_ids.insert(price.product_id.clone());
            dimensions.insert(price.dimension.clone());
            months.insert(price.month.clone());
        }

        Ok(FilterOptions {
            product_ids: product_ids.into_iter().collect(),
            dimensions: dimensions.into_iter().collect(),
            months: months.into_iter().collect(),
        })
    }
}
