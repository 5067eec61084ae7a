//! Trend series: union-of-months, gap-filled quantity and price aggregates.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PricebookError, Result};
use crate::filter;
use crate::models::{FilterSelection, TrendPoint};
use crate::normalize;
use crate::store::DataStore;

// ---------------------------------------------------------------------------
// TrendQuery
// ---------------------------------------------------------------------------

/// Query interface for the dual-axis trend series.
pub struct TrendQuery<'a> {
    store: &'a DataStore,
}

impl<'a> TrendQuery<'a> {
    /// Create a new `TrendQuery` bound to the given store.
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Build the gap-filled monthly series for the given selection.
    ///
    /// The series has one point per month present in either filtered input --
    /// never an inner join of the two month sets. A month with shipments but
    /// no price rows has `avg_price: None`; a month with prices but no
    /// shipments has `total_qty: 0.0`. Sorted ascending by month.
    pub fn series(&self, selection: &FilterSelection) -> Result<Vec<TrendPoint>> {
        let tables = self.store.tables()?;
        let (price_rows, sales_rows) = filter::apply(&tables.prices, &tables.sales, selection);

        let mut qty_by_month: BTreeMap<String, f64> = BTreeMap::new();
        for sale in &sales_rows {
            *qty_by_month.entry(sale.month.clone()).or_insert(0.0) += sale.shipped_qty;
        }

        let mut price_by_month: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for price in &price_rows {
            if let Some(value) = price.net_price {
                let entry = price_by_month.entry(price.month.clone()).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }

        // Union over row months, not aggregate months: a month whose price
        // rows are all null is still present in the series.
        let mut months: BTreeSet<String> =
            price_rows.iter().map(|p| p.month.clone()).collect();
        months.extend(sales_rows.iter().map(|s| s.month.clone()));

        let mut series = Vec::with_capacity(months.len());
        for month in months {
            let label = match normalize::display_month(&month) {
                Some(label) => label,
                None => {
                    let err = PricebookError::ChartBuild {
                        reason: format!("month key '{month}' is not a 6-digit YYYYMM"),
                        price_months: price_by_month.len(),
                        sales_months: qty_by_month.len(),
                    };
                    eprintln!("Trend build failed: {err}");
                    return Err(err);
                }
            };

            let total_qty = qty_by_month.get(&month).copied().unwrap_or(0.0);
            let avg_price = price_by_month
                .get(&month)
                .map(|(sum, count)| sum / *count as f64);

            series.push(TrendPoint {
                month,
                label,
                total_qty,
                avg_price,
            });
        }

        Ok(series)
    }
}
