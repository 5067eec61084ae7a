//! The filter engine: pure narrowing of both tables by one selection.
//!
//! A product id narrows both tables (each through its own identifier
//! column); a dimension narrows the price table only, since sales rows carry
//! no dimension; a month narrows both. Unset axes pass every row through, so
//! the all-unset selection is the identity and applying the same selection
//! twice equals applying it once.
//!
//! The reporting-month floor is not handled here -- it is applied once at
//! load time, upstream of any selection.

use crate::models::{FilterSelection, PriceRecord, SalesRecord};

/// Narrow both tables by the given selection.
pub fn apply<'a>(
    prices: &'a [PriceRecord],
    sales: &'a [SalesRecord],
    selection: &FilterSelection,
) -> (Vec<&'a PriceRecord>, Vec<&'a SalesRecord>) {
    let price_rows = prices
        .iter()
        .filter(|r| matches_price(r, selection))
        .collect();
    let sales_rows = sales
        .iter()
        .filter(|r| matches_sales(r, selection))
        .collect();
    (price_rows, sales_rows)
}

fn matches_price(record: &PriceRecord, selection: &FilterSelection) -> bool {
    selection
        .product_id
        .as_deref()
        .map_or(true, |v| record.product_id == v)
        && selection
            .dimension
            .as_deref()
            .map_or(true, |v| record.dimension == v)
        && selection
            .month
            .as_deref()
            .map_or(true, |v| record.month == v)
}

fn matches_sales(record: &SalesRecord, selection: &FilterSelection) -> bool {
    selection
        .product_id
        .as_deref()
        .map_or(true, |v| record.product_id == v)
        && selection
            .month
            .as_deref()
            .map_or(true, |v| record.month == v)
}
