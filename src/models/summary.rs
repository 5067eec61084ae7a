use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// JoinedRow — one display row of the detail table
// ---------------------------------------------------------------------------

/// A price row joined with its shipment quantity, ready for tabular display.
///
/// Produced by the left join of filtered price rows onto filtered sales rows
/// on `(month, product_id)`; price rows without a shipment match keep a
/// quantity of 0 rather than being dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedRow {
    /// Month formatted `YYYY/MM`.
    pub display_month: String,
    pub dimension: String,
    pub product_id: String,
    pub description: String,
    pub net_price: Option<f64>,
    pub prior_month_price: Option<f64>,
    pub price_delta: Option<f64>,
    pub shipped_qty: f64,
}

// ---------------------------------------------------------------------------
// DimensionStats / ProductStats — summary tables
// ---------------------------------------------------------------------------

/// Price statistics for one dimension, over non-null net prices only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionStats {
    pub dimension: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Number of rows that contributed (nulls excluded).
    pub samples: usize,
}

/// Price statistics for one `(product_id, description)` group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStats {
    pub product_id: String,
    pub description: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Net price of the latest row in month order with a price present.
    pub latest_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// ProductProfile — chart-header info for a single product
// ---------------------------------------------------------------------------

/// One `(description, dimension)` variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub description: String,
    pub dimension: String,
}

/// Header summary for a single product: its distinct variants in first-seen
/// order, the average price across all its price rows, and the total shipped
/// quantity across all its sales rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfile {
    pub product_id: String,
    pub variants: Vec<ProductVariant>,
    pub avg_price: Option<f64>,
    pub total_qty: f64,
}

// ---------------------------------------------------------------------------
// TrendPoint — one month of the dual-axis trend series
// ---------------------------------------------------------------------------

/// One month of the trend series: bar = total quantity, line = mean price.
///
/// The series covers every month present in either filtered input; a month
/// with shipments but no price rows has `avg_price: None`, and a month with
/// prices but no shipments has `total_qty: 0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Canonical 6-digit `YYYYMM` key.
    pub month: String,
    /// Month formatted `YYYY/MM` for axis labels.
    pub label: String,
    pub total_qty: f64,
    pub avg_price: Option<f64>,
}

impl TrendPoint {
    /// Bar label text: the quantity rounded to an integer, or an empty
    /// string when it rounds to zero (zero bars are drawn unlabeled).
    pub fn qty_text(&self) -> String {
        let rounded = self.total_qty.round() as i64;
        if rounded == 0 {
            String::new()
        } else {
            rounded.to_string()
        }
    }

    /// Line label text, same convention as [`qty_text`](Self::qty_text).
    pub fn price_text(&self) -> String {
        let rounded = self.avg_price.unwrap_or(0.0).round() as i64;
        if rounded == 0 {
            String::new()
        } else {
            rounded.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// FilterOptions — selector option lists
// ---------------------------------------------------------------------------

/// Sorted distinct values for the three selector widgets, sourced from the
/// loaded price table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub product_ids: Vec<String>,
    pub dimensions: Vec<String>,
    /// Canonical month keys, ascending.
    pub months: Vec<String>,
}
