use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceRecord — one cleaned pricing row (month × dimension × product)
// ---------------------------------------------------------------------------

/// A cleaned pricing row.
///
/// For a fixed `(dimension, product_id)` pair there is one record per month.
/// `prior_month_price` and `price_delta` are derived at load time using
/// positional lag: the prior value is taken from the previous row present in
/// month order within the group, not the calendar-adjacent month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Canonical 6-digit `YYYYMM` key.
    pub month: String,
    /// Product specification code, the secondary filter axis.
    pub dimension: String,
    /// Canonical integer-string catalog identifier (CAI).
    pub product_id: String,
    pub description: String,
    /// `None` when the source field did not parse; such rows are kept for
    /// visibility but excluded from price aggregates.
    pub net_price: Option<f64>,
    pub prior_month_price: Option<f64>,
    /// `net_price - prior_month_price`, `None` if either operand is `None`.
    pub price_delta: Option<f64>,
}

// ---------------------------------------------------------------------------
// SalesRecord — one cleaned shipment row (month × product)
// ---------------------------------------------------------------------------

/// A cleaned shipment row, restricted to the target office at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Canonical 6-digit `YYYYMM` key.
    pub month: String,
    /// Canonical integer-string catalog identifier (Cai column).
    pub product_id: String,
    pub office: String,
    pub shipped_qty: f64,
    /// Revenue proxy: `shipped_qty * 1`. The unit price of 1 is a documented
    /// placeholder carried over from the source data model.
    pub revenue: f64,
}
