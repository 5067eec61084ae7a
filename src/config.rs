use std::path::PathBuf;

/// Sales office the shipment table is restricted to.
pub const TARGET_OFFICE: &str = "HZ";

/// Earliest reporting month kept in the loaded tables (inclusive).
///
/// Derived columns are computed before this floor is applied, so the first
/// kept month can still lag from a floored-out predecessor.
pub const FLOOR_MONTH: &str = "202401";

/// Default file names inside the data directory.
pub const PRICE_FILE: &str = "price_all.csv";
pub const SALES_FILE: &str = "sales_all.csv";

/// Identifier assigned to rows whose product code does not parse.
pub const FALLBACK_ID: &str = "0";

/// Column headers of the pricing table. The file carries a leading unnamed
/// index column, which is ignored by name-based lookup.
pub mod price_cols {
    pub const MONTH: &str = "month";
    pub const DIMENSION: &str = "spec";
    pub const PRODUCT_ID: &str = "CAI";
    pub const DESCRIPTION: &str = "product_desc";
    pub const NET_PRICE: &str = "net_price";
}

/// Column headers of the shipments table. Note the `Cai` casing -- it differs
/// from the pricing table's `CAI`, and the month column has its own name.
pub mod sales_cols {
    pub const MONTH: &str = "ID_Month_Key";
    pub const OFFICE: &str = "Office";
    pub const PRODUCT_ID: &str = "Cai";
    pub const QTY: &str = "Shipped_Qty";
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pricebook-sdk")
    } else {
        PathBuf::from(".")
    }
}
