#[derive(Debug, thiserror::Error)]
pub enum PricebookError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing column '{column}' in {table} table")]
    MissingColumn { table: String, column: String },

    /// Structural load failure. Carries the best-effort header lists of
    /// whichever tables were read before the failure, so callers can display
    /// them without a debug session; the original error stays as `source`.
    #[error("data load failed (price columns: {price_columns:?}, sales columns: {sales_columns:?})")]
    DataLoad {
        price_columns: Option<Vec<String>>,
        sales_columns: Option<Vec<String>>,
        #[source]
        source: Box<PricebookError>,
    },

    /// Trend construction failure, with the sizes of the intermediate
    /// monthly aggregates at the point of failure.
    #[error("trend build failed: {reason} ({price_months} price months, {sales_months} sales months)")]
    ChartBuild {
        reason: String,
        price_months: usize,
        sales_months: usize,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PricebookError>;
