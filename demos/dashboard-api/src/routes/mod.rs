pub mod detail;
pub mod filters;
pub mod stats;
pub mod trend;

use pricebook_sdk::FilterSelection;
use serde::Deserialize;

/// Query parameters shared by the selection-driven endpoints.
///
/// Absent parameters, empty strings and the literal "ALL" sentinel all mean
/// "no restriction on this axis", so selector widget values can be passed
/// through unchanged.
#[derive(Deserialize)]
pub struct SelectionParams {
    pub product_id: Option<String>,
    pub dimension: Option<String>,
    pub month: Option<String>,
}

impl SelectionParams {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::from_raw(
            self.product_id.as_deref(),
            self.dimension.as_deref(),
            self.month.as_deref(),
        )
    }
}
