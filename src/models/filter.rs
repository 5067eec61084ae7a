use serde::{Deserialize, Serialize};

/// Sentinel selector value meaning "no restriction on this axis".
pub const ALL: &str = "ALL";

// ---------------------------------------------------------------------------
// FilterSelection — one user selection, passed into every query
// ---------------------------------------------------------------------------

/// The tri-valued filter selection.
///
/// Each axis is either unset (`None`, the "ALL" no-op) or a concrete value.
/// The selection is ephemeral state owned by the presentation layer; the
/// core reads it as a plain parameter and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub product_id: Option<String>,
    pub dimension: Option<String>,
    pub month: Option<String>,
}

impl FilterSelection {
    /// The all-pass selection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selection from raw selector values, mapping the literal
    /// [`ALL`] sentinel and empty strings to "unset" so presentation layers
    /// can pass widget values straight through.
    pub fn from_raw(
        product_id: Option<&str>,
        dimension: Option<&str>,
        month: Option<&str>,
    ) -> Self {
        Self {
            product_id: concrete(product_id),
            dimension: concrete(dimension),
            month: concrete(month),
        }
    }

    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// True when every axis is unset.
    pub fn is_all(&self) -> bool {
        self.product_id.is_none() && self.dimension.is_none() && self.month.is_none()
    }
}

fn concrete(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(v) if !v.is_empty() && v != ALL => Some(v.to_string()),
        _ => None,
    }
}
