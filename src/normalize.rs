//! Key normalization for the month and product-identifier join columns.
//!
//! Both source tables spell their keys loosely: months arrive as plain
//! `202401`, as floats like `202401.0`, or buried in labels; product codes
//! arrive as integers, float-formatted integers, or junk. Everything is
//! reduced to canonical string keys here so the two tables join cleanly.
//!
//! # Example
//!
//! ```rust
//! use pricebook_sdk::normalize::{normalize_month, normalize_id};
//!
//! assert_eq!(normalize_month("202401"), Some("202401".to_string()));
//! assert_eq!(normalize_month("month 202401.0"), Some("202401".to_string()));
//! assert_eq!(normalize_month("n/a"), None);
//! assert_eq!(normalize_id("7200.0"), "7200");
//! assert_eq!(normalize_id("unknown"), "0");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit-run regex"));

/// Reduce a raw month value to the canonical 6-digit `YYYYMM` key.
///
/// Takes the first contiguous digit run in the field, reinterprets it as an
/// integer and zero-pads to six digits. Returns `None` when the field holds
/// no digits or the run does not fit an integer; callers drop such rows.
/// Idempotent on its own output.
pub fn normalize_month(raw: &str) -> Option<String> {
    let run = DIGIT_RUN.find(raw.trim())?;
    let n: i64 = run.as_str().parse().ok()?;
    Some(format!("{n:06}"))
}

/// Parse a raw product code as an integer, truncating float forms.
///
/// Returns `None` for values that are neither integer nor float shaped.
pub fn parse_id(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(n) = t.parse::<i64>() {
        return Some(n);
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f.trunc() as i64),
        _ => None,
    }
}

/// Canonical integer-string product identifier.
///
/// Unparsable codes map to [`config::FALLBACK_ID`] ("0"). The fallback keeps
/// such rows joinable but can collapse unrelated products under one key, so
/// the loader counts every occurrence in its [`LoadReport`].
///
/// [`LoadReport`]: crate::loader::LoadReport
pub fn normalize_id(raw: &str) -> String {
    match parse_id(raw) {
        Some(n) => n.to_string(),
        None => config::FALLBACK_ID.to_string(),
    }
}

/// Coerce a raw numeric field to `f64`, `None` when it does not parse.
pub fn parse_number(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Format a canonical month key as `YYYY/MM` for display.
///
/// Returns `None` for keys that are not exactly six digits.
pub fn display_month(key: &str) -> Option<String> {
    if key.len() == 6 && key.bytes().all(|b| b.is_ascii_digit()) {
        Some(format!("{}/{}", &key[..4], &key[4..]))
    } else {
        None
    }
}
