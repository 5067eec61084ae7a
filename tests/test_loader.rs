//! Loader pipeline tests: cleaning, derived columns, floor, report counters.

mod common;

use pricebook_sdk::models::PriceRecord;

fn price_row<'a>(
    rows: &'a [PriceRecord],
    dimension: &str,
    product_id: &str,
    month: &str,
) -> &'a PriceRecord {
    rows.iter()
        .find(|r| r.dimension == dimension && r.product_id == product_id && r.month == month)
        .unwrap_or_else(|| panic!("no price row for {dimension}/{product_id}/{month}"))
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

#[test]
fn months_are_canonical_six_digit_keys() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    for month in tables
        .prices
        .iter()
        .map(|r| &r.month)
        .chain(tables.sales.iter().map(|r| &r.month))
    {
        assert_eq!(month.len(), 6, "month = {month}");
        assert!(month.bytes().all(|b| b.is_ascii_digit()), "month = {month}");
    }
}

#[test]
fn sales_are_restricted_to_the_target_office() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    assert!(tables.sales.iter().all(|s| s.office == "HZ"));
    assert!(tables.sales.iter().all(|s| s.shipped_qty != 99.0));
}

#[test]
fn floor_excludes_history_months() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    assert!(tables.prices.iter().all(|r| r.month.as_str() >= "202401"));
    assert!(tables.sales.iter().all(|r| r.month.as_str() >= "202401"));
}

#[test]
fn embedded_month_label_is_recovered() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    // the m202403 row survives with a canonical key
    price_row(&tables.prices, "B", "200", "202403");
}

#[test]
fn unparsable_product_code_falls_back_to_zero_id() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    let row = price_row(&tables.prices, "C", "0", "202401");
    assert_eq!(row.description, "Mystery Item");
}

#[test]
fn float_formatted_sales_code_normalizes() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    assert!(tables
        .sales
        .iter()
        .any(|s| s.month == "202402" && s.product_id == "200" && s.shipped_qty == 6.0));
}

#[test]
fn null_price_rows_are_kept() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    let row = price_row(&tables.prices, "B", "200", "202402");
    assert_eq!(row.net_price, None);
}

#[test]
fn revenue_proxy_equals_quantity() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    for sale in &tables.sales {
        assert_eq!(sale.revenue, sale.shipped_qty);
    }
}

#[test]
fn price_rows_are_month_ascending() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    for pair in tables.prices.windows(2) {
        assert!(pair[0].month <= pair[1].month);
    }
}

// ---------------------------------------------------------------------------
// Derived columns (positional lag)
// ---------------------------------------------------------------------------

#[test]
fn prior_price_lags_by_position_across_a_gap() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    // product 100 has no 202403 row; 202404 lags from 202402
    let row = price_row(&tables.prices, "A", "100", "202404");
    assert_eq!(row.net_price, Some(15.0));
    assert_eq!(row.prior_month_price, Some(12.0));
    assert_eq!(row.price_delta, Some(3.0));
}

#[test]
fn prior_price_can_come_from_a_floored_out_month() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    // 202312 is not in the loaded table, but 202401 still lags from it
    let row = price_row(&tables.prices, "A", "100", "202401");
    assert_eq!(row.prior_month_price, Some(9.0));
    assert_eq!(row.price_delta, Some(1.0));
}

#[test]
fn first_row_of_a_group_has_no_prior() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    let row = price_row(&tables.prices, "B", "200", "202401");
    assert_eq!(row.prior_month_price, None);
    assert_eq!(row.price_delta, None);
}

#[test]
fn delta_is_null_when_either_operand_is_null() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    // null net price: delta null even with a prior present
    let null_price = price_row(&tables.prices, "B", "200", "202402");
    assert_eq!(null_price.prior_month_price, Some(20.0));
    assert_eq!(null_price.price_delta, None);

    // prior row had a null price: prior and delta both null
    let after_null = price_row(&tables.prices, "B", "200", "202403");
    assert_eq!(after_null.net_price, Some(21.0));
    assert_eq!(after_null.prior_month_price, None);
    assert_eq!(after_null.price_delta, None);
}

#[test]
fn consecutive_months_lag_normally() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    let row = price_row(&tables.prices, "A", "100", "202402");
    assert_eq!(row.prior_month_price, Some(10.0));
    assert_eq!(row.price_delta, Some(2.0));
}

// ---------------------------------------------------------------------------
// Report counters
// ---------------------------------------------------------------------------

#[test]
fn report_counts_row_level_anomalies() {
    let (sdk, _tmp) = common::sample_sdk();
    let report = sdk.report().unwrap();

    assert_eq!(report.price_rows_read, 9);
    assert_eq!(report.price_rows_dropped, 1);
    assert_eq!(report.price_id_fallbacks, 1);
    assert_eq!(report.null_prices, 1);

    assert_eq!(report.sales_rows_read, 9);
    assert_eq!(report.sales_office_skipped, 1);
    assert_eq!(report.sales_rows_dropped, 1);
    assert_eq!(report.sales_id_fallbacks, 0);
    assert_eq!(report.bad_quantities, 0);
}

#[test]
fn kept_row_counts_match_the_fixture() {
    let (sdk, _tmp) = common::sample_sdk();
    let tables = sdk.tables().unwrap();

    assert_eq!(tables.prices.len(), 7);
    assert_eq!(tables.sales.len(), 6);
}
