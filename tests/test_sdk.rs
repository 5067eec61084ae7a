//! SDK facade tests: builder, cache lifecycle, options, load diagnostics.

mod common;

use std::fs;

use pricebook_sdk::{PricebookError, PricebookSdk};

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_rejects_a_malformed_floor_month() {
    let err = PricebookSdk::builder()
        .data_dir(".")
        .floor_month("2024-01")
        .build()
        .unwrap_err();
    assert!(matches!(err, PricebookError::InvalidArgument(_)));
}

#[test]
fn builder_accepts_explicit_file_paths() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sources(tmp.path());

    let sdk = PricebookSdk::builder()
        .price_path(tmp.path().join("price_all.csv"))
        .sales_path(tmp.path().join("sales_all.csv"))
        .build()
        .unwrap();
    assert_eq!(sdk.tables().unwrap().prices.len(), 7);
}

#[test]
fn a_different_office_filters_differently() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sources(tmp.path());

    let sdk = PricebookSdk::builder()
        .data_dir(tmp.path())
        .office("SH")
        .build()
        .unwrap();
    let tables = sdk.tables().unwrap();
    assert_eq!(tables.sales.len(), 1);
    assert_eq!(tables.sales[0].shipped_qty, 99.0);
}

#[test]
fn display_reports_paths_and_load_state() {
    let (sdk, _tmp) = common::sample_sdk();

    let before = format!("{sdk}");
    assert!(before.contains("loaded=false"));
    assert!(before.contains("price_all.csv"));

    sdk.tables().unwrap();
    let after = format!("{sdk}");
    assert!(after.contains("loaded=true"));
}

// ---------------------------------------------------------------------------
// Cache lifecycle
// ---------------------------------------------------------------------------

#[test]
fn tables_are_cached_between_calls() {
    let (sdk, _tmp) = common::sample_sdk();

    let first = sdk.tables().unwrap();
    let second = sdk.tables().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn staleness_follows_the_source_files() {
    let (sdk, tmp) = common::sample_sdk();

    assert!(sdk.is_stale().unwrap());
    sdk.tables().unwrap();
    assert!(!sdk.is_stale().unwrap());

    let extended = format!("{}202405,HZ,100,8\n", common::SALES_CSV);
    fs::write(tmp.path().join("sales_all.csv"), extended).unwrap();
    assert!(sdk.is_stale().unwrap());
}

#[test]
fn changed_sources_reload_transparently() {
    let (sdk, tmp) = common::sample_sdk();
    assert_eq!(sdk.tables().unwrap().sales.len(), 6);

    let extended = format!("{}202405,HZ,100,8\n", common::SALES_CSV);
    fs::write(tmp.path().join("sales_all.csv"), extended).unwrap();

    let tables = sdk.tables().unwrap();
    assert_eq!(tables.sales.len(), 7);
    assert!(tables.sales.iter().any(|s| s.month == "202405"));
}

#[test]
fn refresh_invalidates_only_when_stale() {
    let (sdk, tmp) = common::sample_sdk();
    sdk.tables().unwrap();

    assert!(!sdk.refresh().unwrap());

    let extended = format!("{}202405,HZ,100,8\n", common::SALES_CSV);
    fs::write(tmp.path().join("sales_all.csv"), extended).unwrap();
    assert!(sdk.refresh().unwrap());
}

#[test]
fn invalidate_and_reload_are_explicit() {
    let (sdk, _tmp) = common::sample_sdk();
    sdk.tables().unwrap();

    sdk.invalidate();
    assert!(sdk.is_stale().unwrap());

    let tables = sdk.reload().unwrap();
    assert_eq!(tables.prices.len(), 7);
    assert!(!sdk.is_stale().unwrap());
}

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

#[test]
fn options_are_sorted_and_distinct() {
    let (sdk, _tmp) = common::sample_sdk();
    let options = sdk.filters().all().unwrap();

    assert_eq!(options.product_ids, vec!["0", "100", "200"]);
    assert_eq!(options.dimensions, vec!["A", "B", "C"]);
    assert_eq!(
        options.months,
        vec!["202401", "202402", "202403", "202404"]
    );
}

// ---------------------------------------------------------------------------
// Load diagnostics
// ---------------------------------------------------------------------------

#[test]
fn missing_files_surface_as_data_load_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let sdk = PricebookSdk::builder().data_dir(tmp.path()).build().unwrap();

    match sdk.tables().unwrap_err() {
        PricebookError::DataLoad {
            price_columns,
            sales_columns,
            ..
        } => {
            assert_eq!(price_columns, None);
            assert_eq!(sales_columns, None);
        }
        other => panic!("expected DataLoad, got {other}"),
    }
}

#[test]
fn a_missing_sales_file_still_reports_price_columns() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("price_all.csv"), common::PRICE_CSV).unwrap();

    let sdk = PricebookSdk::builder().data_dir(tmp.path()).build().unwrap();
    match sdk.tables().unwrap_err() {
        PricebookError::DataLoad {
            price_columns,
            sales_columns,
            ..
        } => {
            let cols = price_columns.expect("price table was read");
            assert!(cols.contains(&"CAI".to_string()));
            assert_eq!(sales_columns, None);
        }
        other => panic!("expected DataLoad, got {other}"),
    }
}

#[test]
fn a_missing_column_names_the_table_and_column() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("price_all.csv"), common::PRICE_CSV).unwrap();
    fs::write(
        tmp.path().join("sales_all.csv"),
        "ID_Month_Key,Cai,Shipped_Qty\n202401,100,5\n",
    )
    .unwrap();

    let sdk = PricebookSdk::builder().data_dir(tmp.path()).build().unwrap();
    match sdk.tables().unwrap_err() {
        PricebookError::DataLoad {
            price_columns,
            sales_columns,
            source,
        } => {
            assert!(price_columns.is_some());
            assert!(sales_columns.is_some());
            match *source {
                PricebookError::MissingColumn { table, column } => {
                    assert_eq!(table, "sales");
                    assert_eq!(column, "Office");
                }
                other => panic!("expected MissingColumn, got {other}"),
            }
        }
        other => panic!("expected DataLoad, got {other}"),
    }
}

#[test]
fn report_is_available_through_the_facade() {
    let (sdk, _tmp) = common::sample_sdk();
    let report = sdk.report().unwrap();
    assert_eq!(report.price_rows_read, 9);
    assert_eq!(report.sales_rows_read, 9);
}
