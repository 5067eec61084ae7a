//! Shared test fixtures for the Pricebook SDK integration tests.
//!
//! Provides `sample_sdk()` which writes a small pair of source CSVs into a
//! temp directory and builds an SDK over them. The fixture data covers the
//! interesting cleaning cases: a pre-floor history month, a gap month, a
//! null price, an unparsable product code, a float-formatted product code,
//! an other-office row and unrecoverable month keys.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pricebook_sdk::PricebookSdk;
use tempfile::TempDir;

/// Pricing table. Carries the leading unnamed index column of the real
/// export. Row notes:
/// - 202312 feeds the positional lag of 202401 and is floored out afterwards
/// - product 100 skips 202403, so 202404 lags from 202402
/// - the 202402 price of product 200 is empty (kept as null)
/// - `m202403` exercises digit-run month extraction
/// - `bad-month` has no digits and is dropped
/// - CAI `zzz` falls back to the "0" identifier
pub const PRICE_CSV: &str = "\
,month,spec,CAI,product_desc,net_price
0,202312,A,100,Widget W-100,9
1,202401,A,100,Widget W-100,10
2,202402,A,100,Widget W-100,12
3,202404,A,100,Widget W-100,15
4,202401,B,200,Gadget G-200,20
5,202402,B,200,Gadget G-200,
6,m202403,B,200,Gadget G-200,21
7,bad-month,B,200,Gadget G-200,22
8,202401,C,zzz,Mystery Item,30
";

/// Shipments table. Row notes:
/// - 202312 is floored out
/// - the SH row is office-filtered before anything else
/// - `200.0` normalizes to product id "200" and joins the pricing table
/// - product 300 ships in 202404 with no price rows at all
/// - `oops` has no digits and is dropped
pub const SALES_CSV: &str = "\
ID_Month_Key,Office,Cai,Shipped_Qty
202312,HZ,100,2
202401,HZ,100,5
202401,HZ,200,4
202401,SH,100,99
202402,HZ,100,0
202402,HZ,200.0,6
202403,HZ,100,3
202404,HZ,300,7
oops,HZ,100,1
";

/// Write the sample source pair into `dir` under the default file names.
pub fn write_sources(dir: &Path) {
    fs::write(dir.join("price_all.csv"), PRICE_CSV).unwrap();
    fs::write(dir.join("sales_all.csv"), SALES_CSV).unwrap();
}

/// Build an SDK over the sample sources in a fresh temp directory.
///
/// Returns `(PricebookSdk, TempDir)`. The caller must keep the `TempDir`
/// alive for the duration of the test so the source files are not deleted
/// prematurely.
pub fn sample_sdk() -> (PricebookSdk, TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_sources(tmp_dir.path());
    let sdk = PricebookSdk::builder()
        .data_dir(tmp_dir.path())
        .build()
        .unwrap();
    (sdk, tmp_dir)
}

/// Float comparison tolerance for aggregate checks.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
