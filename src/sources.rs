//! Source file access: identity stamps and raw CSV reading.
//!
//! The SDK is backed by exactly two local CSV exports. This module owns their
//! paths, reads them into raw header/record tables, and produces the identity
//! signature (per-file length + modification time) that the memoized store
//! uses to decide when a reload is due.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config;
use crate::error::{PricebookError, Result};

// ---------------------------------------------------------------------------
// File identity
// ---------------------------------------------------------------------------

/// Identity stamp of one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    len: u64,
    modified: Option<SystemTime>,
}

/// Combined identity of the source pair. The cached tables are keyed by this
/// value; any change to either file triggers a reload on next access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSignature {
    pub price: FileStamp,
    pub sales: FileStamp,
}

fn stamp(path: &Path) -> Result<FileStamp> {
    let meta = fs::metadata(path)?;
    Ok(FileStamp {
        len: meta.len(),
        modified: meta.modified().ok(),
    })
}

// ---------------------------------------------------------------------------
// CsvTable — raw header/record table with name-based column lookup
// ---------------------------------------------------------------------------

/// A raw CSV table: header row plus unparsed records.
///
/// Columns are located by header name, so extra columns (like the pricing
/// table's leading unnamed index column) are simply never looked at.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl CsvTable {
    /// Index of the named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a required column, or a [`MissingColumn`] error naming the
    /// table it was expected in.
    ///
    /// [`MissingColumn`]: PricebookError::MissingColumn
    pub fn require_column(&self, table: &str, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| PricebookError::MissingColumn {
            table: table.to_string(),
            column: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// SourceFiles
// ---------------------------------------------------------------------------

/// The pair of CSV exports backing the SDK.
#[derive(Debug)]
pub struct SourceFiles {
    pub price_path: PathBuf,
    pub sales_path: PathBuf,
}

impl SourceFiles {
    pub fn new<P: Into<PathBuf>, S: Into<PathBuf>>(price_path: P, sales_path: S) -> Self {
        Self {
            price_path: price_path.into(),
            sales_path: sales_path.into(),
        }
    }

    /// Locate both files under a data directory using the default file names.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(config::PRICE_FILE), dir.join(config::SALES_FILE))
    }

    /// Current identity of the source pair.
    pub fn signature(&self) -> Result<SourceSignature> {
        Ok(SourceSignature {
            price: stamp(&self.price_path)?,
            sales: stamp(&self.sales_path)?,
        })
    }

    pub fn read_price(&self) -> Result<CsvTable> {
        read_table(&self.price_path)
    }

    pub fn read_sales(&self) -> Result<CsvTable> {
        read_table(&self.sales_path)
    }
}

/// Read a whole CSV file into memory.
///
/// Fields are trimmed and ragged rows are tolerated; short rows surface as
/// missing fields, which the loader treats like empty values.
fn read_table(path: &Path) -> Result<CsvTable> {
    let file = fs::File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    Ok(CsvTable { headers, rows })
}
