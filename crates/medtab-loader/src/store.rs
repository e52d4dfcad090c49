//! In-memory store for the loaded reference tables.
//!
//! The store is built once at startup and never mutated afterwards, so
//! request handlers can share it behind an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use medtab_types::{Table, TableRecord};

use crate::loader::load_table;
use crate::search::{self, SearchOutcome};
use crate::types::TableFiles;

/// One loaded table: the ordered records plus a code index.
#[derive(Debug, Default)]
struct Dataset {
    records: Vec<TableRecord>,
    /// Stored code (verbatim) -> position of its first occurrence.
    by_code: HashMap<String, usize>,
    diagnostic: Option<String>,
}

impl Dataset {
    fn build(table: Table, records: Vec<TableRecord>, diagnostic: Option<String>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let code = record.text(table.code_field());
            if !code.is_empty() {
                // First occurrence wins, matching a front-to-back scan.
                by_code.entry(code.to_string()).or_insert(pos);
            }
        }

        Self {
            records,
            by_code,
            diagnostic,
        }
    }
}

/// Immutable in-memory store holding both reference tables.
///
/// Construction via [`TableStore::load`] never fails: a table whose file
/// is missing or malformed loads empty, with the reason kept as a
/// diagnostic and logged. Lookup by code goes through an index built at
/// load time, so it is O(1) instead of a scan; observable behavior is
/// identical, including first-match semantics for duplicate codes.
#[derive(Debug)]
pub struct TableStore {
    cid10: Dataset,
    sigtap: Dataset,
}

impl TableStore {
    /// Loads both tables from the resolved file paths.
    pub fn load(files: &TableFiles) -> Self {
        Self {
            cid10: load_dataset(Table::Cid10, files.path_for(Table::Cid10)),
            sigtap: load_dataset(Table::Sigtap, files.path_for(Table::Sigtap)),
        }
    }

    /// Builds a store directly from records, bypassing the filesystem.
    pub fn from_records(cid10: Vec<TableRecord>, sigtap: Vec<TableRecord>) -> Self {
        Self {
            cid10: Dataset::build(Table::Cid10, cid10, None),
            sigtap: Dataset::build(Table::Sigtap, sigtap, None),
        }
    }

    /// Returns the records of a table in load order.
    pub fn records(&self, table: Table) -> &[TableRecord] {
        &self.dataset(table).records
    }

    /// Returns the number of records loaded for a table.
    pub fn len(&self, table: Table) -> usize {
        self.dataset(table).records.len()
    }

    /// Returns true if a table loaded no records.
    pub fn is_empty(&self, table: Table) -> bool {
        self.dataset(table).records.is_empty()
    }

    /// Returns the load diagnostic for a table, if its load degraded.
    pub fn diagnostic(&self, table: Table) -> Option<&str> {
        self.dataset(table).diagnostic.as_deref()
    }

    /// Finds the first record whose code equals the normalized input.
    ///
    /// The raw code is normalized per the table's rule (trim + uppercase
    /// for CID-10, trim only for SIGTAP) and compared by exact string
    /// equality against the stored code field.
    pub fn find_by_code(&self, table: Table, raw: &str) -> Option<&TableRecord> {
        let dataset = self.dataset(table);
        let code = table.normalize_code(raw);
        dataset.by_code.get(&code).map(|&pos| &dataset.records[pos])
    }

    /// Searches a table for records containing the query.
    ///
    /// See [`crate::SearchOutcome`] for the count/truncation contract.
    /// Minimum query length is enforced at the HTTP boundary, not here.
    pub fn search(&self, table: Table, query: &str) -> SearchOutcome {
        search::search(&self.dataset(table).records, table, query)
    }

    fn dataset(&self, table: Table) -> &Dataset {
        match table {
            Table::Cid10 => &self.cid10,
            Table::Sigtap => &self.sigtap,
        }
    }
}

/// Loads one table, degrading to empty on any failure.
fn load_dataset(table: Table, path: Option<&Path>) -> Dataset {
    let Some(path) = path else {
        let diagnostic = format!("{} table file not found", table.stat_key());
        tracing::warn!("{}", diagnostic);
        return Dataset::build(table, Vec::new(), Some(diagnostic));
    };

    match load_table(path) {
        Ok(records) => {
            tracing::info!(
                "{} loaded: {} records from {}",
                table.stat_key(),
                records.len(),
                path.display()
            );
            Dataset::build(table, records, None)
        }
        Err(e) => {
            let diagnostic = format!("failed to load {} from {}: {}", table.stat_key(), path.display(), e);
            tracing::warn!("{}", diagnostic);
            Dataset::build(table, Vec::new(), Some(diagnostic))
        }
    }
}
