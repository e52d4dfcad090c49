//! Case-insensitive substring search over a loaded table.

use medtab_types::{Table, TableRecord};
use serde::Serialize;

/// Maximum number of records returned by a search.
///
/// `SearchOutcome::count` still reports the full match count, so callers
/// can tell when results were truncated.
pub const MAX_RESULTS: usize = 50;

/// Result of a table search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Total number of matching records, before truncation.
    pub count: usize,
    /// Matching records in store order, at most [`MAX_RESULTS`].
    pub results: Vec<TableRecord>,
}

/// Scans `records` for entries whose text or code field contains `query`.
///
/// The query is trimmed and lowercased; both designated fields are
/// lowercased before the substring test, so matching is case-insensitive
/// throughout. Records that lack a field match as if it were empty.
/// Results keep the relative order of `records`.
pub(crate) fn search(records: &[TableRecord], table: Table, query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();

    let mut count = 0;
    let mut results = Vec::new();
    for record in records {
        let text = record.text(table.text_field()).to_lowercase();
        let code = record.text(table.code_field()).to_lowercase();

        if text.contains(&needle) || code.contains(&needle) {
            count += 1;
            if results.len() < MAX_RESULTS {
                results.push(record.clone());
            }
        }
    }

    SearchOutcome { count, results }
}
