//! Table file loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use medtab_types::TableRecord;

use crate::types::LoadResult;

/// Loads a reference table from a JSON file.
///
/// The file must contain a top-level JSON array of objects. Array order
/// is preserved and becomes the result order for searches. No schema
/// validation happens beyond that shape: each element deserializes into
/// a [`TableRecord`] with all of its fields kept verbatim.
pub fn load_table<P: AsRef<Path>>(path: P) -> LoadResult<Vec<TableRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}
