//! # medtab-types
//!
//! Type definitions for the medical reference tables service.
//!
//! Two reference tables are served: CID-10 diagnosis classification codes
//! and SIGTAP procedure codes. Records are loosely typed — a known code
//! field and text field per table, with every other field from the source
//! file preserved verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use medtab_types::{Table, TableRecord};
//!
//! let record: TableRecord = serde_json::from_str(
//!     r#"{"code": "A00", "description": "Cólera"}"#,
//! ).unwrap();
//!
//! assert_eq!(record.text(Table::Cid10.code_field()), "A00");
//! assert_eq!(Table::Cid10.normalize_code(" a00 "), "A00");
//! ```

#![warn(missing_docs)]

mod record;
mod table;

pub use record::TableRecord;
pub use table::Table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let table = Table::Cid10;
        assert_eq!(table.code_field(), "code");

        let record: TableRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.text("code"), "");
    }
}
