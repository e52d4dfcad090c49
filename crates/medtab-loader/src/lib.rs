//! # medtab-loader
//!
//! Loading and in-memory querying of the medical reference tables.
//!
//! Table files are JSON arrays of objects read once at startup into a
//! [`TableStore`]. Load failures degrade the affected table to an empty
//! dataset with a recorded diagnostic; they never abort the process.
//! After construction the store is read-only, so it can be shared across
//! request handlers without locking.
//!
//! ```ignore
//! use medtab_loader::{TableFiles, TableStore};
//! use medtab_types::Table;
//!
//! let files = TableFiles::discover(".");
//! let store = TableStore::load(&files);
//!
//! let outcome = store.search(Table::Cid10, "cólera");
//! println!("{} matches", outcome.count);
//! ```

#![warn(missing_docs)]

mod loader;
mod search;
mod store;
mod types;

pub use loader::load_table;
pub use search::{SearchOutcome, MAX_RESULTS};
pub use store::TableStore;
pub use types::{LoadError, LoadResult, TableFiles};

// Re-export medtab-types for convenience
pub use medtab_types;
