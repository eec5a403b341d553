// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! A read-only store of world cities and the query engine over it.
//!
//! A query filters the store by a search term (exact, case- and
//! accent-insensitive match on city or country name), sorts the matches by
//! any number of keys (stable, each key ascending or descending), counts
//! them, and returns one `[offset, offset + limit)` page.
//!
//! ```no_run
//! use citydb_core::prelude::*;
//!
//! let store = CityStore::load()?;
//! let request = QueryRequest::new()
//!     .search("canada")
//!     .sort_by(SortCriterion::descending(CityField::Population))
//!     .limit(5);
//! let result = store.query(&request)?;
//! for city in &result.records {
//!     println!("{} ({})", city.name, city.population);
//! }
//! println!("{} total", result.total_entries);
//! # Ok::<(), citydb_core::CityDbError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod prelude;
pub mod query;
pub mod sort;
pub mod store;
pub mod text;
pub mod traits;
// Shared raw input rows, as shipped in the dataset.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::StoreStats;
pub use crate::error::{CityDbError, Result};
pub use crate::model::{City, CityField, FieldValue};
pub use crate::query::{query, QueryRequest, QueryResult};
pub use crate::sort::{Direction, SortCriteria, SortCriterion};
pub use crate::store::CityStore;
pub use crate::traits::CitySearch;
