//! citydb prelude: bring common types and traits into scope.

pub use crate::common::StoreStats;
pub use crate::error::{CityDbError, Result};
pub use crate::loader::CacheMode;
pub use crate::model::{City, CityField, FieldValue};
pub use crate::paginate::{paginate, PageInfo, Window, DEFAULT_LIMIT, PAGE_SIZES};
pub use crate::query::{query, QueryRequest, QueryResult};
pub use crate::sort::{sort_by_criteria, Comparator, Direction, SortCriteria, SortCriterion};
pub use crate::store::CityStore;
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{CitySearch, Searchable, Sortable};
