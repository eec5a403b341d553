// crates/citydb-core/src/query.rs

//! The query pipeline: filter, then sort, then count, then paginate.
//!
//! Every call recomputes its answer from the immutable store, so queries
//! are independent of each other and safe to run from several threads.

use crate::error::Result;
use crate::filter::filter_records;
use crate::model::{City, CityField};
use crate::paginate::{paginate, PageInfo, Window, DEFAULT_LIMIT};
use crate::sort::{sort_by_criteria, SortCriteria, SortCriterion};
use crate::store::CityStore;
use crate::traits::CitySearch;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Parameters of one query. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    pub search_term: Option<String>,
    pub sort_method: SortCriteria<CityField>,
    #[serde(deserialize_with = "clamp_to_usize")]
    pub offset: usize,
    #[serde(deserialize_with = "clamp_to_usize")]
    pub limit: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            search_term: None,
            sort_method: Vec::new(),
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn sort_by(mut self, criterion: SortCriterion<CityField>) -> Self {
        self.sort_method.push(criterion);
        self
    }

    pub fn sort_method(mut self, criteria: SortCriteria<CityField>) -> Self {
        self.sort_method = criteria;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn window(&self) -> Window {
        Window::new(self.offset, self.limit)
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.offset = window.offset;
        self.limit = window.limit;
        self
    }
}

/// Negative numbers coming from loosely typed callers are clamped to zero.
fn clamp_to_usize<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(usize::try_from(v.max(0)).unwrap_or(usize::MAX))
}

/// One page of matches plus the number of matches before pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<'a> {
    pub records: Vec<&'a City>,
    pub total_entries: usize,
}

impl QueryResult<'_> {
    /// Pager state for the window that produced this result.
    pub fn page_info(&self, window: Window) -> PageInfo {
        PageInfo::new(window, self.total_entries)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run `request` against `store`.
///
/// A [`crate::CityDbError::SearchFailure`] from the filter aborts the whole
/// query; there is no partial result.
pub fn query<'a>(store: &'a CityStore, request: &QueryRequest) -> Result<QueryResult<'a>> {
    let mut matched = filter_records(store.cities(), request.search_term.as_deref())?;
    sort_by_criteria(&mut matched, &request.sort_method);

    let total_entries = matched.len();
    let records = paginate(&matched, request.offset, request.limit).to_vec();

    debug!(
        search_term = request.search_term.as_deref().unwrap_or(""),
        sort_keys = request.sort_method.len(),
        offset = request.offset,
        limit = request.limit,
        total_entries,
        returned = records.len(),
        "query"
    );

    Ok(QueryResult {
        records,
        total_entries,
    })
}
