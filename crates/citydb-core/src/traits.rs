// crates/citydb-core/src/traits.rs
use crate::common::StoreStats;
use crate::error::Result;
use crate::model::City;
use crate::query::{QueryRequest, QueryResult};
use crate::text::FoldedTerm;
use std::cmp::Ordering;

/// Record types the filter can match against a search term.
///
/// Implementors expose the textual fields that take part in matching; the
/// default [`Searchable::matches`] compares each of them to the folded
/// term with base-sensitivity equality (see [`crate::text`]).
///
/// # Examples
/// ```rust
/// use citydb_core::text::FoldedTerm;
/// use citydb_core::traits::Searchable;
///
/// struct Place(String);
/// impl Searchable for Place {
///     fn search_fields(&self) -> impl Iterator<Item = &str> {
///         std::iter::once(self.0.as_str())
///     }
/// }
///
/// let place = Place("Łódź".to_string());
/// assert!(place.matches(&FoldedTerm::new("lodz")));
/// assert!(!place.matches(&FoldedTerm::new("lod")));
/// ```
pub trait Searchable {
    /// Fields compared against the search term.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// `true` if any search field equals the term after folding.
    #[inline]
    fn matches(&self, term: &FoldedTerm) -> bool {
        self.search_fields().any(|field| term.matches(field))
    }
}

/// Record types that can be ordered field by field.
///
/// `compare_field` must give the ascending order for `key`; direction is
/// applied by the caller (see [`crate::sort::Comparator`]).
pub trait Sortable {
    type Key: Copy;

    fn compare_field(&self, other: &Self, key: Self::Key) -> Ordering;
}

impl<T: Sortable + ?Sized> Sortable for &T {
    type Key = T::Key;

    #[inline]
    fn compare_field(&self, other: &Self, key: Self::Key) -> Ordering {
        (**self).compare_field(*other, key)
    }
}

/// Read operations offered by a city store.
pub trait CitySearch {
    fn stats(&self) -> StoreStats;

    /// All records in natural store order.
    fn cities(&self) -> &[City];

    fn find_city_by_id(&self, id: u64) -> Option<&City>;

    /// Filter, sort and paginate in one call.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use citydb_core::prelude::*;
    ///
    /// let store = CityStore::load().unwrap();
    /// let page = store.query(&QueryRequest::new().search("london")).unwrap();
    /// println!("{} of {} matches", page.records.len(), page.total_entries);
    /// ```
    fn query(&self, request: &QueryRequest) -> Result<QueryResult<'_>>;
}
