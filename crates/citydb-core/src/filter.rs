// crates/citydb-core/src/filter.rs
use crate::error::{CityDbError, Result};
use crate::text::FoldedTerm;
use crate::traits::Searchable;

/// Search term that makes every query fail with [`CityDbError::SearchFailure`].
pub const FAULT_TERM: &str = "error";

/// Keep the records whose search fields equal `term` under base-sensitivity
/// comparison (case- and accent-insensitive, exact, no substring matching).
///
/// - `None` or an empty term returns every record in input order.
/// - A term folding to `"error"` fails with [`CityDbError::SearchFailure`]
///   before any record is looked at.
/// - Otherwise each record is tested on its own and input order is kept.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], term: Option<&str>) -> Result<Vec<&'a T>> {
    let term = match term {
        Some(t) if !t.is_empty() => FoldedTerm::new(t),
        _ => return Ok(records.iter().collect()),
    };

    if term.folded() == FAULT_TERM {
        return Err(CityDbError::SearchFailure);
    }

    Ok(records.iter().filter(|r| r.matches(&term)).collect())
}
