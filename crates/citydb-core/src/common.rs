use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the store.
///
/// Returned by [`crate::CitySearch::stats`]; counts reflect the dataset as
/// loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub cities: usize,
    /// Distinct country names.
    pub countries: usize,
    pub total_population: u64,
}
