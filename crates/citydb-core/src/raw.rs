// crates/citydb-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// One row of the source dataset, in column order:
/// `[id, name, nameAscii, country, countryIso3, capital, population]`.
///
/// The tuple layout keeps the shipped JSON compact (no repeated keys).
/// NOTE: this mirrors the external dataset; the public model is [`crate::City`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRaw(
    pub u64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub u64,
);

pub type CitiesRaw = Vec<CityRaw>;
