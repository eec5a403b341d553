// crates/citydb-core/src/model/mod.rs
pub mod city;
pub mod convert;
pub mod field;

pub use city::City;
pub use field::{CityField, FieldValue};

/// Suffix appended to a source dataset path to name its bincode snapshot.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "bin.gz";
