#![allow(dead_code)]
//! Shared fixtures for the integration harnesses.

use citydb_core::raw::CityRaw;
use citydb_core::{City, CityStore};
use std::path::PathBuf;

/// The bundled 40-city sample dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("worldcities.json")
}

/// Fixture store, parsed without touching the snapshot cache.
pub fn fixture_store() -> CityStore {
    CityStore::load_json(fixture_path()).expect("fixture dataset must load")
}

pub fn row(id: u64, name: &str, country: &str, population: u64) -> CityRaw {
    CityRaw(
        id,
        name.to_string(),
        citydb_core::text::fold_key(name),
        country.to_string(),
        "XXX".to_string(),
        String::new(),
        population,
    )
}

pub fn names<'a>(cities: &[&'a City]) -> Vec<&'a str> {
    cities.iter().map(|c| c.name.as_str()).collect()
}
