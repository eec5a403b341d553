// crates/citydb-core/src/store.rs
use crate::common::StoreStats;
use crate::error::{CityDbError, Result};
use crate::model::City;
use crate::query::{query, QueryRequest, QueryResult};
use crate::raw::CitiesRaw;
use crate::traits::CitySearch;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The read-only record store.
///
/// Built once from the dataset and never mutated afterwards; queries only
/// borrow from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityStore {
    /// Master list of all cities, in dataset order.
    cities: Vec<City>,
    /// id -> position in `cities`. Rebuilt on load, not serialized.
    #[serde(skip)]
    by_id: HashMap<u64, usize>,
}

impl CityStore {
    /// Build a store from raw dataset rows, validating them.
    pub fn from_rows(rows: CitiesRaw) -> Result<Self> {
        Self::from_cities(rows.into_iter().map(City::from).collect())
    }

    /// Build a store from already converted records, validating them.
    ///
    /// A malformed dataset is a startup failure: duplicate ids, empty names
    /// and country codes that are neither empty nor three ASCII letters are
    /// rejected with [`CityDbError::InvalidDataset`].
    pub fn from_cities(cities: Vec<City>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cities.len());
        for (idx, city) in cities.iter().enumerate() {
            validate(city, idx)?;
            if by_id.insert(city.id, idx).is_some() {
                return Err(CityDbError::InvalidDataset(format!(
                    "duplicate city id {} at row {idx}",
                    city.id
                )));
            }
        }
        Ok(Self { cities, by_id })
    }

    /// Rebuild the id index after deserializing a snapshot.
    pub(crate) fn reindex(self) -> Result<Self> {
        Self::from_cities(self.cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&City> {
        self.by_id.get(&id).map(|&idx| &self.cities[idx])
    }
}

fn validate(city: &City, row: usize) -> Result<()> {
    if city.name.trim().is_empty() {
        return Err(CityDbError::InvalidDataset(format!(
            "city {} at row {row} has an empty name",
            city.id
        )));
    }
    let iso3 = city.country_iso3.as_str();
    if !iso3.is_empty() && !(iso3.len() == 3 && iso3.bytes().all(|b| b.is_ascii_alphabetic())) {
        return Err(CityDbError::InvalidDataset(format!(
            "city {} at row {row} has an invalid country code {iso3:?}",
            city.id
        )));
    }
    Ok(())
}

impl CitySearch for CityStore {
    fn stats(&self) -> StoreStats {
        let countries: HashSet<&str> = self.cities.iter().map(|c| c.country.as_str()).collect();
        StoreStats {
            cities: self.cities.len(),
            countries: countries.len(),
            total_population: self.cities.iter().map(|c| c.population).sum(),
        }
    }

    fn cities(&self) -> &[City] {
        &self.cities
    }

    fn find_city_by_id(&self, id: u64) -> Option<&City> {
        self.get(id)
    }

    fn query(&self, request: &QueryRequest) -> Result<QueryResult<'_>> {
        query(self, request)
    }
}
