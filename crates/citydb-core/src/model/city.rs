// crates/citydb-core/src/model/city.rs
use super::field::{CityField, FieldValue};
use crate::traits::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A city record. Immutable once loaded into a [`crate::CityStore`].
///
/// Serialized with camelCase keys (`nameAscii`, `countryIso3`), which is the
/// shape presentation layers bind to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Unique and stable for the lifetime of the process.
    pub id: u64,
    pub name: String,
    /// ASCII-folded form of `name` as shipped by the dataset.
    pub name_ascii: String,
    pub country: String,
    /// ISO 3166-1 alpha-3 code, e.g. `"JPN"`.
    pub country_iso3: String,
    /// Capital classification (`"primary"`, `"admin"`, `"minor"` or empty).
    pub capital: String,
    pub population: u64,
}

impl City {
    /// Typed view of a single field, used for ordering and display.
    pub fn field(&self, key: CityField) -> FieldValue<'_> {
        match key {
            CityField::Id => FieldValue::Int(self.id),
            CityField::Name => FieldValue::Text(&self.name),
            CityField::NameAscii => FieldValue::Text(&self.name_ascii),
            CityField::Country => FieldValue::Text(&self.country),
            CityField::CountryIso3 => FieldValue::Text(&self.country_iso3),
            CityField::Capital => FieldValue::Text(&self.capital),
            CityField::Population => FieldValue::Int(self.population),
        }
    }

    pub fn is_capital(&self) -> bool {
        self.capital == "primary"
    }
}

impl Searchable for City {
    /// A city matches on its display name or its country name.
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.country.as_str()].into_iter()
    }
}

impl Sortable for City {
    type Key = CityField;

    #[inline]
    fn compare_field(&self, other: &Self, key: CityField) -> Ordering {
        self.field(key).cmp(&other.field(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FoldedTerm;

    fn city(name: &str, country: &str, population: u64) -> City {
        City {
            id: 1,
            name: name.into(),
            name_ascii: crate::text::fold_key(name),
            country: country.into(),
            country_iso3: "XXX".into(),
            capital: String::new(),
            population,
        }
    }

    #[test]
    fn matches_name_or_country() {
        let c = city("Valletta", "Malta", 6444);
        assert!(c.matches(&FoldedTerm::new("valletta")));
        assert!(c.matches(&FoldedTerm::new("MALTA")));
        assert!(!c.matches(&FoldedTerm::new("Vall")));
    }

    #[test]
    fn does_not_match_on_ascii_name_column() {
        let mut c = city("Zürich", "Switzerland", 434335);
        c.name_ascii = "Zuerich".into();
        assert!(!c.matches(&FoldedTerm::new("zuerich")));
        assert!(c.matches(&FoldedTerm::new("zurich")));
    }

    #[test]
    fn compares_numbers_numerically() {
        let small = city("A", "X", 9);
        let big = city("B", "X", 10);
        assert_eq!(
            small.compare_field(&big, CityField::Population),
            Ordering::Less
        );
    }

    #[test]
    fn compares_text_lexicographically() {
        let a = city("Abbotsford", "Canada", 1);
        let w = city("Winnipeg", "Canada", 1);
        assert_eq!(a.compare_field(&w, CityField::Name), Ordering::Less);
        assert_eq!(a.compare_field(&w, CityField::Country), Ordering::Equal);
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(city("Tokyo", "Japan", 1)).unwrap();
        assert!(json.get("nameAscii").is_some());
        assert!(json.get("countryIso3").is_some());
    }
}
