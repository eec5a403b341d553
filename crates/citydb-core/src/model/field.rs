// crates/citydb-core/src/model/field.rs
use crate::error::CityDbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sortable columns of a [`super::City`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CityField {
    Id,
    Name,
    NameAscii,
    Country,
    CountryIso3,
    Capital,
    Population,
}

impl CityField {
    /// All fields in dataset column order.
    pub const ALL: [CityField; 7] = [
        CityField::Id,
        CityField::Name,
        CityField::NameAscii,
        CityField::Country,
        CityField::CountryIso3,
        CityField::Capital,
        CityField::Population,
    ];

    /// The camelCase key used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            CityField::Id => "id",
            CityField::Name => "name",
            CityField::NameAscii => "nameAscii",
            CityField::Country => "country",
            CityField::CountryIso3 => "countryIso3",
            CityField::Capital => "capital",
            CityField::Population => "population",
        }
    }
}

impl fmt::Display for CityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CityField {
    type Err = CityDbError;

    /// Accepts the camelCase key or its snake_case spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('_', "").to_ascii_lowercase();
        CityField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| CityDbError::InvalidArgument(format!("unknown sort key: {s}")))
    }
}

/// Borrowed, typed value of one city field.
///
/// Ordering is native: numeric for `Int`, byte-lexicographic for `Text`.
/// A given [`CityField`] always yields the same variant, so mixed
/// comparisons never happen in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue<'a> {
    Int(u64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}
