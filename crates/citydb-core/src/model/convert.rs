// crates/citydb-core/src/model/convert.rs
use super::City;
use crate::raw::CityRaw;

/// **Standard Converter:** Raw row -> City.
impl From<CityRaw> for City {
    fn from(raw: CityRaw) -> Self {
        let CityRaw(id, name, name_ascii, country, country_iso3, capital, population) = raw;
        City {
            id,
            name,
            name_ascii,
            country,
            country_iso3,
            capital,
            population,
        }
    }
}

impl From<&City> for CityRaw {
    fn from(c: &City) -> Self {
        CityRaw(
            c.id,
            c.name.clone(),
            c.name_ascii.clone(),
            c.country.clone(),
            c.country_iso3.clone(),
            c.capital.clone(),
            c.population,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_in_order() {
        let raw = CityRaw(
            1392685764,
            "Tokyo".into(),
            "Tokyo".into(),
            "Japan".into(),
            "JPN".into(),
            "primary".into(),
            37977000,
        );
        let city = City::from(raw.clone());
        assert_eq!(city.id, 1392685764);
        assert_eq!(city.country_iso3, "JPN");
        assert_eq!(city.population, 37977000);
        assert_eq!(CityRaw::from(&city), raw);
    }
}
