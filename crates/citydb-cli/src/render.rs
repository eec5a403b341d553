use citydb_core::paginate::PageInfo;
use citydb_core::{City, CityField, QueryResult, StoreStats};
use std::fmt::Write;

/// Plain-text table with the columns the city list shows.
pub fn table(result: &QueryResult<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<28} {:<24} {:>12}", "ID", "City", "Country", "Population");
    for city in &result.records {
        let _ = writeln!(out, "{}", row(city));
    }
    if result.records.is_empty() {
        let _ = writeln!(out, "No results.");
    }
    let _ = writeln!(out, "{} of {} matching cities", result.records.len(), result.total_entries);
    out
}

fn row(city: &City) -> String {
    format!(
        "{:<12} {:<28} {:<24} {:>12}",
        city.id,
        truncate(&city.name, 28),
        truncate(&city.country, 24),
        city.population
    )
}

/// Pad-safe truncation on char boundaries.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

pub fn pager(info: &PageInfo) -> String {
    let flag = |disabled: bool, label: &str| {
        if disabled {
            format!("({label})")
        } else {
            format!("[{label}]")
        }
    };
    format!(
        "{} {} page {} of {} {} {}",
        flag(info.is_first_page_disabled, "first"),
        flag(info.is_first_page_disabled, "prev"),
        info.page,
        info.page_count,
        flag(info.is_last_page_disabled, "next"),
        flag(info.is_last_page_disabled, "last"),
    )
}

/// Detail view: one `key: value` line per column.
pub fn city(city: &City) -> String {
    let mut out = String::new();
    for field in CityField::ALL {
        let value = city.field(field).to_string();
        let value = if value.is_empty() { "-" } else { value.as_str() };
        let _ = writeln!(out, "{:<12} {}", format!("{field}:"), value);
    }
    if city.is_capital() {
        let _ = writeln!(out, "(national capital)");
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn stats(stats: &StoreStats) -> String {
    format!(
        "Dataset statistics:\n  Cities: {}\n  Countries: {}\n  Total population: {}",
        stats.cities, stats.countries, stats.total_population
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use citydb_core::paginate::Window;

    #[test]
    fn truncates_long_names_on_char_boundaries() {
        assert_eq!(truncate("Zürich", 10), "Zürich");
        assert_eq!(truncate("Llanfairpwllgwyngyll", 6), "Llanf…");
    }

    #[test]
    fn pager_marks_disabled_controls() {
        let info = PageInfo::new(Window::new(0, 10), 15);
        assert_eq!(pager(&info), "(first) (prev) page 1 of 2 [next] [last]");
    }

    #[test]
    fn city_detail_lists_every_column_and_marks_capitals() {
        let valletta = City {
            id: 1470574399,
            name: "Valletta".into(),
            name_ascii: "Valletta".into(),
            country: "Malta".into(),
            country_iso3: "MLT".into(),
            capital: "primary".into(),
            population: 6444,
        };
        let text = city(&valletta);
        assert!(text.starts_with("id:          1470574399\n"));
        assert!(text.contains("countryIso3: MLT\n"));
        assert!(text.contains("population:  6444\n"));
        assert!(text.ends_with("(national capital)"));

        let plain = City { capital: String::new(), ..valletta };
        let text = city(&plain);
        assert!(text.contains("capital:     -\n"));
        assert!(text.ends_with("population:  6444"));
    }

    #[test]
    fn empty_result_says_so() {
        let result = QueryResult {
            records: Vec::new(),
            total_entries: 0,
        };
        let text = table(&result);
        assert!(text.contains("No results."));
        assert!(text.ends_with("0 of 0 matching cities\n"));
    }
}
