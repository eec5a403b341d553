//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Load the city store
//! - Search by city or country name
//! - Sort by several keys
//! - Page through a result

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Basic Usage Example ===\n");

    println!("Loading city store...");
    let store = CityStore::load()?;
    println!("✓ Store loaded: {} cities\n", store.len());

    // Example 1: First records in natural order
    println!("--- Example 1: First five cities ---");
    let result = store.query(&QueryRequest::new().limit(5))?;
    for (i, city) in result.records.iter().enumerate() {
        println!("{}. {} ({})", i + 1, city.name, city.country);
    }
    println!();

    // Example 2: Search by country, largest first
    println!("--- Example 2: Cities in Canada by population ---");
    let request = QueryRequest::new()
        .search("canada")
        .sort_by(SortCriterion::descending(CityField::Population));
    let result = store.query(&request)?;
    for city in &result.records {
        println!("  {:<12} {:>10}", city.name, city.population);
    }
    println!("  {} total\n", result.total_entries);

    // Example 3: Two keys break ties between same-named cities
    println!("--- Example 3: All the Londons ---");
    let request = QueryRequest::new()
        .search("london")
        .sort_by(SortCriterion::ascending(CityField::Name))
        .sort_by(SortCriterion::descending(CityField::Population));
    for city in store.query(&request)?.records {
        println!("  {}, {} ({})", city.name, city.country, city.population);
    }
    println!();

    // Example 4: Paging
    println!("--- Example 4: Page 2 of 10, sorted by name ---");
    let window = Window::for_page(2, 10);
    let request = QueryRequest::new()
        .sort_by(SortCriterion::ascending(CityField::Name))
        .with_window(window);
    let result = store.query(&request)?;
    for city in &result.records {
        println!("  {}", city.name);
    }
    let info = result.page_info(window);
    println!(
        "  page {} of {} (prev disabled: {}, next disabled: {})",
        info.page, info.page_count, info.is_first_page_disabled, info.is_last_page_disabled
    );

    Ok(())
}
