//! Error handling example for citydb-rs
//!
//! This example demonstrates the search fault and the edge cases that are
//! deliberately not errors.

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Error Handling Example ===\n");

    // Example 1: Handling store load errors
    println!("--- Example 1: Loading from a missing file ---");
    match CityStore::load_from_path("does/not/exist.json") {
        Ok(store) => println!("✓ Unexpectedly loaded {} cities", store.len()),
        Err(e) => println!("✗ Failed to load store: {e}"),
    }
    println!();

    let store = CityStore::load()?;

    // Example 2: The search fault
    println!("--- Example 2: Searching for 'error' ---");
    match store.query(&QueryRequest::new().search("Error")) {
        Ok(result) => println!("  Found {} cities", result.total_entries),
        Err(e) if e.is_search_failure() => println!("  Search failed: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Not errors
    println!("--- Example 3: Edge cases that return normal results ---");
    let past_end = store.query(&QueryRequest::new().offset(1_000_000))?;
    println!(
        "  Offset past the end: {} records, {} total",
        past_end.records.len(),
        past_end.total_entries
    );
    let no_match = store.query(&QueryRequest::new().search("Atlantis"))?;
    println!("  No match: {} records", no_match.total_entries);
    let clamped = Window::clamped(-10, -1);
    println!("  Negative window clamps to offset {} limit {}", clamped.offset, clamped.limit);

    Ok(())
}
