//! Property harness for the filter / sort / paginate pipeline.
//!
//! # What this covers
//!
//! - **Filter identity**: an empty term returns the input unchanged.
//! - **Sort idempotence**: sorting twice equals sorting once.
//! - **Empty criteria**: sorting with no keys keeps input order.
//! - **Stability**: records equal on every key keep their relative order.
//! - **Pagination**: windows are contiguous slices; past-the-end is empty.
//! - **totalEntries**: independent of offset and limit.
//!
//! # Running
//!
//! ```sh
//! cargo test -p citydb-core --test properties
//! ```

mod common;
use citydb_core::filter::filter_records;
use citydb_core::prelude::*;
use common::row;
use proptest::prelude::*;

fn arb_store() -> impl Strategy<Value = CityStore> {
    // Small alphabets so that ties and search hits are common.
    let names = prop::sample::select(vec!["London", "Paris", "Córdoba", "cordoba", "Oslo"]);
    let countries = prop::sample::select(vec!["Canada", "France", "Spain", "Norway"]);
    prop::collection::vec((names, countries, 0u64..5), 0..40).prop_map(|rows| {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, country, pop))| row(i as u64, name, country, pop))
            .collect();
        CityStore::from_rows(rows).expect("generated rows are valid")
    })
}

fn arb_criteria() -> impl Strategy<Value = SortCriteria<CityField>> {
    let field = prop::sample::select(CityField::ALL.to_vec());
    let direction = prop::sample::select(vec![Direction::Ascending, Direction::Descending]);
    prop::collection::vec(
        (field, direction).prop_map(|(key, direction)| SortCriterion { key, direction }),
        0..4,
    )
}

fn ids(cities: &[&City]) -> Vec<u64> {
    cities.iter().map(|c| c.id).collect()
}

proptest! {
    #[test]
    fn empty_term_is_identity(store in arb_store()) {
        let all = filter_records(store.cities(), Some("")).unwrap();
        let expected: Vec<&City> = store.cities().iter().collect();
        prop_assert_eq!(ids(&all), ids(&expected));
    }

    #[test]
    fn filter_keeps_input_order(store in arb_store()) {
        let hits = filter_records(store.cities(), Some("london")).unwrap();
        let hit_ids = ids(&hits);
        let mut sorted = hit_ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(hit_ids, sorted);
    }

    #[test]
    fn sort_is_idempotent(store in arb_store(), criteria in arb_criteria()) {
        let mut once: Vec<&City> = store.cities().iter().collect();
        sort_by_criteria(&mut once, &criteria);
        let mut twice = once.clone();
        sort_by_criteria(&mut twice, &criteria);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn empty_criteria_keeps_order(store in arb_store()) {
        let mut records: Vec<&City> = store.cities().iter().collect();
        sort_by_criteria(&mut records, &[]);
        let expected: Vec<&City> = store.cities().iter().collect();
        prop_assert_eq!(ids(&records), ids(&expected));
    }

    #[test]
    fn sort_is_stable(store in arb_store(), criteria in arb_criteria()) {
        let mut sorted: Vec<&City> = store.cities().iter().collect();
        sort_by_criteria(&mut sorted, &criteria);
        // Ids are assigned in store order, so ties must come out with ascending ids.
        for pair in sorted.windows(2) {
            let tied = criteria
                .iter()
                .all(|c| pair[0].compare_field(pair[1], c.key).is_eq());
            if tied {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn sort_respects_each_key_in_turn(store in arb_store(), criteria in arb_criteria()) {
        let mut sorted: Vec<&City> = store.cities().iter().collect();
        sort_by_criteria(&mut sorted, &criteria);
        for pair in sorted.windows(2) {
            for c in &criteria {
                let ord = c.direction.apply(pair[0].compare_field(pair[1], c.key));
                prop_assert!(!ord.is_gt());
                if ord.is_lt() {
                    break;
                }
            }
        }
    }

    #[test]
    fn offset_past_end_is_empty(len in 0usize..50, extra in 0usize..10, limit in 0usize..20) {
        let data: Vec<usize> = (0..len).collect();
        prop_assert!(paginate(&data, len + extra, limit).is_empty());
    }

    #[test]
    fn page_is_a_contiguous_slice(len in 0usize..50, offset in 0usize..60, limit in 0usize..20) {
        let data: Vec<usize> = (0..len).collect();
        let page = paginate(&data, offset, limit);
        prop_assert!(page.len() <= limit);
        for (i, v) in page.iter().enumerate() {
            prop_assert_eq!(*v, offset + i);
        }
    }

    #[test]
    fn total_entries_ignores_window(
        store in arb_store(),
        criteria in arb_criteria(),
        offset in 0usize..50,
        limit in 0usize..50,
    ) {
        let full = store
            .query(&QueryRequest::new().search("canada").sort_method(criteria.clone()))
            .unwrap();
        let windowed = store
            .query(
                &QueryRequest::new()
                    .search("canada")
                    .sort_method(criteria)
                    .offset(offset)
                    .limit(limit),
            )
            .unwrap();
        prop_assert_eq!(full.total_entries, windowed.total_entries);
        let expected: Vec<&City> = full.records.iter().skip(offset).take(limit).copied().collect();
        prop_assert_eq!(ids(&windowed.records), ids(&expected));
    }
}
