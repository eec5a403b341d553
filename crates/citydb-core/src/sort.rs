// crates/citydb-core/src/sort.rs

//! Multi-key, stable sorting.
//!
//! [`Comparator`] is a general comparator builder: it takes an ordered list
//! of (accessor, direction) pairs and evaluates them in order, the first
//! non-equal key deciding. It works for any record type. [`sort_by_criteria`]
//! wires it to [`Sortable`] records and a list of [`SortCriterion`]s.
//!
//! Sorting always goes through `slice::sort_by`, which is stable: records
//! equal under every key keep their input order.

use crate::error::CityDbError;
use crate::model::CityField;
use crate::traits::Sortable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Turn an ascending ordering into this direction's ordering.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

impl FromStr for Direction {
    type Err = CityDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            other => Err(CityDbError::InvalidArgument(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

/// One (key, direction) pair of a sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortCriterion<K> {
    pub key: K,
    #[serde(default)]
    pub direction: Direction,
}

impl<K> SortCriterion<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: Direction::Descending,
        }
    }
}

/// Ordered list of sort keys. Earlier entries are primary keys.
pub type SortCriteria<K> = Vec<SortCriterion<K>>;

impl FromStr for SortCriterion<CityField> {
    type Err = CityDbError;

    /// Parses `key` or `key:direction`, e.g. `population:desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.split_once(':') {
            Some((k, d)) => (k, d.parse()?),
            None => (s, Direction::Ascending),
        };
        Ok(SortCriterion {
            key: key.parse()?,
            direction,
        })
    }
}

impl<K: fmt::Display> fmt::Display for SortCriterion<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction.as_str())
    }
}

type CompareFn<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Comparator built from an ordered list of keys.
///
/// ```rust
/// use citydb_core::sort::{Comparator, Direction};
///
/// let mut rows = vec![(2u32, 1i32), (1, 2), (1, 3)];
/// let cmp = Comparator::new()
///     .by_key(|r: &(u32, i32)| r.0, Direction::Ascending)
///     .by_key(|r: &(u32, i32)| r.1, Direction::Descending);
/// rows.sort_by(|a, b| cmp.compare(a, b));
/// assert_eq!(rows, vec![(1, 3), (1, 2), (2, 1)]);
/// ```
pub struct Comparator<'a, T> {
    keys: Vec<(CompareFn<'a, T>, Direction)>,
}

impl<'a, T> Default for Comparator<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Comparator<'a, T> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Add a key from an accessor returning an `Ord` value.
    pub fn by_key<V, F>(self, accessor: F, direction: Direction) -> Self
    where
        V: Ord,
        F: Fn(&T) -> V + 'a,
    {
        self.by(move |a, b| accessor(a).cmp(&accessor(b)), direction)
    }

    /// Add a key from an ascending comparison function.
    pub fn by<F>(mut self, compare: F, direction: Direction) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        self.keys.push((Box::new(compare), direction));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluate keys in order; the first non-equal one decides.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for (compare, direction) in &self.keys {
            let ord = direction.apply(compare(a, b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Build a comparator for [`Sortable`] records from an ordered list of sort keys.
pub fn comparator_for<'a, T>(criteria: &[SortCriterion<T::Key>]) -> Comparator<'a, T>
where
    T: Sortable,
    T::Key: 'a,
{
    criteria.iter().fold(Comparator::new(), |cmp, c| {
        let key = c.key;
        cmp.by(move |a: &T, b: &T| a.compare_field(b, key), c.direction)
    })
}

/// Stable in-place sort by `criteria`. An empty list leaves the
/// slice untouched.
pub fn sort_by_criteria<T: Sortable>(items: &mut [T], criteria: &[SortCriterion<T::Key>]) {
    if criteria.is_empty() {
        return;
    }
    let cmp = comparator_for::<T>(criteria);
    items.sort_by(|a, b| cmp.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        population: u64,
        tag: u8,
    }

    #[derive(Debug, Clone, Copy)]
    enum RowKey {
        Name,
        Population,
    }

    impl Sortable for Row {
        type Key = RowKey;

        fn compare_field(&self, other: &Self, key: RowKey) -> Ordering {
            match key {
                RowKey::Name => self.name.cmp(other.name),
                RowKey::Population => self.population.cmp(&other.population),
            }
        }
    }

    fn row(name: &'static str, population: u64, tag: u8) -> Row {
        Row {
            name,
            population,
            tag,
        }
    }

    fn tags(rows: &[Row]) -> Vec<u8> {
        rows.iter().map(|r| r.tag).collect()
    }

    #[test]
    fn empty_criteria_keeps_order() {
        let mut rows = vec![row("b", 1, 0), row("a", 2, 1)];
        sort_by_criteria(&mut rows, &[]);
        assert_eq!(tags(&rows), vec![0, 1]);
    }

    #[test]
    fn single_key_both_directions() {
        let mut rows = vec![row("b", 1, 0), row("c", 2, 1), row("a", 3, 2)];
        sort_by_criteria(&mut rows, &[SortCriterion::ascending(RowKey::Name)]);
        assert_eq!(tags(&rows), vec![2, 0, 1]);
        sort_by_criteria(&mut rows, &[SortCriterion::descending(RowKey::Name)]);
        assert_eq!(tags(&rows), vec![1, 0, 2]);
    }

    #[test]
    fn later_keys_break_ties() {
        let mut rows = vec![
            row("london", 383_822, 0),
            row("berlin", 3_644_826, 1),
            row("london", 11_120_000, 2),
        ];
        sort_by_criteria(
            &mut rows,
            &[
                SortCriterion::ascending(RowKey::Name),
                SortCriterion::descending(RowKey::Population),
            ],
        );
        assert_eq!(tags(&rows), vec![1, 2, 0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut rows = vec![row("x", 1, 0), row("a", 1, 1), row("x", 1, 2), row("x", 1, 3)];
        sort_by_criteria(&mut rows, &[SortCriterion::descending(RowKey::Name)]);
        assert_eq!(tags(&rows), vec![0, 2, 3, 1]);
    }

    #[test]
    fn sorts_references() {
        let data = vec![row("b", 1, 0), row("a", 2, 1)];
        let mut refs: Vec<&Row> = data.iter().collect();
        sort_by_criteria(&mut refs, &[SortCriterion::ascending(RowKey::Name)]);
        assert_eq!(refs[0].tag, 1);
    }

    #[test]
    fn parses_key_and_direction() {
        let c: SortCriterion<CityField> = "population:desc".parse().unwrap();
        assert_eq!(c, SortCriterion::descending(CityField::Population));
        let c: SortCriterion<CityField> = "name".parse().unwrap();
        assert_eq!(c, SortCriterion::ascending(CityField::Name));
        assert!("name:sideways".parse::<SortCriterion<CityField>>().is_err());
        assert_eq!(c.to_string(), "name:ascending");
    }

    #[test]
    fn empty_comparator_treats_everything_as_equal() {
        let cmp: Comparator<'_, i32> = Comparator::new();
        assert!(cmp.is_empty());
        assert_eq!(cmp.compare(&1, &2), Ordering::Equal);
    }
}
