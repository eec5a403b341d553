// crates/citydb-core/src/paginate.rs
use serde::{Deserialize, Serialize};

/// Default page size when a request does not name one.
pub const DEFAULT_LIMIT: usize = 10_000;

/// Items-per-page choices offered by the table presenter.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Contiguous slice `[offset, offset + limit)` of `records`.
///
/// An offset at or past the end yields an empty slice, never a panic.
pub fn paginate<T>(records: &[T], offset: usize, limit: usize) -> &[T] {
    let start = offset.min(records.len());
    let end = start.saturating_add(limit).min(records.len());
    &records[start..end]
}

/// An (offset, limit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Window {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Build a window from signed input, clamping negatives to zero.
    pub fn clamped(offset: i64, limit: i64) -> Self {
        Self {
            offset: usize::try_from(offset.max(0)).unwrap_or(usize::MAX),
            limit: usize::try_from(limit.max(0)).unwrap_or(usize::MAX),
        }
    }

    /// Window for a 1-based page number. Page 0 is treated as page 1.
    pub fn for_page(page: usize, per_page: usize) -> Self {
        Self {
            offset: page.saturating_sub(1).saturating_mul(per_page),
            limit: per_page,
        }
    }

    pub fn apply<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        paginate(records, self.offset, self.limit)
    }
}

/// Pager state derived from a window and a result's `total_entries`.
///
/// First/previous are disabled on the first page; next/last once the
/// window reaches the end of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub offset: usize,
    pub limit: usize,
    pub total_entries: usize,
    /// 1-based.
    pub page: usize,
    pub page_count: usize,
    pub is_first_page_disabled: bool,
    pub is_last_page_disabled: bool,
}

impl PageInfo {
    pub fn new(window: Window, total_entries: usize) -> Self {
        let Window { offset, limit } = window;
        let (page, page_count) = if limit == 0 {
            (1, 1)
        } else {
            (offset / limit + 1, total_entries.div_ceil(limit).max(1))
        };
        Self {
            offset,
            limit,
            total_entries,
            page,
            page_count,
            is_first_page_disabled: offset == 0,
            is_last_page_disabled: offset.saturating_add(limit) >= total_entries,
        }
    }

    pub fn previous(&self) -> Option<Window> {
        (!self.is_first_page_disabled)
            .then(|| Window::new(self.offset.saturating_sub(self.limit), self.limit))
    }

    pub fn next(&self) -> Option<Window> {
        (!self.is_last_page_disabled).then(|| Window::new(self.offset + self.limit, self.limit))
    }

    pub fn first(&self) -> Window {
        Window::new(0, self.limit)
    }

    pub fn last(&self) -> Window {
        Window::for_page(self.page_count, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_inside_bounds() {
        let data = [0, 1, 2, 3, 4];
        assert_eq!(paginate(&data, 1, 2), &[1, 2]);
        assert_eq!(paginate(&data, 3, 10), &[3, 4]);
        assert_eq!(paginate(&data, 0, 0), &[] as &[i32]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let data = [0, 1, 2];
        assert!(paginate(&data, 3, 1).is_empty());
        assert!(paginate(&data, 100_000, 10).is_empty());
        assert!(paginate(&data, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn clamps_negative_input() {
        assert_eq!(Window::clamped(-5, -1), Window::new(0, 0));
        assert_eq!(Window::clamped(4, 2), Window::new(4, 2));
    }

    #[test]
    fn page_windows() {
        assert_eq!(Window::for_page(1, 25), Window::new(0, 25));
        assert_eq!(Window::for_page(3, 10), Window::new(20, 10));
        assert_eq!(Window::for_page(0, 10), Window::new(0, 10));
    }

    #[test]
    fn pager_state_on_first_middle_and_last_page() {
        let first = PageInfo::new(Window::new(0, 10), 25);
        assert_eq!((first.page, first.page_count), (1, 3));
        assert!(first.is_first_page_disabled);
        assert!(!first.is_last_page_disabled);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(Window::new(10, 10)));

        let middle = PageInfo::new(Window::new(10, 10), 25);
        assert!(!middle.is_first_page_disabled && !middle.is_last_page_disabled);

        let last = PageInfo::new(Window::new(20, 10), 25);
        assert!(last.is_last_page_disabled);
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(Window::new(10, 10)));
        assert_eq!(first.last(), Window::new(20, 10));
    }

    #[test]
    fn pager_on_empty_result() {
        let info = PageInfo::new(Window::new(0, 10), 0);
        assert_eq!(info.page_count, 1);
        assert!(info.is_first_page_disabled && info.is_last_page_disabled);
    }
}
