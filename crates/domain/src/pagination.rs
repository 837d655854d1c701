//! Client-side pagination over an in-memory list.
//!
//! Pages are 1-indexed. All functions are pure.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// `ceil(len / page_size)`; zero when there is nothing to show.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `current_page` within a list of `len` items.
///
/// Pages past the end yield an empty range at `len`.
pub fn page_bounds(current_page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = current_page.saturating_mul(page_size).min(len);
    start..end.max(start)
}

/// The slice of `items` displayed on `current_page`.
pub fn page_slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(current_page, page_size, items.len())]
}

/// Sliding window of at most five page numbers around `current_page`,
/// clamped to `[1, total_pages]`.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let span = PAGE_WINDOW - 1;
    let start = current_page.saturating_sub(2).max(1);
    let end = (start + span).min(total_pages);
    let start = end.saturating_sub(span).max(1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_five_players_make_three_pages() {
        let items: Vec<u32> = (1..=45).collect();
        assert_eq!(total_pages(items.len(), 20), 3);

        let first = page_slice(&items, 1, 20);
        assert_eq!(first.len(), 20);
        assert_eq!(first.first(), Some(&1));
        assert_eq!(first.last(), Some(&20));

        let last = page_slice(&items, 3, 20);
        assert_eq!(last, &[41, 42, 43, 44, 45]);
    }

    #[test]
    fn page_length_matches_formula() {
        for len in [0usize, 1, 19, 20, 21, 40, 45, 99, 100] {
            for page_size in [1usize, 7, 20] {
                let items: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, page_size);
                assert_eq!(pages, len.div_ceil(page_size));
                for page in 1..=pages {
                    let expected = page_size.min(len - (page - 1) * page_size);
                    assert_eq!(page_slice(&items, page, page_size).len(), expected);
                }
                assert!(page_slice(&items, pages + 1, page_size).is_empty());
            }
        }
    }

    #[test]
    fn empty_list_has_no_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert!(page_window(1, 0).is_empty());
        assert!(page_slice::<u8>(&[], 1, 20).is_empty());
    }

    #[test]
    fn window_is_centered_when_possible() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_shifts_near_edges() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_length_and_membership() {
        for total in 1..=12usize {
            for current in 1..=total {
                let window = page_window(current, total);
                assert_eq!(window.len(), PAGE_WINDOW.min(total));
                assert!(window.contains(&current));
                assert!(window.iter().all(|p| (1..=total).contains(p)));
            }
        }
    }
}
