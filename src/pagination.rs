//! Pagination helper shared by the listing page and templates.

use serde::Serialize;

/// Charities shown per page, everywhere a list is paginated.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed for `total` items, never less than one so the
/// "page / total" label stays meaningful on an empty result set.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page).max(1)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of items together with everything a template needs to render the
/// pagination controls. `pages` is a window of page numbers with `None`
/// marking an elision.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total_pages = total_pages.max(1);

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn empty_result_set_keeps_both_buttons_disabled() {
        let paginated: Paginated<()> = Paginated::new(vec![], 1, total_pages(0, 10));
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.total_pages, 1);
        assert!(!paginated.has_prev());
        assert!(!paginated.has_next());
    }

    #[test]
    fn prev_next_flags_follow_page_bounds() {
        let first: Paginated<()> = Paginated::new(vec![], 1, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let middle: Paginated<()> = Paginated::new(vec![], 2, 3);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last: Paginated<()> = Paginated::new(vec![], 3, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn page_zero_is_coerced_to_one() {
        let paginated: Paginated<()> = Paginated::new(vec![], 0, 5);
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn page_window_elides_the_middle() {
        let paginated: Paginated<()> = Paginated::new(vec![], 10, 20);
        assert!(paginated.pages.contains(&None));
        assert!(paginated.pages.contains(&Some(1)));
        assert!(paginated.pages.contains(&Some(10)));
        assert!(paginated.pages.contains(&Some(20)));
    }
}
