//! Bounded pagination control computation.

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A jumpable page button.
    Page(u64),
    /// A collapsed run of pages; not interactive.
    Gap,
}

/// Compute the page buttons to render for `current_page` of `total_pages`.
///
/// The first and last pages are always present; up to three consecutive pages
/// surround the current one (the window widens at either edge so five buttons
/// stay visible); everything else collapses into gaps.
pub fn page_numbers(current_page: u64, total_pages: u64) -> Vec<PageItem> {
    const MAX_PAGES_TO_SHOW: u64 = 5;

    let mut items = Vec::new();

    if total_pages <= MAX_PAGES_TO_SHOW {
        for page in 1..=total_pages {
            items.push(PageItem::Page(page));
        }
        return items;
    }

    items.push(PageItem::Page(1));

    let mut start_page = current_page.saturating_sub(1).max(2);
    let mut end_page = (current_page + 1).min(total_pages - 1);

    if current_page <= 2 {
        end_page = 4;
    } else if current_page >= total_pages - 1 {
        start_page = total_pages - 3;
    }

    if start_page > 2 {
        items.push(PageItem::Gap);
    }

    for page in start_page..=end_page {
        items.push(PageItem::Page(page));
    }

    if end_page < total_pages - 1 {
        items.push(PageItem::Gap);
    }

    items.push(PageItem::Page(total_pages));

    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn test_middle_page_shows_window_with_gaps() {
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn test_few_pages_show_everything() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(page_numbers(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_numbers(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_near_start_widens_leading_window() {
        assert_eq!(
            page_numbers(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
        assert_eq!(
            page_numbers(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
    }

    #[test]
    fn test_near_end_widens_trailing_window() {
        assert_eq!(
            page_numbers(9, 10),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_numbers(10, 10),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_just_over_threshold() {
        assert_eq!(
            page_numbers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(6)]
        );
        assert_eq!(
            page_numbers(4, 6),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
