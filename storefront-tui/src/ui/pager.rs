//! Page navigator layout
//!
//! Decides which page numbers the pagination control shows: the first and
//! last `margin` pages, a window of `range` pages around the current one,
//! and a single break marker for each gap.

/// One slot in the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index
    Page(usize),
    Break,
}

/// Pages shown around the current one
pub const PAGE_RANGE: usize = 3;

/// Pages always shown at each end
pub const MARGIN_PAGES: usize = 3;

pub fn page_items(page_count: usize, current: usize, range: usize, margin: usize) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }

    let current = current.min(page_count - 1);
    let start = current.saturating_sub(range / 2);
    let end = (start + range).min(page_count);
    let start = end.saturating_sub(range);

    let mut items = Vec::new();
    for index in 0..page_count {
        let shown = index < margin
            || index >= page_count.saturating_sub(margin)
            || (start..end).contains(&index);

        if shown {
            items.push(PageItem::Page(index));
        } else if items.last() != Some(&PageItem::Break) {
            items.push(PageItem::Break);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Break, Page};
    use super::*;

    #[test]
    fn test_no_pages() {
        assert!(page_items(0, 0, PAGE_RANGE, MARGIN_PAGES).is_empty());
    }

    #[test]
    fn test_few_pages_are_all_shown() {
        assert_eq!(page_items(3, 1, 3, 1), vec![Page(0), Page(1), Page(2)]);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_items(10, 0, 3, 1),
            vec![Page(0), Page(1), Page(2), Break, Page(9)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_items(10, 5, 3, 1),
            vec![Page(0), Break, Page(4), Page(5), Page(6), Break, Page(9)]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_items(10, 9, 3, 1),
            vec![Page(0), Break, Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn test_default_layout_keeps_three_pages_at_each_end() {
        assert_eq!(
            page_items(10, 0, PAGE_RANGE, MARGIN_PAGES),
            vec![Page(0), Page(1), Page(2), Break, Page(7), Page(8), Page(9)]
        );
        assert_eq!(
            page_items(12, 6, PAGE_RANGE, MARGIN_PAGES),
            vec![Page(0), Page(1), Page(2), Break, Page(5), Page(6), Page(7), Break, Page(9), Page(10), Page(11)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_items(4, 99, 3, 1), vec![Page(0), Page(1), Page(2), Page(3)]);
    }
}
