//! Pagination stage

/// Number of pages needed for `len` items; zero when there are none
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The items of zero-based page `page_number`.
///
/// The window is clipped to the sequence, so the last page may be short
/// and a page past the end is empty.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = match page_number.checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 8), 0);
        assert_eq!(page_count(1, 8), 1);
        assert_eq!(page_count(8, 8), 1);
        assert_eq!(page_count(9, 8), 2);
        assert_eq!(page_count(20, 8), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_pages_are_clipped() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&items, 0, 8), &items[0..8]);
        assert_eq!(paginate(&items, 1, 8), &items[8..16]);
        assert_eq!(paginate(&items, 2, 8), &items[16..20]);
        assert!(paginate(&items, 3, 8).is_empty());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(paginate(&items, usize::MAX, 8).is_empty());
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 0, 8).is_empty());
    }
}
