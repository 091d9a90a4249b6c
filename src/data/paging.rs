// Never less than one, so an empty list still renders a single page.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    ((total + per_page - 1) / per_page).max(1)
}

pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_round_up() {
        assert_eq!(page_count(9, 6), 2);
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }

    #[test]
    fn empty_lists_still_have_one_page() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn slices_pages_in_order() {
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(page_slice(&items, 0, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, 1, 6), &[7, 8, 9]);
        assert!(page_slice(&items, 2, 6).is_empty());
        assert!(page_slice(&items, usize::MAX, 6).is_empty());
    }
}
