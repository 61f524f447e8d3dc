//! Pagination index calculator
//!
//! Pages are 1-indexed. Stepping saturates at both ends. The visible window
//! holds up to five page numbers and only starts sliding once the current
//! page is past 3.

/// Maximum number of page buttons shown at once
pub const WINDOW_SIZE: usize = 5;

/// Page after `current`, saturating at `total`
pub fn next_page(current: usize, total: usize) -> usize {
    current.saturating_add(1).min(total)
}

/// Page before `current`, saturating at 1
pub fn prev_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// Page numbers to render as buttons
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    let start = if current <= 3 { 1 } else { current - 2 };
    (start..start.saturating_add(WINDOW_SIZE.min(total)))
        .take_while(|&page| page <= total)
        .collect()
}

/// Current page plus fixed page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Pager {
    /// A pager starting on page 1. `total` below 1 is treated as 1.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) -> usize {
        self.current = next_page(self.current, self.total);
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = prev_page(self.current);
        self.current
    }

    pub fn window(&self) -> Vec<usize> {
        page_window(self.current, self.total)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_saturates_at_last_page() {
        let mut pager = Pager::new(10);
        for _ in 0..12 {
            pager.next();
        }
        assert_eq!(pager.current(), 10);
        assert!(pager.is_last());
    }

    #[test]
    fn prev_saturates_at_first_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.prev(), 1);
        assert!(pager.is_first());
    }

    #[test]
    fn window_is_fixed_for_first_three_pages() {
        for current in 1..=3 {
            assert_eq!(page_window(current, 10), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn window_slides_after_page_three() {
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_is_clipped_to_total() {
        assert_eq!(page_window(9, 10), vec![7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![8, 9, 10]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn stepping_slides_the_window() {
        let mut pager = Pager::new(10);
        for _ in 0..5 {
            pager.next();
        }
        assert_eq!(pager.current(), 6);
        assert_eq!(pager.window(), vec![4, 5, 6, 7, 8]);
        assert_eq!(pager.prev(), 5);
    }

    #[test]
    fn zero_total_is_one_page() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.total(), 1);
        assert_eq!(pager.next(), 1);
        assert_eq!(pager.window(), vec![1]);
    }

    #[test]
    fn free_functions_saturate_at_usize_max() {
        assert_eq!(next_page(usize::MAX, usize::MAX), usize::MAX);
        let window = page_window(usize::MAX, usize::MAX);
        assert_eq!(window.first(), Some(&(usize::MAX - 2)));
        assert!(window.len() <= WINDOW_SIZE);
    }

    #[test]
    fn free_functions_match_pager() {
        assert_eq!(next_page(10, 10), 10);
        assert_eq!(next_page(3, 10), 4);
        assert_eq!(prev_page(1), 1);
        assert_eq!(prev_page(0), 1);
        assert_eq!(prev_page(5), 4);
    }
}
