//! Filter and Paginate
//!
//! Derives the visible page of a list view from its records and criteria.
//! Recomputed synchronously whenever the records or the criteria change.

use super::filter::{FilterCriteria, Filterable};

/// One page window over the filtered records
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number the window was cut for
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Footer text, e.g. "Showing 5 of 6 orders"
    pub fn showing_summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.items.len(), self.filtered_count, noun)
    }
}

/// Number of pages needed for `count` records
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Filter `records` and cut the `page`-th window of `page_size` records
pub fn filter_and_paginate<T: Filterable + Clone>(
    records: &[T],
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let filtered = criteria.apply(records);

    let start = (page - 1).saturating_mul(page_size).min(filtered.len());
    let end = page.saturating_mul(page_size).min(filtered.len());

    Page {
        items: filtered[start..end].iter().map(|r| (*r).clone()).collect(),
        page,
        total_pages: total_pages(filtered.len(), page_size),
        filtered_count: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::seed;

    fn ids(page: &Page<Category>) -> Vec<u32> {
        page.items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_windows_follow_input_order() {
        let categories = seed::categories();
        let criteria = FilterCriteria::default();

        let first = filter_and_paginate(&categories, &criteria, 1, 5);
        let second = filter_and_paginate(&categories, &criteria, 2, 5);
        assert_eq!(ids(&first), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&second), vec![6, 7, 8, 9, 10]);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous() && first.has_next());
        assert!(second.has_previous() && !second.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let categories = seed::categories();
        let page = filter_and_paginate(&categories, &FilterCriteria::default(), 9, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.filtered_count, 10);
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let orders = seed::orders();
        let page = filter_and_paginate(&orders, &FilterCriteria::default(), usize::MAX, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.filtered_count, 6);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let categories = seed::categories();
        let page = filter_and_paginate(&categories, &FilterCriteria::default(), 0, 4);
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_summary_counts_filtered_records() {
        let orders = seed::orders();
        let page = filter_and_paginate(&orders, &FilterCriteria::default(), 2, 5);
        assert_eq!(page.showing_summary("orders"), "Showing 1 of 6 orders");
    }
}
