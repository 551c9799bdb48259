//! List View State
//!
//! Filter inputs, current page and checked rows of one list view.
//! Any change to what is visible clears the checked rows.

use std::collections::BTreeSet;

use super::filter::{DateRange, Facet, FacetChoice, FilterCriteria};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub criteria: FilterCriteria,
    /// 1-based
    pub page: usize,
    pub selection: BTreeSet<u32>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            selection: BTreeSet::new(),
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    fn filters_changed(&mut self) {
        self.page = 1;
        self.selection.clear();
    }

    pub fn set_search(&mut self, search: &str) {
        if self.criteria.search != search {
            self.criteria.search = search.to_string();
            self.filters_changed();
        }
    }

    pub fn set_facet(&mut self, facet: Facet, value: &str) {
        let choice = FacetChoice::parse(value);
        if self.criteria.choice(facet) != choice {
            self.criteria.facets.insert(facet, choice);
            self.filters_changed();
        }
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        if self.criteria.date_range != range {
            self.criteria.date_range = range;
            self.filters_changed();
        }
    }

    /// The underlying records were imported or created; `total_pages` is
    /// the new count, so a shrunken list never leaves the view past its end
    pub fn records_changed(&mut self, total_pages: usize) {
        self.selection.clear();
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.go_to(self.page + 1, total_pages);
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.selection.clear();
        }
    }

    /// Jump to a numbered page, clamped to `[1, total_pages]`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        let page = page.clamp(1, total_pages.max(1));
        if page != self.page {
            self.page = page;
            self.selection.clear();
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selection.contains(&id)
    }

    pub fn toggle(&mut self, id: u32) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Header checkbox state for the visible page
    pub fn all_selected(&self, page_ids: &[u32]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.selection.contains(id))
    }

    /// Header checkbox: clear when the whole page is checked, else check exactly the page
    pub fn toggle_all(&mut self, page_ids: &[u32]) {
        if self.all_selected(page_ids) {
            self.selection.clear();
        } else {
            self.selection = page_ids.iter().copied().collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, d)
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let mut state = ListState::new();

        state.page = 3;
        state.set_search("jo");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_facet(Facet::Status, "Pending");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_date_range(DateRange::new(day(1), day(9)));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut state = ListState::new();
        state.set_search("jo");
        state.page = 2;
        state.set_search("jo");
        state.set_facet(Facet::Status, "all");
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_selection_cleared_on_page_and_filter_change() {
        let mut state = ListState::new();
        state.toggle(1);
        state.next_page(2);
        assert_eq!(state.page, 2);
        assert!(state.selection.is_empty());

        state.toggle(6);
        state.set_search("x");
        assert!(state.selection.is_empty());

        state.toggle(3);
        state.records_changed(1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_shrinking_records_pulls_page_back() {
        let mut state = ListState::new();
        state.go_to(2, 2);
        state.records_changed(1);
        assert_eq!(state.page, 1);

        state.go_to(3, 4);
        state.records_changed(4);
        assert_eq!(state.page, 3);

        state.records_changed(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = ListState::new();
        state.previous_page();
        assert_eq!(state.page, 1);

        state.next_page(2);
        state.next_page(2);
        assert_eq!(state.page, 2);

        state.next_page(0);
        state.go_to(7, 2);
        assert_eq!(state.page, 2);
        state.go_to(0, 2);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_toggle_all_selects_current_page_only() {
        let mut state = ListState::new();
        state.toggle(9);
        state.toggle_all(&[1, 2, 3]);
        assert_eq!(state.selection, BTreeSet::from([1, 2, 3]));
        assert!(state.all_selected(&[1, 2, 3]));

        state.toggle_all(&[1, 2, 3]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_partial_selection_fills_page() {
        let mut state = ListState::new();
        state.toggle(2);
        assert!(!state.all_selected(&[1, 2]));
        state.toggle_all(&[1, 2]);
        assert!(state.all_selected(&[1, 2]));
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let mut state = ListState::new();
        assert!(!state.all_selected(&[]));
        state.toggle_all(&[]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_toggle_single_row() {
        let mut state = ListState::new();
        state.toggle(4);
        assert!(state.is_selected(4));
        state.toggle(4);
        assert!(!state.is_selected(4));
    }
}
