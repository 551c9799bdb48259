//! Filter Criteria
//!
//! Text, facet and date-range predicates shared by every list view.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Category, Order, Product, Transaction};

/// Sentinel value of a facet dropdown that disables the facet
pub const ALL: &str = "all";

/// Categorical columns a view can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Category,
    Brand,
    Status,
}

/// Selected value of a facet dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetChoice {
    #[default]
    All,
    Only(String),
}

impl FacetChoice {
    /// Parse a dropdown value, treating the `"all"` sentinel as no filter
    pub fn parse(value: &str) -> Self {
        if value == ALL || value.is_empty() {
            FacetChoice::All
        } else {
            FacetChoice::Only(value.to_string())
        }
    }

    /// Value to bind back to the dropdown
    pub fn as_value(&self) -> &str {
        match self {
            FacetChoice::All => ALL,
            FacetChoice::Only(value) => value,
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetChoice::All => true,
            FacetChoice::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Creation date window; only applied when both bounds are set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => true,
        }
    }
}

/// Records that can be narrowed down by a list view
pub trait Filterable {
    /// Field matched by the search box
    fn search_field(&self) -> &str;

    /// Value of a categorical column, if the record has it
    fn facet(&self, facet: Facet) -> Option<&str>;

    /// Creation date checked against the date range
    fn created_on(&self) -> NaiveDate;
}

/// Per-view filter state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub facets: BTreeMap<Facet, FacetChoice>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn choice(&self, facet: Facet) -> FacetChoice {
        self.facets.get(&facet).cloned().unwrap_or_default()
    }

    /// True when every active filter accepts the record
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty() || record.search_field().to_lowercase().contains(&search);
        let matches_facets = self
            .facets
            .iter()
            .all(|(facet, choice)| choice.matches(record.facet(*facet)));

        matches_search && matches_facets && self.date_range.contains(record.created_on())
    }

    /// Matching records in their original order
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

/// Distinct non-empty values of a facet, in first-seen order
pub fn distinct_values<T: Filterable>(records: &[T], facet: Facet) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|r| r.facet(facet)) {
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

impl Filterable for Product {
    fn search_field(&self) -> &str {
        &self.name
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(&self.category),
            Facet::Brand => Some(&self.brand),
            Facet::Status => None,
        }
    }

    fn created_on(&self) -> NaiveDate {
        self.created_at
    }
}

impl Filterable for Order {
    fn search_field(&self) -> &str {
        &self.customer_name
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(&self.status),
            _ => None,
        }
    }

    fn created_on(&self) -> NaiveDate {
        self.created_at
    }
}

impl Filterable for Transaction {
    fn search_field(&self) -> &str {
        &self.customer_name
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(&self.status),
            _ => None,
        }
    }

    fn created_on(&self) -> NaiveDate {
        self.created_at
    }
}

impl Filterable for Category {
    fn search_field(&self) -> &str {
        &self.name
    }

    fn facet(&self, _facet: Facet) -> Option<&str> {
        None
    }

    fn created_on(&self) -> NaiveDate {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn names<T: Filterable>(records: Vec<&T>) -> Vec<String> {
        records.iter().map(|r| r.search_field().to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let orders = seed::orders();
        assert_eq!(FilterCriteria::default().apply(&orders).len(), orders.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = seed::orders();
        let criteria = FilterCriteria { search: "JOHN".to_string(), ..Default::default() };
        assert_eq!(names(criteria.apply(&orders)), vec!["John Doe", "Alice Johnson"]);
    }

    #[test]
    fn test_facets_combine_with_and() {
        let products = seed::products();
        let mut criteria = FilterCriteria::default();
        criteria.facets.insert(Facet::Category, FacetChoice::parse("Electronics"));
        criteria.facets.insert(Facet::Brand, FacetChoice::parse("Apple"));
        assert_eq!(names(criteria.apply(&products)), vec!["iPhone 14 Pro", "MacBook Air"]);

        criteria.search = "air".to_string();
        assert_eq!(names(criteria.apply(&products)), vec!["MacBook Air"]);
    }

    #[test]
    fn test_all_sentinel_passes_through() {
        let orders = seed::orders();
        let mut criteria = FilterCriteria::default();
        criteria.facets.insert(Facet::Status, FacetChoice::parse(ALL));
        assert_eq!(criteria.apply(&orders).len(), 6);
        assert_eq!(criteria.choice(Facet::Status).as_value(), "all");
    }

    #[test]
    fn test_missing_facet_never_matches_specific_value() {
        let categories = seed::categories();
        let mut criteria = FilterCriteria::default();
        criteria.facets.insert(Facet::Status, FacetChoice::parse("Pending"));
        assert!(criteria.apply(&categories).is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let orders = seed::orders();
        let criteria = FilterCriteria {
            date_range: DateRange::new(Some(day(5)), Some(day(15))),
            ..Default::default()
        };
        assert_eq!(names(criteria.apply(&orders)), vec!["John Doe", "Jane Smith", "Alice Johnson"]);
    }

    #[test]
    fn test_half_open_date_range_is_ignored() {
        let orders = seed::orders();
        for range in [DateRange::new(Some(day(30)), None), DateRange::new(None, Some(day(1)))] {
            assert!(!range.is_active());
            let criteria = FilterCriteria { date_range: range, ..Default::default() };
            assert_eq!(criteria.apply(&orders).len(), orders.len());
        }
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let orders = seed::orders();
        assert_eq!(
            distinct_values(&orders, Facet::Status),
            vec!["Pending", "Completed", "Shipped", "Cancelled"]
        );
        assert!(distinct_values(&orders, Facet::Brand).is_empty());
    }
}
