//! List Model
//!
//! Reactive wrapper binding one view's record list to its filter, page and
//! selection state. Copyable, so views hand it to child closures freely.

use std::fmt::Write as _;

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Field;

use admin_core::csv_io::{export_csv, export_file_name, ExportError, ImportError, ImportOptions};
use admin_core::domain::DomainResult;
use admin_core::listing::{distinct_values, filter_and_paginate, total_pages, DateRange, Facet, ListState, Page};
use admin_core::repository::{RecordList, Repository};
use admin_core::{import_into, AdminConfig, AdminRecord};

use crate::browser;

pub trait ListRecord: AdminRecord + PartialEq + Send + Sync + 'static {}

impl<T: AdminRecord + PartialEq + Send + Sync + 'static> ListRecord for T {}

pub struct ListModel<T: ListRecord> {
    pub records: Field<RecordList<T>>,
    pub state: RwSignal<ListState>,
    /// Visible window, recomputed when records or state change
    pub page: Memo<Page<T>>,
    page_size: usize,
}

impl<T: ListRecord> Clone for ListModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRecord> Copy for ListModel<T> {}

impl<T: ListRecord> ListModel<T> {
    pub fn new(records: impl Into<Field<RecordList<T>>>, page_size: usize) -> Self {
        let records = records.into();
        let state = RwSignal::new(ListState::new());
        let page = Memo::new(move |_| {
            let state = state.read();
            let list = records.read();
            filter_and_paginate(list.list(), &state.criteria, state.page, page_size)
        });
        Self { records, state, page, page_size }
    }

    pub fn set_search(&self, search: &str) {
        self.state.update(|s| s.set_search(search));
    }

    pub fn set_facet(&self, facet: Facet, value: &str) {
        self.state.update(|s| s.set_facet(facet, value));
    }

    pub fn set_date_range(&self, range: DateRange) {
        self.state.update(|s| s.set_date_range(range));
    }

    pub fn next_page(&self) {
        let total = self.page.get_untracked().total_pages;
        self.state.update(|s| s.next_page(total));
    }

    pub fn previous_page(&self) {
        self.state.update(|s| s.previous_page());
    }

    pub fn go_to(&self, page: usize) {
        let total = self.page.get_untracked().total_pages;
        self.state.update(|s| s.go_to(page, total));
    }

    pub fn toggle(&self, id: u32) {
        self.state.update(|s| s.toggle(id));
    }

    pub fn toggle_all(&self) {
        let ids = self.page_ids();
        self.state.update(|s| s.toggle_all(&ids));
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.state.with(|s| s.is_selected(id))
    }

    pub fn all_selected(&self) -> bool {
        let ids = self.page_ids();
        self.state.with(|s| s.all_selected(&ids))
    }

    fn page_ids(&self) -> Vec<u32> {
        self.page.with(|page| page.items.iter().map(|r| r.id()).collect())
    }

    /// Facet options taken from the current records
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        distinct_values(self.records.read().list(), facet)
    }

    pub fn next_id(&self) -> DomainResult<u32> {
        self.records.read_untracked().next_id()
    }

    /// Add a record created through a form
    pub fn add(&self, record: T) -> DomainResult<()> {
        self.records.write().append(record)?;
        self.records_changed();
        Ok(())
    }

    /// Clear the selection and pull the page back inside the new page count
    fn records_changed(&self) {
        let filtered = {
            let state = self.state.read_untracked();
            let list = self.records.read_untracked();
            state.criteria.apply(list.list()).len()
        };
        let total = total_pages(filtered, self.page_size);
        self.state.update(|s| s.records_changed(total));
    }

    /// Import CSV text; the list is only touched when every row is valid
    pub fn import(&self, text: &str, config: &AdminConfig) -> Result<usize, ImportError> {
        let options = ImportOptions {
            today: browser::today(),
            default_status: &config.default_status,
            date_format: Some(&config.date_format),
        };
        let mut list = self.records.get_untracked();
        let count = import_into(&mut list, text, &options)?;
        *self.records.write() = list;
        self.records_changed();
        Ok(count)
    }

    /// Import handler for `CsvImportButton`; failures land in `banner`
    pub fn import_callback(self, config: AdminConfig, banner: RwSignal<Option<String>>) -> Callback<String> {
        Callback::new(move |text: String| match self.import(&text, &config) {
            Ok(_) => banner.set(None),
            Err(e) => {
                log::error!("CSV parsing error: {}", e);
                banner.set(Some(e.to_string()));
            }
        })
    }

    pub fn export_callback(self, config: AdminConfig) -> Callback<()> {
        Callback::new(move |_| {
            if let Err(e) = self.export(&config) {
                log::error!("Failed to export CSV: {}", e);
            }
        })
    }

    /// Download every record that passes the current filters
    pub fn export(&self, config: &AdminConfig) -> Result<(), ExportError> {
        let csv = {
            let state = self.state.read_untracked();
            let list = self.records.read_untracked();
            let visible: Vec<T> = state.criteria.apply(list.list()).into_iter().cloned().collect();
            export_csv(&visible, &config.date_format)?
        };
        let file_name = export_file_name(T::file_prefix(), browser::today(), &config.date_format)?;
        browser::download_csv(&file_name, &csv).map_err(ExportError::Download)?;
        log::info!("Exported {} as {}", T::NOUN, file_name);
        Ok(())
    }
}

/// Date in the configured pattern, ISO if the pattern is unusable
pub fn display_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

pub fn display_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
