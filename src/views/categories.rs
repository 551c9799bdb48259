//! Categories View
//!
//! Searchable category list with numbered pages and an add form.

use leptos::prelude::*;

use admin_core::domain::Category;
use admin_core::forms::CategoryDraft;

use crate::browser;
use crate::components::{AddCategoryModal, CsvExportButton, CsvImportButton, ErrorBanner, PageNumbers, SearchInput};
use crate::context::use_config;
use crate::list_model::{display_date, ListModel};
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store = use_admin_store();
    let config = use_config();
    let model = ListModel::new(store.categories(), config.page_size);
    let banner = RwSignal::new(None::<String>);
    let add_open = RwSignal::new(false);
    let date_format = config.date_format.clone();

    let add_category = move |draft: CategoryDraft| {
        let result = model
            .next_id()
            .map_err(|e| e.to_string())
            .and_then(|id| draft.into_category(id, browser::today()).map_err(|e| e.to_string()))
            .and_then(|category| model.add(category).map_err(|e| e.to_string()));
        if let Err(e) = result {
            log::error!("Failed to add category: {}", e);
            banner.set(Some(e));
        }
    };

    let row = move |category: Category| {
        let id = category.id;
        view! {
            <tr class=move || if model.is_selected(id) { "selected" } else { "" }>
                <td>
                    <input
                        type="checkbox"
                        prop:checked=move || model.is_selected(id)
                        on:change=move |_| model.toggle(id)
                    />
                </td>
                <td class="strong">{category.name}</td>
                <td class="muted">{category.description}</td>
                <td>{display_date(category.created_at, &date_format)}</td>
            </tr>
        }
    };

    view! {
        <div class="list-page">
            <div class="list-header">
                <div>
                    <h2>"Categories"</h2>
                    <p class="muted">"Group products for browsing and filtering"</p>
                </div>
                <div class="list-actions">
                    <button class="btn" on:click=move |_| add_open.set(true)>"Add Category"</button>
                    <CsvImportButton on_import=model.import_callback(config.clone(), banner) />
                    <CsvExportButton on_export=model.export_callback(config.clone()) />
                </div>
            </div>

            <ErrorBanner message=banner timeout_ms=config.banner_timeout_ms />

            <div class="filters">
                <SearchInput
                    placeholder="Search categories..."
                    value=Signal::derive(move || model.state.with(|s| s.criteria.search.clone()))
                    on_input=move |text: String| model.set_search(&text)
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                prop:checked=move || model.all_selected()
                                on:change=move |_| model.toggle_all()
                            />
                        </th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || model.page.get().items.into_iter().map(row.clone()).collect_view()}
                </tbody>
            </table>

            <PageNumbers
                page=Signal::derive(move || model.page.with(|p| p.page))
                total_pages=Signal::derive(move || model.page.with(|p| p.total_pages))
                on_select=move |page: usize| model.go_to(page)
            />

            <AddCategoryModal open=add_open on_submit=add_category />
        </div>
    }
}
