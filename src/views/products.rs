//! Products View
//!
//! Catalog list with category and brand filters and the add-product modal.

use leptos::prelude::*;

use admin_core::domain::Product;
use admin_core::forms::NewProduct;
use admin_core::listing::{DateRange, Facet};
use admin_core::AdminRecord;

use crate::browser;
use crate::components::{
    AddProductModal, CsvExportButton, CsvImportButton, DateRangeInputs, ErrorBanner, FacetSelect, Pagination,
    SearchInput,
};
use crate::context::use_config;
use crate::list_model::{display_date, display_money, ListModel};
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = use_admin_store();
    let config = use_config();
    let model = ListModel::new(store.products(), config.page_size);
    let banner = RwSignal::new(None::<String>);
    let add_open = RwSignal::new(false);
    let date_format = config.date_format.clone();

    let add_product = move |product: NewProduct| {
        let result = model.next_id().and_then(|id| {
            let record = product.into_product(id, browser::today());
            let name = record.name.clone();
            model.add(record).map(|()| name)
        });
        match result {
            Ok(name) => log::info!("Added product {}", name),
            Err(e) => {
                log::error!("Failed to add product: {}", e);
                banner.set(Some(e.to_string()));
            }
        }
    };

    let facet_value = move |facet: Facet| {
        Signal::derive(move || model.state.with(|s| s.criteria.choice(facet).as_value().to_string()))
    };

    let row = move |product: Product| {
        let id = product.id;
        view! {
            <tr class=move || if model.is_selected(id) { "selected" } else { "" }>
                <td>
                    <input
                        type="checkbox"
                        prop:checked=move || model.is_selected(id)
                        on:change=move |_| model.toggle(id)
                    />
                </td>
                <td class="strong">{product.name}</td>
                <td>{product.category}</td>
                <td>{product.brand}</td>
                <td class="muted truncate">{product.description}</td>
                <td class="numeric">{display_money(product.price)}</td>
                <td>{display_date(product.created_at, &date_format)}</td>
            </tr>
        }
    };

    view! {
        <div class="list-page">
            <div class="list-header">
                <div>
                    <h2>"Products"</h2>
                    <p class="muted">"Manage your products and inventory"</p>
                </div>
                <div class="list-actions">
                    <button class="btn" on:click=move |_| add_open.set(true)>"Add Product"</button>
                    <CsvImportButton on_import=model.import_callback(config.clone(), banner) />
                    <CsvExportButton on_export=model.export_callback(config.clone()) />
                </div>
            </div>

            <ErrorBanner message=banner timeout_ms=config.banner_timeout_ms />

            <div class="filters">
                <SearchInput
                    placeholder="Search products..."
                    value=Signal::derive(move || model.state.with(|s| s.criteria.search.clone()))
                    on_input=move |text: String| model.set_search(&text)
                />
                <FacetSelect
                    all_label="All Categories"
                    options=Signal::derive(move || model.facet_values(Facet::Category))
                    value=facet_value(Facet::Category)
                    on_change=move |value: String| model.set_facet(Facet::Category, &value)
                />
                <FacetSelect
                    all_label="All Brands"
                    options=Signal::derive(move || model.facet_values(Facet::Brand))
                    value=facet_value(Facet::Brand)
                    on_change=move |value: String| model.set_facet(Facet::Brand, &value)
                />
                <DateRangeInputs on_change=move |range: DateRange| model.set_date_range(range) />
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
                        <th>"Category"</th>
                        <th>"Brand"</th>
                        <th>"Description"</th>
                        <th class="numeric">"Price"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || model.page.get().items.into_iter().map(row.clone()).collect_view()}
                </tbody>
            </table>

            <Pagination
                summary=Signal::derive(move || model.page.with(|p| p.showing_summary(Product::NOUN)))
                has_previous=Signal::derive(move || model.page.with(|p| p.has_previous()))
                has_next=Signal::derive(move || model.page.with(|p| p.has_next()))
                on_previous=move |_| model.previous_page()
                on_next=move |_| model.next_page()
            />

            <AddProductModal
                open=add_open
                categories=Signal::derive(move || model.facet_values(Facet::Category))
                brands=Signal::derive(move || model.facet_values(Facet::Brand))
                on_submit=add_product
            />
        </div>
    }
}
