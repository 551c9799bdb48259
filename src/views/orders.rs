//! Orders View

use leptos::prelude::*;

use admin_core::domain::Order;
use admin_core::listing::{DateRange, Facet};
use admin_core::AdminRecord;

use crate::components::{
    CsvExportButton, CsvImportButton, DateRangeInputs, ErrorBanner, FacetSelect, Pagination, SearchInput,
};
use crate::context::use_config;
use crate::list_model::{display_date, display_money, ListModel};
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = use_admin_store();
    let config = use_config();
    let model = ListModel::new(store.orders(), config.page_size);
    let import_error = RwSignal::new(None::<String>);
    let date_format = config.date_format.clone();

    let row = move |order: Order| {
        let id = order.id;
        let status_class = format!("badge status-{}", order.status.to_lowercase());
        view! {
            <tr class=move || if model.is_selected(id) { "selected" } else { "" }>
                <td>
                    <input
                        type="checkbox"
                        prop:checked=move || model.is_selected(id)
                        on:change=move |_| model.toggle(id)
                    />
                </td>
                <td>{format!("#{}", order.id)}</td>
                <td>{order.customer_name}</td>
                <td class="numeric">{display_money(order.total_amount)}</td>
                <td><span class=status_class>{order.status}</span></td>
                <td>{display_date(order.created_at, &date_format)}</td>
            </tr>
        }
    };

    view! {
        <div class="list-page">
            <div class="list-header">
                <div>
                    <h2>"Orders"</h2>
                    <p class="muted">"Manage and track customer orders"</p>
                </div>
                <div class="list-actions">
                    <CsvExportButton on_export=model.export_callback(config.clone()) />
                    <CsvImportButton on_import=model.import_callback(config.clone(), import_error) />
                </div>
            </div>

            <ErrorBanner message=import_error timeout_ms=config.banner_timeout_ms />

            <div class="filters">
                <SearchInput
                    placeholder="Search customers..."
                    value=Signal::derive(move || model.state.with(|s| s.criteria.search.clone()))
                    on_input=move |text: String| model.set_search(&text)
                />
                <FacetSelect
                    all_label="All Statuses"
                    options=Signal::derive(move || model.facet_values(Facet::Status))
                    value=Signal::derive(move || model.state.with(|s| s.criteria.choice(Facet::Status).as_value().to_string()))
                    on_change=move |value: String| model.set_facet(Facet::Status, &value)
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
                        <th>"Order ID"</th>
                        <th>"Customer"</th>
                        <th class="numeric">"Total"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || model.page.get().items.into_iter().map(row.clone()).collect_view()}
                </tbody>
            </table>

            <Pagination
                summary=Signal::derive(move || model.page.with(|p| p.showing_summary(Order::NOUN)))
                has_previous=Signal::derive(move || model.page.with(|p| p.has_previous()))
                has_next=Signal::derive(move || model.page.with(|p| p.has_next()))
                on_previous=move |_| model.previous_page()
                on_next=move |_| model.next_page()
            />
        </div>
    }
}
