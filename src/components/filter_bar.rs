//! Filter Inputs
//!
//! Search box, facet dropdown and date range picker shared by the list views.

use chrono::NaiveDate;
use leptos::prelude::*;

use admin_core::listing::{DateRange, ALL};

/// Value format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Dropdown with an "All ..." entry followed by the distinct values
#[component]
pub fn FacetSelect(
    #[prop(into)] all_label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="facet-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value=ALL>{all_label}</option>
            <For
                each=move || options.get()
                key=|option| option.clone()
                let:option
            >
                <option value=option.clone()>{option.clone()}</option>
            </For>
        </select>
    }
}

/// Two date inputs; the range applies once both are set
#[component]
pub fn DateRangeInputs(#[prop(into)] on_change: Callback<DateRange>) -> impl IntoView {
    let (from, set_from) = signal::<Option<NaiveDate>>(None);
    let (to, set_to) = signal::<Option<NaiveDate>>(None);

    let parse = |raw: String| NaiveDate::parse_from_str(&raw, DATE_INPUT_FORMAT).ok();

    Effect::new(move |_| {
        on_change.run(DateRange::new(from.get(), to.get()));
    });

    view! {
        <div class="date-range">
            <input
                type="date"
                aria-label="From"
                on:change=move |ev| set_from.set(parse(event_target_value(&ev)))
            />
            <span class="date-range-sep">"-"</span>
            <input
                type="date"
                aria-label="To"
                on:change=move |ev| set_to.set(parse(event_target_value(&ev)))
            />
            <Show when=move || from.get().is_some() != to.get().is_some()>
                <span class="hint">"Pick both dates to filter"</span>
            </Show>
        </div>
    }
}
