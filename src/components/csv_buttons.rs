//! CSV Import/Export Buttons

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;

/// File picker that hands the chosen file's text to `on_import`
#[component]
pub fn CsvImportButton(#[prop(into)] on_import: Callback<String>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(file) = browser::selected_file(&ev) else {
            return;
        };
        browser::reset_file_input(&ev);
        log::info!("Reading {}", file.name());
        spawn_local(async move {
            match browser::read_file_text(file).await {
                Ok(text) => on_import.run(text),
                Err(e) => log::error!("CSV reading error: {}", e),
            }
        });
    };

    view! {
        <label class="btn btn-outline csv-import">
            "Import CSV"
            <input type="file" accept=".csv" class="hidden-input" on:change=on_change />
        </label>
    }
}

#[component]
pub fn CsvExportButton(#[prop(into)] on_export: Callback<()>) -> impl IntoView {
    view! {
        <button class="btn btn-outline csv-export" on:click=move |_| on_export.run(())>
            "Export CSV"
        </button>
    }
}
