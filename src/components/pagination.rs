//! Pagination Components

use leptos::prelude::*;

/// Previous/next buttons with a "Showing N of M" summary
#[component]
pub fn Pagination(
    #[prop(into)] summary: Signal<String>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination-summary">{move || summary.get()}</span>
            <div class="pagination-buttons">
                <button
                    class="page-btn"
                    disabled=move || !has_previous.get()
                    on:click=move |_| on_previous.run(())
                >
                    "Previous"
                </button>
                <button
                    class="page-btn"
                    disabled=move || !has_next.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

/// Numbered page links between previous/next
#[component]
pub fn PageNumbers(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination page-numbers">
            <button
                class="page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| on_select.run(page.get_untracked().saturating_sub(1))
            >
                "Previous"
            </button>
            {move || {
                (1..=total_pages.get())
                    .map(|n| view! {
                        <button
                            class=move || if page.get() == n { "page-btn current" } else { "page-btn" }
                            on:click=move |_| on_select.run(n)
                        >
                            {n}
                        </button>
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_select.run(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
