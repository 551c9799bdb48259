//! Sidebar Component
//!
//! Dashboard navigation: the four management views plus placeholder
//! settings entries.

use leptos::prelude::*;

use admin_core::routes::{sidebar, NavItem};

use crate::context::use_router;

#[component]
pub fn Sidebar() -> impl IntoView {
    let router = use_router();

    let nav_link = move |item: NavItem| match item.route {
        Some(route) => view! {
            <li>
                <a
                    href=route.path()
                    class=move || if router.route.get() == route { "nav-link active" } else { "nav-link" }
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate(route);
                    }
                >
                    {item.label}
                </a>
            </li>
        }
        .into_any(),
        None => view! {
            <li>
                <span class="nav-link disabled" title="Coming soon">{item.label}</span>
            </li>
        }
        .into_any(),
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Shop Admin"</div>
            {sidebar()
                .into_iter()
                .map(|group| view! {
                    <nav class="nav-group">
                        <h3 class="nav-group-title">{group.title}</h3>
                        <ul>{group.items.into_iter().map(nav_link).collect_view()}</ul>
                    </nav>
                })
                .collect_view()}
        </aside>
    }
}
