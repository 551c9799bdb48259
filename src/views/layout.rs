//! Page Layouts
//!
//! Public pages get a top bar; dashboard pages get the sidebar.

use leptos::prelude::*;

use admin_core::routes::{Route, Section};

use crate::components::Sidebar;
use crate::context::{use_router, use_session};

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    let router = use_router();
    let link = move |label: &'static str, route: Route| view! {
        <a href=route.path() on:click=move |ev| {
            ev.prevent_default();
            router.navigate(route);
        }>{label}</a>
    };

    view! {
        <div class="website-layout">
            <header class="navbar">
                <span class="navbar-brand">"Shop Admin"</span>
                <nav>
                    {link("Login", Route::Login)}
                    {link("Sign up", Route::Signup)}
                </nav>
            </header>
            <main>{children()}</main>
        </div>
    }
}

#[component]
pub fn DashboardLayout(section: Option<Section>, children: Children) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let logout = move |_| {
        session.logout();
        router.navigate(Route::Login);
    };

    view! {
        <div class="dashboard-layout">
            <Sidebar />
            <div class="dashboard-main">
                <header class="dashboard-header">
                    <span class="breadcrumb">
                        "Dashboard"
                        {section.map(|s| format!(" / {}", s.title()))}
                    </span>
                    <button class="btn btn-outline" on:click=logout>"Logout"</button>
                </header>
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}

/// Landing content for `/dashboard` without a section
#[component]
pub fn DashboardHome() -> impl IntoView {
    let router = use_router();
    view! {
        <section class="dashboard-home">
            <h2>"Dashboard"</h2>
            <p class="muted">"Pick a section to manage."</p>
            <div class="section-cards">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! {
                        <button
                            class="section-card"
                            on:click=move |_| router.navigate(Route::Dashboard(Some(section)))
                        >
                            {section.title()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <RecentActivity />
        </section>
    }
}

/// Newest buffered log lines, refreshed on demand
#[component]
fn RecentActivity() -> impl IntoView {
    let lines = RwSignal::new(console_logger::recent_lines());
    let newest_first = move || lines.with(|lines| lines.iter().rev().take(20).cloned().collect::<Vec<_>>());

    view! {
        <div class="recent-activity">
            <div class="recent-activity-header">
                <h3>"Recent activity"</h3>
                <button class="btn" on:click=move |_| lines.set(console_logger::recent_lines())>"Refresh"</button>
            </div>
            <Show
                when=move || lines.with(|lines| !lines.is_empty())
                fallback=|| view! { <p class="muted">"Nothing logged yet."</p> }
            >
                <ul class="log-lines">
                    {move || newest_first().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <button class="btn" on:click=move |_| router.navigate(Route::Home)>"Back home"</button>
        </section>
    }
}
