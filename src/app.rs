//! Shop Admin App
//!
//! Provides config, session, router and store, then renders whatever the
//! auth gate allows for the current path.

use leptos::ev;
use leptos::prelude::*;

use admin_core::auth::{AuthGate, Resolution};
use admin_core::routes::{Route, Section};

use crate::browser;
use crate::context::{RouterContext, SessionContext};
use crate::store::{AdminState, AdminStore};
use crate::views::{
    CategoriesPage, DashboardHome, DashboardLayout, LoginPage, NotFoundPage, OrdersPage, ProductsPage,
    PublicLayout, SignupPage, TransactionsPage,
};

fn render(route: Route) -> AnyView {
    match route {
        Route::Home | Route::Login => view! { <PublicLayout><LoginPage /></PublicLayout> }.into_any(),
        Route::Signup => view! { <PublicLayout><SignupPage /></PublicLayout> }.into_any(),
        Route::Dashboard(section) => view! {
            <DashboardLayout section=section>
                {match section {
                    None => view! { <DashboardHome /> }.into_any(),
                    Some(Section::Products) => view! { <ProductsPage /> }.into_any(),
                    Some(Section::Categories) => view! { <CategoriesPage /> }.into_any(),
                    Some(Section::Orders) => view! { <OrdersPage /> }.into_any(),
                    Some(Section::Transactions) => view! { <TransactionsPage /> }.into_any(),
                }}
            </DashboardLayout>
        }
        .into_any(),
        Route::NotFound => view! { <PublicLayout><NotFoundPage /></PublicLayout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = browser::load_config();
    let session = SessionContext::new(&config.token_key);
    let router = RouterContext::new();

    // Provide context to all children
    provide_context(config);
    provide_context(session);
    provide_context(router);
    provide_context::<AdminStore>(AdminStore::new(AdminState::seeded()));

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| router.sync_from_location());
    // Token changed in another tab
    let _ = window_event_listener(ev::storage, move |_| session.refresh());

    let resolution = Memo::new(move |_| AuthGate::resolve(router.route.get(), session.state.get()));

    Effect::new(move |_| {
        if let Resolution::Redirect(target) = resolution.get() {
            router.redirect(target);
        }
    });

    view! {
        {move || match resolution.get() {
            Resolution::Render(route) => render(route),
            Resolution::Redirect(_) => ().into_any(),
        }}
    }
}
