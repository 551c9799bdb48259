//! Application Context
//!
//! Session, router and config provided via Leptos Context API.

use leptos::prelude::*;

use admin_core::auth::{AuthState, Session};
use admin_core::forms::{FormErrors, LoginDraft};
use admin_core::routes::Route;
use admin_core::AdminConfig;

use crate::browser::{self, LocalStorageTokenStore};

/// Session handle shared by every view
///
/// Views go through this instead of touching `localStorage`; `state` is the
/// reactive mirror of the stored token.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session<LocalStorageTokenStore>>,
    /// Current auth state - read
    pub state: ReadSignal<AuthState>,
    /// Current auth state - write
    set_state: WriteSignal<AuthState>,
}

impl SessionContext {
    pub fn new(token_key: &str) -> Self {
        let session = Session::new(LocalStorageTokenStore::new(token_key));
        let (state, set_state) = signal(session.state());
        Self {
            session: StoredValue::new(session),
            state,
            set_state,
        }
    }

    pub fn login(&self, credentials: &LoginDraft) -> Result<(), FormErrors> {
        let mut result = Ok(());
        self.session.update_value(|s| result = s.login(credentials).map(|_| ()));
        self.refresh();
        result
    }

    pub fn logout(&self) {
        self.session.update_value(|s| {
            s.logout();
        });
        self.refresh();
    }

    /// Re-read the token, e.g. after another tab changed it
    pub fn refresh(&self) {
        let state = self.session.with_value(|s| s.state());
        self.set_state.set(state);
    }
}

/// Path-based router backed by the History API
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl RouterContext {
    pub fn new() -> Self {
        let (route, set_route) = signal(Route::parse(&browser::current_path()));
        Self { route, set_route }
    }

    /// Push a new history entry and switch views
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        log::info!("Navigate to {}", route.path());
        if let Err(e) = browser::push_path(&route.path()) {
            log::error!("pushState failed: {}", e);
        }
        self.set_route.set(route);
    }

    /// Swap the current entry; used for gate redirects
    pub fn redirect(&self, route: Route) {
        log::info!("Redirect to {}", route.path());
        if let Err(e) = browser::replace_path(&route.path()) {
            log::error!("replaceState failed: {}", e);
        }
        self.set_route.set(route);
    }

    /// Sync with the address bar after back/forward
    pub fn sync_from_location(&self) {
        self.set_route.set(Route::parse(&browser::current_path()));
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

pub fn use_config() -> AdminConfig {
    expect_context::<AdminConfig>()
}
