use admin_core::auth::{AuthGate, MemoryTokenStore, Resolution, Session};
use admin_core::routes::{Route, Section};

fn resolve(store: MemoryTokenStore, path: &str) -> Resolution {
    let session = Session::new(store);
    AuthGate::resolve(Route::parse(path), session.state())
}

#[test]
fn missing_or_empty_token_redirects_to_login() {
    assert_eq!(resolve(MemoryTokenStore::default(), "/dashboard/orders"), Resolution::Redirect(Route::Login));
    assert_eq!(resolve(MemoryTokenStore::with_token(""), "/dashboard"), Resolution::Redirect(Route::Login));
}

#[test]
fn any_token_renders_protected_content() {
    assert_eq!(
        resolve(MemoryTokenStore::with_token("abc"), "/dashboard/products"),
        Resolution::Render(Route::Dashboard(Some(Section::Products)))
    );
}

#[test]
fn logout_locks_the_dashboard_again() {
    let mut session = Session::new(MemoryTokenStore::with_token("abc"));
    session.logout();
    assert_eq!(
        AuthGate::resolve(Route::Dashboard(None), session.state()),
        Resolution::Redirect(Route::Login)
    );
}
