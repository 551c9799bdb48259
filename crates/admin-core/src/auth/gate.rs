use super::AuthState;
use crate::routes::Route;

/// What the router should do with a requested route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

pub struct AuthGate;

impl AuthGate {
    pub fn resolve(route: Route, state: AuthState) -> Resolution {
        match (state, route) {
            (AuthState::Unauthenticated, route) if route.is_protected() => Resolution::Redirect(Route::Login),
            (AuthState::Authenticated, route) if route.is_auth_form() => Resolution::Redirect(Route::Dashboard(None)),
            (_, route) => Resolution::Render(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Section;

    #[test]
    fn test_protected_routes_redirect_to_login() {
        for route in [Route::Dashboard(None), Route::Dashboard(Some(Section::Orders))] {
            assert_eq!(AuthGate::resolve(route, AuthState::Unauthenticated), Resolution::Redirect(Route::Login));
            assert_eq!(AuthGate::resolve(route, AuthState::Authenticated), Resolution::Render(route));
        }
    }

    #[test]
    fn test_auth_forms_redirect_when_logged_in() {
        assert_eq!(
            AuthGate::resolve(Route::Signup, AuthState::Authenticated),
            Resolution::Redirect(Route::Dashboard(None))
        );
        assert_eq!(AuthGate::resolve(Route::Login, AuthState::Unauthenticated), Resolution::Render(Route::Login));
    }

    #[test]
    fn test_public_routes_always_render() {
        for state in [AuthState::Authenticated, AuthState::Unauthenticated] {
            assert_eq!(AuthGate::resolve(Route::Home, state), Resolution::Render(Route::Home));
            assert_eq!(AuthGate::resolve(Route::NotFound, state), Resolution::Render(Route::NotFound));
        }
    }
}
