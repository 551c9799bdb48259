//! Routes
//!
//! Path-based navigation for the public pages and the dashboard sections.

/// Dashboard sub-pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Products,
    Categories,
    Orders,
    Transactions,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Products, Section::Categories, Section::Orders, Section::Transactions];

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Categories => "categories",
            Section::Orders => "orders",
            Section::Transactions => "transactions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::Categories => "Categories",
            Section::Orders => "Orders",
            Section::Transactions => "Transactions",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard(Option<Section>),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard(None),
            ["dashboard", slug] => Section::from_slug(slug).map_or(Route::NotFound, |s| Route::Dashboard(Some(s))),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard(None) => "/dashboard".to_string(),
            Route::Dashboard(Some(section)) => format!("/dashboard/{}", section.slug()),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Every dashboard page requires a session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard(_))
    }

    /// Pages that make no sense once logged in
    pub fn is_auth_form(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// `None` for placeholder entries that go nowhere yet
    pub route: Option<Route>,
}

/// A titled group of sidebar entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

const SETTINGS: [&str; 5] = ["General", "Notifications", "Security", "Billing", "Api Keys"];

pub fn sidebar() -> Vec<NavGroup> {
    vec![
        NavGroup {
            title: "Management",
            items: Section::ALL
                .into_iter()
                .map(|section| NavItem { label: section.title(), route: Some(Route::Dashboard(Some(section))) })
                .collect(),
        },
        NavGroup {
            title: "Settings",
            items: SETTINGS.into_iter().map(|label| NavItem { label, route: None }).collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup/"), Route::Signup);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard(None));
        assert_eq!(Route::parse("/dashboard/orders?page=2"), Route::Dashboard(Some(Section::Orders)));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/dashboard/settings"), Route::NotFound);
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/login/extra"), Route::NotFound);
    }

    #[test]
    fn test_path_parses_back() {
        for section in Section::ALL {
            let route = Route::Dashboard(Some(section));
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_only_dashboard_is_protected() {
        assert!(Route::Dashboard(None).is_protected());
        assert!(Route::Dashboard(Some(Section::Products)).is_protected());
        assert!(!Route::Home.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::NotFound.is_protected());
    }

    #[test]
    fn test_sidebar_settings_are_placeholders() {
        let groups = sidebar();
        assert_eq!(groups[0].items.len(), 4);
        assert!(groups[1].items.iter().all(|item| item.route.is_none()));
        assert_eq!(groups[1].items[4].label, "Api Keys");
    }
}
