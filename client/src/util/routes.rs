//! Application route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router in `app` declares the same paths; this table lets the header
//! highlight the active link and maps unknown paths onto the home view.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every view the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Events,
    Locations,
    Contact,
    Auth,
    AuthCallback,
    Admin,
    Profile,
}

/// Links shown in the main navigation, in display order.
pub const NAV_ROUTES: [AppRoute; 3] = [AppRoute::Events, AppRoute::Locations, AppRoute::Contact];

impl AppRoute {
    /// Resolve a location path (query ignored). Unknown paths fall back to
    /// [`AppRoute::Events`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        match path {
            "/locations" => Self::Locations,
            "/contact" => Self::Contact,
            "/auth" => Self::Auth,
            "/auth/callback" => Self::AuthCallback,
            "/admin" => Self::Admin,
            "/profile" => Self::Profile,
            _ => Self::Events,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Events => "/",
            Self::Locations => "/locations",
            Self::Contact => "/contact",
            Self::Auth => "/auth",
            Self::AuthCallback => "/auth/callback",
            Self::Admin => "/admin",
            Self::Profile => "/profile",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Locations => "Locations",
            Self::Contact => "Contact",
            Self::Auth => "Log In",
            Self::AuthCallback => "Signing In",
            Self::Admin => "Admin Panel",
            Self::Profile => "Profile",
        }
    }
}

/// CSS class for a nav link to `route` while `current_path` is shown.
#[must_use]
pub fn nav_link_class(current_path: &str, route: AppRoute) -> &'static str {
    if AppRoute::resolve(current_path) == route { "nav-link nav-link--active" } else { "nav-link" }
}
