//! Page routes and the sidebar that links them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Create,
    Templates,
    Account,
    History,
    TeamMembers,
    Settings,
    Help,
    /// Catch-all for any other path.
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let path = path.trim();
        let normalized = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        match normalized {
            "/" | "" => Route::Dashboard,
            "/create" => Route::Create,
            "/templates" => Route::Templates,
            "/account" => Route::Account,
            "/history" => Route::History,
            "/team-members" => Route::TeamMembers,
            "/settings" => Route::Settings,
            "/help" => Route::Help,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Create => "/create",
            Route::Templates => "/templates",
            Route::Account => "/account",
            Route::History => "/history",
            Route::TeamMembers => "/team-members",
            Route::Settings => "/settings",
            Route::Help => "/help",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Create => "Create Automation",
            Route::Templates => "Templates",
            Route::Account => "Account",
            Route::History => "History",
            Route::TeamMembers => "Team Members",
            Route::Settings => "Settings",
            Route::Help => "Help",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// A titled group of sidebar links.
pub struct NavSection {
    pub label: &'static str,
    pub routes: Vec<Route>,
}

pub fn nav_sections() -> [NavSection; 3] {
    [
        NavSection {
            label: "Main",
            routes: vec![Route::Dashboard, Route::Create, Route::Templates, Route::History],
        },
        NavSection { label: "Team", routes: vec![Route::TeamMembers, Route::Settings] },
        NavSection { label: "Support", routes: vec![Route::Help] },
    ]
}

/// Sidebar links in display order.
pub fn nav_routes() -> Vec<Route> {
    nav_sections().into_iter().flat_map(|section| section.routes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for route in nav_routes().into_iter().chain([Route::Account]) {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_and_root() {
        assert_eq!(Route::from_path("/templates/"), Route::Templates);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_path("/automations");
        assert_eq!(route, Route::NotFound("/automations".to_string()));
        assert_eq!(route.path(), "/automations");
        assert_eq!(route.title(), "Not Found");
    }

    #[test]
    fn test_sidebar_order() {
        let titles: Vec<_> = nav_routes().iter().map(Route::title).collect();
        assert_eq!(
            titles,
            vec!["Dashboard", "Create Automation", "Templates", "History", "Team Members", "Settings", "Help"]
        );
    }
}
