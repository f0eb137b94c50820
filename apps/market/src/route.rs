#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Dashboard,
    About,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Dashboard, Self::About];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::About => "/about",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::About => "About Us",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Dashboard => 1,
            Self::About => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Home),
            1 => Some(Self::Dashboard),
            2 => Some(Self::About),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Dashboard,
            Self::Dashboard => Self::About,
            Self::About => Self::Home,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::Dashboard => Self::Home,
            Self::About => Self::Dashboard,
        }
    }

    /// Matches a location path, after removing the deployment `base` prefix
    /// (e.g. `/Car_Market_Analytics`) and any trailing slash.
    pub fn resolve(path: &str, base: &str) -> Option<Self> {
        let base = base.trim_end_matches('/');
        let path = if base.is_empty() {
            path
        } else {
            path.strip_prefix(base)?
        };

        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/dashboard" => Some(Self::Dashboard),
            "/about" => Some(Self::About),
            _ => None,
        }
    }

    /// Location path for this page under `base`.
    pub fn href(self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Self::Home if base.is_empty() => "/".to_string(),
            Self::Home => format!("{base}/"),
            route => format!("{base}{}", route.path()),
        }
    }

    /// Accepts the page names used on the command line.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "home" | "/" => Some(Self::Home),
            "dashboard" => Some(Self::Dashboard),
            "about" => Some(Self::About),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_three_paths() {
        assert_eq!(Route::resolve("/", ""), Some(Route::Home));
        assert_eq!(Route::resolve("/dashboard", ""), Some(Route::Dashboard));
        assert_eq!(Route::resolve("/about", ""), Some(Route::About));
        assert_eq!(Route::resolve("/about/", ""), Some(Route::About));
        assert_eq!(Route::resolve("/garage", ""), None);
    }

    #[test]
    fn resolves_under_a_base_path() {
        let base = "/Car_Market_Analytics";
        assert_eq!(Route::resolve("/Car_Market_Analytics", base), Some(Route::Home));
        assert_eq!(Route::resolve("/Car_Market_Analytics/", base), Some(Route::Home));
        assert_eq!(
            Route::resolve("/Car_Market_Analytics/dashboard", base),
            Some(Route::Dashboard)
        );
        assert_eq!(Route::resolve("/dashboard", base), None);
    }

    #[test]
    fn href_round_trips_through_resolve() {
        for base in ["", "/", "/Car_Market_Analytics"] {
            for route in Route::ALL {
                assert_eq!(Route::resolve(&route.href(base), base), Some(route));
            }
        }
    }

    #[test]
    fn next_and_prev_cycle_all_pages() {
        for route in Route::ALL {
            assert_eq!(route.next().prev(), route);
            assert_eq!(Route::from_index(route.index()), Some(route));
        }
        assert_eq!(Route::About.next(), Route::Home);
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!(Route::parse(" Dashboard "), Some(Route::Dashboard));
        assert_eq!(Route::parse("settings"), None);
    }
}
