use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/packages")]
    Packages,
    #[at("/update/:package_id")]
    Update { package_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where the session guard sends a visitor, or `None` to render `route` as is.
/// Only the login page is reachable without the session flag.
pub fn guard_redirect(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::Login => None,
        _ if !authenticated => Some(Route::Login),
        Route::NotFound => Some(Route::Home),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update() -> Route {
        Route::Update { package_id: "abc".into() }
    }

    #[test]
    fn login_is_always_reachable() {
        assert_eq!(guard_redirect(&Route::Login, false), None);
        assert_eq!(guard_redirect(&Route::Login, true), None);
    }

    #[test]
    fn protected_routes_redirect_to_login_without_flag() {
        for route in [Route::Home, Route::Packages, update(), Route::NotFound] {
            assert_eq!(guard_redirect(&route, false), Some(Route::Login), "{:?}", route);
        }
    }

    #[test]
    fn protected_routes_render_with_flag() {
        for route in [Route::Home, Route::Packages, update()] {
            assert_eq!(guard_redirect(&route, true), None, "{:?}", route);
        }
    }

    #[test]
    fn unknown_paths_go_home_when_logged_in() {
        assert_eq!(guard_redirect(&Route::NotFound, true), Some(Route::Home));
    }

    #[test]
    fn update_path_carries_package_id() {
        assert_eq!(update().to_path(), "/update/abc");
        assert_eq!(Route::Packages.to_path(), "/packages");
    }
}
