/// Where a page wants the user to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Cart,
    Checkout,
    PinterestCallback,
    /// Full-page redirect away from the app, e.g. to an OAuth provider.
    External(String),
}

impl Route {
    /// Path the route occupies in the browser build.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Cart => "/cart",
            Route::Checkout => "/checkout",
            Route::PinterestCallback => "/pinterest/callback",
            Route::External(url) => url,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_routes_have_fixed_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Checkout.to_string(), "/checkout");
    }

    #[test]
    fn external_route_is_its_url() {
        let route = Route::External("https://www.pinterest.com/oauth/?state=x".into());
        assert_eq!(route.path(), "https://www.pinterest.com/oauth/?state=x");
    }
}
