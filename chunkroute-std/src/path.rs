//! Reverse routing: generating paths from named routes.
//!
//! Values are inserted as given. They are neither escaped nor checked
//! against the placeholder's constraint, and a missing value becomes the
//! empty string.

use chunkroute_core::{NamedRoutes, ParamSource};

/// Generate the path of the route registered as `name`.
///
/// Returns `None` if no route has that name. Variables are substituted one
/// after another, in pattern order: every `{variable}` token in the path built
/// so far is replaced by the value `params` supplies for it, or by the empty
/// string if it supplies none.
///
/// # Example
///
/// ```rust
/// use chunkroute_std::{RouteCollection, path::build_path};
///
/// let mut routes = RouteCollection::new();
/// routes.add_named_route("profile", "GET", "/user/{id:[0-9]+}", ()).unwrap();
///
/// let named = routes.named_routes();
/// assert_eq!(build_path(named, "profile", [("id", "42")]).as_deref(), Some("/user/42"));
/// assert_eq!(build_path(named, "missing", [("id", "42")]), None);
/// ```
pub fn build_path(named: &NamedRoutes, name: &str, params: impl ParamSource) -> Option<String> {
    let route = named.get(name)?;

    let mut path = route.template.clone();
    for variable in &route.variables {
        let token = format!("{{{variable}}}");
        path = path.replace(&token, params.param(variable).unwrap_or_default());
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkroute_core::NamedRoute;
    use std::collections::HashMap;

    fn named(name: &str, template: &str, variables: &[&str]) -> NamedRoutes {
        let mut routes = NamedRoutes::new();
        routes.insert(
            name.to_string(),
            NamedRoute {
                template: template.to_string(),
                variables: variables.iter().map(|v| v.to_string()).collect(),
            },
        );
        routes
    }

    #[test]
    fn test_substitution() {
        let routes = named("post", "/blog/{year}/{slug}.html", &["year", "slug"]);
        let mut params = HashMap::new();
        params.insert("year", "2024");
        params.insert("slug", "hello");

        assert_eq!(
            build_path(&routes, "post", &params).as_deref(),
            Some("/blog/2024/hello.html")
        );
    }

    #[test]
    fn test_static_named_route() {
        let routes = named("home", "/", &[]);
        let none: [(&str, &str); 0] = [];
        assert_eq!(build_path(&routes, "home", none).as_deref(), Some("/"));
    }

    #[test]
    fn test_unknown_name() {
        let routes = named("home", "/", &[]);
        assert_eq!(build_path(&routes, "nope", [("id", "1")]), None);
    }

    #[test]
    fn test_missing_parameter_becomes_empty() {
        let routes = named("user", "/user/{id}/edit", &["id"]);
        assert_eq!(
            build_path(&routes, "user", [("other", "1")]).as_deref(),
            Some("/user//edit")
        );
    }

    #[test]
    fn test_values_are_not_escaped_or_validated() {
        let routes = named("user", "/user/{id}", &["id"]);
        assert_eq!(
            build_path(&routes, "user", [("id", "not a number/../x")]).as_deref(),
            Some("/user/not a number/../x")
        );
    }

    #[test]
    fn test_tokens_in_earlier_values_are_substituted() {
        let routes = named("pair", "/{a}/{b}", &["a", "b"]);
        assert_eq!(
            build_path(&routes, "pair", [("a", "{b}"), ("b", "x")]).as_deref(),
            Some("/x/x")
        );
        // `a` is already substituted when `b` brings its token back.
        assert_eq!(
            build_path(&routes, "pair", [("a", "1"), ("b", "{a}")]).as_deref(),
            Some("/1/{a}")
        );
    }
}
