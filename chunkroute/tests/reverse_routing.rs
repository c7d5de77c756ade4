//! Path generation from named routes.

use std::collections::{BTreeMap, HashMap};

use chunkroute::{RouteCollection, path::build_path};

mod common;
use common::fixture_dispatcher;

#[test]
fn test_path_for_named_route() {
    let mut routes = RouteCollection::new();
    routes
        .add_named_route("userProfile", "GET", "/user/{id:[0-9]+}/profile", ())
        .unwrap();

    let mut params = HashMap::new();
    params.insert("id".to_string(), "42".to_string());

    assert_eq!(
        routes.path("userProfile", &params).as_deref(),
        Some("/user/42/profile")
    );
}

#[test]
fn test_unknown_name_is_none() {
    let dispatcher = fixture_dispatcher();
    assert_eq!(dispatcher.path("userProfile", [("id", "42")]), None);
}

#[test]
fn test_static_named_route() {
    let dispatcher = fixture_dispatcher();
    let none: [(&str, &str); 0] = [];
    assert_eq!(dispatcher.path("users", none).as_deref(), Some("/users"));
}

#[test]
fn test_multiple_variables_and_literals() {
    let dispatcher = fixture_dispatcher();

    let mut params = BTreeMap::new();
    params.insert("slug", "hello");
    params.insert("id", "9");
    assert_eq!(
        dispatcher.path("post", &params).as_deref(),
        Some("/users/9/posts/hello")
    );
    assert_eq!(
        dispatcher.path("file", [("name", "a.b"), ("ext", "json")]).as_deref(),
        Some("/files/a.b.json")
    );
}

#[test]
fn test_missing_parameter_is_substituted_with_empty_string() {
    let dispatcher = fixture_dispatcher();
    assert_eq!(
        dispatcher.path("post", [("id", "9")]).as_deref(),
        Some("/users/9/posts/")
    );
}

#[test]
fn test_values_are_inserted_verbatim() {
    let dispatcher = fixture_dispatcher();
    assert_eq!(
        dispatcher.path("user", [("id", "not-a-number")]).as_deref(),
        Some("/users/not-a-number")
    );
    assert_eq!(
        dispatcher.path("search", [("query", "a b/c?d")]).as_deref(),
        Some("/search/a b/c?d")
    );
}

#[test]
fn test_reused_name_keeps_first_route() {
    let mut routes = RouteCollection::new();
    routes.add_named_route("page", "GET", "/page/{n}", 1).unwrap();
    routes.add_named_route("page", "GET", "/other/{n}", 2).unwrap();

    assert_eq!(routes.path("page", [("n", "3")]).as_deref(), Some("/page/3"));
    // The second route is still dispatchable.
    let dispatcher = routes.dispatcher().unwrap();
    assert_eq!(dispatcher.dispatch("GET", "/other/3").handler(), Some(&2));
}

#[test]
fn test_dispatch_then_reverse_agree() {
    let dispatcher = fixture_dispatcher();
    let path = dispatcher.path("post", [("id", "5"), ("slug", "x")]).unwrap();
    let result = dispatcher.dispatch("GET", &path);

    assert_eq!(result.handler(), Some(&"post"));
    let params = result.params().unwrap();
    assert_eq!(
        build_path(&dispatcher.routes().named_routes, "post", params).as_deref(),
        Some(path.as_str())
    );
}
