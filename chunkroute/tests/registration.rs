//! Registration rules: classification, conflicts and the `routes!` macro.

use chunkroute::{
    RouteCollection, RouteError, RouteSegment, RouterConfig, is_static, parser::parse, render, routes,
};

#[test]
fn test_static_patterns_parse_to_one_literal() {
    for pattern in ["/", "/about", "/a/b.c", "/with space", "/trailing/"] {
        let segments = parse(pattern).unwrap();
        assert_eq!(segments, vec![RouteSegment::literal(pattern)]);
        assert!(is_static(&segments));
    }
}

#[test]
fn test_parsed_segments_reconstruct_pattern() {
    for pattern in [
        "/user/{name}/{id:[0-9]+}",
        "/{lang:[a-z]{2}}/docs/{page}",
        "/archive/{year:\\d{4}}-{month:\\d{2}}",
    ] {
        let segments = parse(pattern).unwrap();
        assert!(!is_static(&segments));
        assert_eq!(render(&segments), pattern);
    }
}

#[test]
fn test_duplicate_static_route() {
    let mut routes = RouteCollection::new();
    routes.get("/users", 1).unwrap();

    assert_eq!(
        routes.get("/users", 2).unwrap_err(),
        RouteError::DuplicateRoute {
            route: "/users".to_string(),
            method: "GET".to_string(),
        }
    );
}

#[test]
fn test_static_shadowed_by_variable() {
    let mut routes = RouteCollection::new();
    routes.get("/{resource}", 1).unwrap();

    let err = routes.get("/users", 2).unwrap_err();
    assert!(matches!(err, RouteError::ShadowedRoute { .. }));
    assert!(err.is_registration());
    assert!(err.to_string().contains("/users"));
}

#[test]
fn test_constraint_decides_shadowing() {
    let mut routes = RouteCollection::new();
    routes.get("/page/{n:[0-9]+}", 1).unwrap();

    routes.get("/page/about", 2).unwrap();
    assert!(matches!(
        routes.get("/page/7", 3).unwrap_err(),
        RouteError::ShadowedRoute { .. }
    ));
}

#[test]
fn test_malformed_patterns_are_rejected() {
    let mut routes = RouteCollection::<u8>::new();
    for pattern in ["/u/{", "/u/{9}", "/u/{id:}", "/u/{id:[}", "/u/{id:(x)}"] {
        let err = routes.get(pattern, 1).unwrap_err();
        assert!(matches!(err, RouteError::MalformedPattern { .. }), "{pattern}: {err}");
    }
    assert!(routes.is_empty());
}

#[test]
fn test_failed_multi_method_registration_stores_nothing() {
    let mut routes = RouteCollection::new();
    routes.put("/things", 1).unwrap();

    let err = routes
        .add_route(["GET", "PUT"], "/things", 2, Some("things"))
        .unwrap_err();
    assert!(matches!(err, RouteError::DuplicateRoute { .. }));
    assert!(!routes.has_route("GET", "/things"));
    assert_eq!(routes.path("things", [("x", "y")]), None);
    assert_eq!(routes.len(), 1);
}

#[test]
fn test_strict_overlap() {
    let mut lenient = RouteCollection::new();
    lenient.get("/users", 1).unwrap();
    lenient.get("/{resource}", 2).unwrap();

    let mut strict = RouteCollection::with_config(RouterConfig::new().strict_overlap(true));
    strict.get("/users", 1).unwrap();
    assert!(matches!(
        strict.get("/{resource}", 2).unwrap_err(),
        RouteError::ShadowedRoute { .. }
    ));
}

#[test]
fn test_empty_method_list_registers_nothing() {
    let mut routes = RouteCollection::new();
    routes
        .add_route(Vec::<&str>::new(), "/x/{y}", 1, Some("x"))
        .unwrap();
    assert!(routes.is_empty());
    assert!(routes.named_routes().is_empty());
}

#[test]
fn test_empty_method_list_for_static_path_keeps_variable_match() {
    let mut routes = RouteCollection::new();
    routes.get("/{page}", 1).unwrap();
    routes
        .add_route(Vec::<&str>::new(), "/about", 2, None)
        .unwrap();

    assert_eq!(routes.len(), 1);
    let dispatcher = routes.dispatcher().unwrap();
    assert_eq!(dispatcher.dispatch("GET", "/about").handler(), Some(&1));
}

#[test]
fn test_methods_are_case_sensitive() {
    let mut routes = RouteCollection::new();
    routes.add_route("get", "/", 1, None).unwrap();
    routes.add_route("GET", "/", 2, None).unwrap();

    let dispatcher = routes.dispatcher().unwrap();
    assert_eq!(dispatcher.dispatch("get", "/").handler(), Some(&1));
    assert_eq!(dispatcher.dispatch("GET", "/").handler(), Some(&2));
}

#[test]
fn test_routes_macro() {
    let mut routes = routes! {
        "GET", "/" => 0, name = "home";
        ["GET", "POST"], "/users" => 1;
        vec!["PUT", "DELETE"], "/users/{id:[0-9]+}" => 2, name = "user";
    }
    .unwrap();

    assert_eq!(routes.len(), 5);
    assert_eq!(routes.methods(), vec!["DELETE", "GET", "POST", "PUT"]);
    assert_eq!(routes.path("user", [("id", "3")]).as_deref(), Some("/users/3"));

    let dispatcher = routes.dispatcher().unwrap();
    assert_eq!(dispatcher.dispatch("DELETE", "/users/3").handler(), Some(&2));
}

#[test]
fn test_routes_macro_stops_at_first_error() {
    let err = routes! {
        "GET", "/{page}" => 1;
        "GET", "/about" => 2;
        "GET", "/{" => 3;
    }
    .unwrap_err();

    assert!(matches!(err, RouteError::ShadowedRoute { .. }));
}
