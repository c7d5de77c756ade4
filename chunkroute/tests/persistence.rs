//! Exporting compiled routes and dispatching from a reloaded copy.

use chunkroute::{CompiledRoutes, Dispatch, Dispatcher, RouteCollection, RouteError, RouterConfig};

mod common;
use common::{numbered_path, numbered_pattern};

fn collection() -> RouteCollection<String> {
    let mut routes = RouteCollection::new();
    routes.add_named_route("home", "GET", "/", "home".to_string()).unwrap();
    routes
        .add_route(["GET", "POST"], "/users", "users".to_string(), None)
        .unwrap();
    for i in 0..15 {
        routes.get(&numbered_pattern(i), format!("r{i}")).unwrap();
    }
    routes
        .add_named_route("user", "PUT", "/users/{id:[0-9]+}", "put_user".to_string())
        .unwrap();
    routes
}

#[test]
fn test_save_is_idempotent() {
    let mut routes = collection();
    let first = routes.save();
    let second = routes.save();
    assert_eq!(first, second);
}

#[test]
fn test_save_reflects_new_registrations() {
    let mut routes = collection();
    let before = routes.save();
    routes.get("/late/{x}", "late".to_string()).unwrap();
    let after = routes.save();

    assert_ne!(before, after);
    assert_eq!(after.variable_count(), before.variable_count() + 1);
}

#[test]
fn test_json_round_trip_dispatches_identically() {
    let mut routes = collection();
    let compiled = routes.save();

    let json = serde_json::to_string(&compiled).unwrap();
    let restored: CompiledRoutes<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, compiled);

    let fresh = routes.dispatcher().unwrap();
    let loaded = Dispatcher::new(restored).unwrap();

    let mut requests: Vec<(&str, String)> = vec![
        ("GET", "/".to_string()),
        ("HEAD", "/".to_string()),
        ("DELETE", "/users".to_string()),
        ("PUT", "/users/3".to_string()),
        ("GET", "/users/3".to_string()),
        ("GET", "/missing".to_string()),
    ];
    for i in 0..15 {
        requests.push(("GET", numbered_path(i)));
    }

    for (method, path) in &requests {
        assert_eq!(
            fresh.dispatch(method, path),
            loaded.dispatch(method, path),
            "{method} {path}"
        );
    }
    assert_eq!(
        loaded.path("user", [("id", "8")]).as_deref(),
        Some("/users/8")
    );
}

#[test]
fn test_json_layout() {
    let mut routes = RouteCollection::new();
    routes.get("/", 1u32).unwrap();
    routes.get("/a/{x}", 2).unwrap();

    let value = serde_json::to_value(routes.save()).unwrap();
    assert_eq!(value["static_routes"]["/"]["GET"], 1);
    assert_eq!(value["variable_routes"]["GET"][0]["regex"], "^(?:/a/([^/]+))$");
    assert_eq!(
        value["variable_routes"]["GET"][0]["route_map"]["2"]["variables"][0],
        "x"
    );
}

#[test]
fn test_tampered_structure_fails_to_load() {
    let mut routes = RouteCollection::new();
    routes.get("/a/{x}", 1u32).unwrap();

    let mut value = serde_json::to_value(routes.save()).unwrap();
    value["variable_routes"]["GET"][0]["regex"] = "^(?:/a/([^/]+)$".into();
    let tampered: CompiledRoutes<u32> = serde_json::from_value(value).unwrap();

    assert!(matches!(
        Dispatcher::new(tampered).unwrap_err(),
        RouteError::Compile { .. }
    ));
}

#[test]
fn test_config_from_json() {
    let config: RouterConfig =
        serde_json::from_str(r#"{ "approx_chunk_size": 3, "head_fallback": false }"#).unwrap();
    assert_eq!(config.approx_chunk_size, 3);
    assert!(!config.head_fallback);
    assert_eq!(config.max_capture_groups, RouterConfig::default().max_capture_groups);

    let mut routes = RouteCollection::with_config(config);
    routes.get("/", 1u32).unwrap();
    let dispatcher = routes.dispatcher().unwrap();
    assert!(matches!(
        dispatcher.dispatch("HEAD", "/"),
        Dispatch::MethodNotAllowed { .. }
    ));
}
