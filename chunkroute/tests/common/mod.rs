#![allow(dead_code)]

use chunkroute::{Dispatch, Dispatcher, RouteCollection, testing::route_fixture};

// ============================================================================
// Fixtures
// ============================================================================

pub fn fixture_dispatcher() -> Dispatcher<&'static str> {
    route_fixture().dispatcher().unwrap()
}

/// `count` variable GET routes `/r{i}/{a}...`, route `i` carrying `i % 3 + 1`
/// placeholders and handler `i`.
pub fn numbered_routes(count: usize) -> RouteCollection<usize> {
    let mut routes = RouteCollection::new();
    for i in 0..count {
        routes.get(&numbered_pattern(i), i).unwrap();
    }
    routes
}

pub fn numbered_pattern(i: usize) -> String {
    let names = ["a", "b", "c"];
    let mut pattern = format!("/r{i}");
    for name in &names[..i % 3 + 1] {
        pattern.push_str(&format!("/{{{name}}}"));
    }
    pattern
}

pub fn numbered_path(i: usize) -> String {
    let mut path = format!("/r{i}");
    for v in 0..i % 3 + 1 {
        path.push_str(&format!("/v{v}"));
    }
    path
}

// ============================================================================
// Assertions
// ============================================================================

/// Owned view of a `Found` result: the handler and the parameters in order.
pub fn found<H: Clone>(result: Dispatch<'_, H>) -> Option<(H, Vec<(String, String)>)> {
    match result {
        Dispatch::Found { handler, params } => Some((
            handler.clone(),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )),
        _ => None,
    }
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
