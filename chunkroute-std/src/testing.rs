//! Testing utilities for chunkroute.
//!
//! # Features
//!
//! - [`RecordingHandler`]: a handler value that records the parameters it is
//!   invoked with
//! - [`route_fixture`]: a small route table covering static, variable, named
//!   and multi-method routes

use std::sync::{Arc, Mutex, PoisonError};

use chunkroute_core::{Dispatch, Params};

use crate::collection::RouteCollection;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every invocation.
///
/// Clones share the same log, so one clone can be registered while another
/// is kept for assertions.
///
/// # Example
///
/// ```rust
/// use chunkroute_std::{RouteCollection, testing::RecordingHandler};
///
/// let recorder = RecordingHandler::new("user");
/// let mut routes = RouteCollection::new();
/// routes.get("/user/{id}", recorder.clone()).unwrap();
///
/// let dispatcher = routes.dispatcher().unwrap();
/// assert!(RecordingHandler::invoke(dispatcher.dispatch("GET", "/user/3")));
///
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(recorder.calls()[0], vec![("id".to_string(), "3".to_string())]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    name: &'static str,
    calls: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl RecordingHandler {
    /// Create a recorder identified by `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The name given at creation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Record one invocation with `params`.
    pub fn call(&self, params: &Params<'_>) {
        let call = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.lock().push(call);
    }

    /// Call the handler of a `Found` result. Returns false otherwise.
    pub fn invoke(result: Dispatch<'_, RecordingHandler>) -> bool {
        match result {
            Dispatch::Found { handler, params } => {
                handler.call(&params);
                true
            }
            _ => false,
        }
    }

    /// The parameters of every recorded invocation, in order.
    pub fn calls(&self) -> Vec<Vec<(String, String)>> {
        self.lock().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Forget all recorded invocations.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<(String, String)>>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for RecordingHandler {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecordingHandler {}

// ============================================================================
// Fixtures
// ============================================================================

/// A route table shared by tests. Handlers are the route names.
///
/// | methods        | pattern                          | name      |
/// |----------------|----------------------------------|-----------|
/// | GET            | `/`                              | `home`    |
/// | GET, POST      | `/users`                         | `users`   |
/// | GET            | `/users/{id:[0-9]+}`             | `user`    |
/// | PUT, DELETE    | `/users/{id:[0-9]+}`             |           |
/// | GET            | `/users/{id:[0-9]+}/posts/{slug}`| `post`    |
/// | GET            | `/files/{name}.{ext:json\|xml}`  | `file`    |
/// | GET            | `/search/{query}`                | `search`  |
pub fn route_fixture() -> RouteCollection<&'static str> {
    let mut routes = RouteCollection::new();
    let table: [(&[&str], &str, &'static str, Option<&str>); 7] = [
        (&["GET"], "/", "home", Some("home")),
        (&["GET", "POST"], "/users", "users", Some("users")),
        (&["GET"], "/users/{id:[0-9]+}", "user", Some("user")),
        (&["PUT", "DELETE"], "/users/{id:[0-9]+}", "user_write", None),
        (&["GET"], "/users/{id:[0-9]+}/posts/{slug}", "post", Some("post")),
        (&["GET"], "/files/{name}.{ext:json|xml}", "file", Some("file")),
        (&["GET"], "/search/{query}", "search", Some("search")),
    ];

    for (methods, pattern, handler, name) in table {
        if let Err(e) = routes.add_route(methods, pattern, handler, name) {
            panic!("fixture route {pattern} rejected: {e}");
        }
    }
    routes
}
