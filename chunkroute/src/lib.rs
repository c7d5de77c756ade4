//! # chunkroute - Compiled HTTP-style request router
//!
//! `chunkroute` maps a request method and path to a registered handler value.
//! Static paths are answered by a map lookup; paths with placeholders are
//! folded into a few combined regular expressions, so a request costs a
//! handful of engine runs however many routes are registered.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkroute::prelude::*;
//!
//! let mut routes = chunkroute::routes! {
//!     "GET", "/" => "home", name = "home";
//!     ["GET", "POST"], "/users" => "users";
//!     "GET", "/users/{id:[0-9]+}" => "user", name = "user";
//! }
//! .unwrap();
//!
//! let dispatcher = routes.dispatcher().unwrap();
//! match dispatcher.dispatch("GET", "/users/42") {
//!     Dispatch::Found { handler, params } => {
//!         assert_eq!(*handler, "user");
//!         assert_eq!(params.get("id"), Some("42"));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert_eq!(
//!     dispatcher.dispatch("DELETE", "/users"),
//!     Dispatch::MethodNotAllowed { allowed: vec!["GET", "POST"] }
//! );
//! assert_eq!(dispatcher.path("user", [("id", "7")]).as_deref(), Some("/users/7"));
//! ```
//!
//! ## Caching compiled routes
//!
//! With the `serde` feature, [`CompiledRoutes`] can be stored after
//! [`RouteCollection::save`] and handed to [`Dispatcher::new`] later without
//! registering anything again.
//!
//! ## Features
//!
//! - `tracing`: log registration, compilation and dispatch through `tracing`
//! - `serde`: `Serialize`/`Deserialize` for [`CompiledRoutes`],
//!   [`RouteSegment`] and [`RouterConfig`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use chunkroute_core::{
    // Compiled structure
    CompiledRoutes,
    DEFAULT_CONSTRAINT,
    // Dispatch results
    Dispatch,
    NamedRoute,
    NamedRoutes,
    // Reverse routing
    ParamSource,
    Params,
    // Error types
    RouteError,
    // Handler
    RouteHandler,
    // Patterns
    RouteSegment,
    StaticRoutes,
    VariableGroup,
    VariableRoute,
    VariableRoutes,
    is_static,
    render,
};

pub use chunkroute_std::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CAPTURE_GROUPS, Dispatcher, IntoMethods, LiveRouter,
    RouteCollection, RouteExpression, RouterConfig, chunk_count, chunk_size, parser, path,
    testing,
};

/// Everything needed to register routes and dispatch requests.
pub mod prelude {
    pub use chunkroute_core::{Dispatch, ParamSource, Params, RouteError, RouteHandler};
    pub use chunkroute_std::{Dispatcher, LiveRouter, RouteCollection, RouterConfig};
}

/// Build a [`RouteCollection`] from a declarative route list.
///
/// Each entry is `methods, pattern => handler`, optionally followed by
/// `, name = "..."`, and entries are separated by `;`. `methods` is anything
/// implementing [`IntoMethods`]. A leading `config = expr;` selects a
/// [`RouterConfig`].
///
/// Evaluates to `Result<RouteCollection<_>, RouteError>`; the first rejected
/// route stops the build.
///
/// ```rust
/// use chunkroute::{RouterConfig, routes};
///
/// let routes = routes! {
///     config = RouterConfig::new().chunk_size(4);
///     "GET", "/a/{x}" => 1;
///     ["PUT", "PATCH"], "/a/{x}" => 2, name = "a";
/// }
/// .unwrap();
/// assert_eq!(routes.len(), 3);
/// assert_eq!(routes.config().approx_chunk_size, 4);
/// ```
#[macro_export]
macro_rules! routes {
    (@name) => {
        ::core::option::Option::None
    };
    (@name $name:expr) => {
        ::core::option::Option::Some($name)
    };
    (
        config = $config:expr;
        $( $methods:expr, $pattern:expr => $handler:expr $(, name = $name:expr)? );* $(;)?
    ) => {
        (|| -> ::core::result::Result<$crate::RouteCollection<_>, $crate::RouteError> {
            let mut collection = $crate::RouteCollection::with_config($config);
            $(
                collection.add_route($methods, $pattern, $handler, $crate::routes!(@name $($name)?))?;
            )*
            ::core::result::Result::Ok(collection)
        })()
    };
    (
        $( $methods:expr, $pattern:expr => $handler:expr $(, name = $name:expr)? );* $(;)?
    ) => {
        $crate::routes! {
            config = $crate::RouterConfig::default();
            $( $methods, $pattern => $handler $(, name = $name)? );*
        }
    };
}
