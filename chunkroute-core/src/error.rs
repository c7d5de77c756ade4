//! Error types for chunkroute.
//!
//! All registration failures are reported through [`RouteError`], built with
//! `thiserror`:
//!
//! - [`RouteError::MalformedPattern`] - bad placeholder syntax
//! - [`RouteError::DuplicateVariable`] - a placeholder name repeats in one pattern
//! - [`RouteError::DuplicateRoute`] - the same route registered twice for a method
//! - [`RouteError::ShadowedRoute`] - a static path is already matched by a variable route
//! - [`RouteError::Compile`] - a combined dispatch expression could not be built
//!
//! Dispatching never fails; see [`Dispatch`](crate::Dispatch).

use thiserror::Error;

/// Errors raised while registering or compiling routes.
///
/// Every variant signals a defect in the caller's route table. A hosting
/// server should refuse to start when it sees one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The pattern contains a placeholder that cannot be parsed.
    #[error("malformed route pattern \"{pattern}\": {reason}")]
    MalformedPattern {
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The same placeholder name is used twice in one pattern.
    #[error("cannot use the same placeholder \"{name}\" twice in \"{pattern}\"")]
    DuplicateVariable {
        /// The offending pattern.
        pattern: String,
        /// The repeated placeholder name.
        name: String,
    },

    /// A route matching the same paths is already registered for the method.
    #[error("cannot register two routes matching \"{route}\" for method \"{method}\"")]
    DuplicateRoute {
        /// The static path or generated expression.
        route: String,
        /// The HTTP method token.
        method: String,
    },

    /// A static route is fully matched by a previously registered variable route.
    #[error(
        "static route \"{route}\" is shadowed by previously defined variable route \"{shadowed_by}\" for method \"{method}\""
    )]
    ShadowedRoute {
        /// The static path.
        route: String,
        /// The expression of the variable route that matches it.
        shadowed_by: String,
        /// The HTTP method token.
        method: String,
    },

    /// A combined dispatch expression failed to build.
    #[error("failed to compile dispatch expression \"{regex}\": {reason}")]
    Compile {
        /// The expression handed to the regex engine.
        regex: String,
        /// The engine's message.
        reason: String,
    },
}

impl RouteError {
    /// Shorthand for [`RouteError::MalformedPattern`].
    pub fn malformed(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::MalformedPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors raised while registering a route, as opposed
    /// to compiling the dispatch structure.
    pub fn is_registration(&self) -> bool {
        !matches!(self, RouteError::Compile { .. })
    }
}
