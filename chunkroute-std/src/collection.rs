//! Route registration and compilation.
//!
//! [`RouteCollection`] accumulates routes per HTTP method, rejects ambiguous
//! registrations as soon as they happen, and folds the variable routes into
//! a [`CompiledRoutes`] structure on demand.
//!
//! # Example
//!
//! ```rust
//! use chunkroute_core::Dispatch;
//! use chunkroute_std::RouteCollection;
//!
//! let mut routes = RouteCollection::new();
//! routes.add_route("GET", "/", "home", None).unwrap();
//! routes.add_route(["GET", "POST"], "/user/{id:[0-9]+}", "user", Some("user")).unwrap();
//!
//! let dispatcher = routes.dispatcher().unwrap();
//! match dispatcher.dispatch("POST", "/user/42") {
//!     Dispatch::Found { handler, params } => {
//!         assert_eq!(*handler, "user");
//!         assert_eq!(params.get("id"), Some("42"));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(routes.path("user", &[("id", "7")]).as_deref(), Some("/user/7"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chunkroute_core::{
    CompiledRoutes, NamedRoute, NamedRoutes, ParamSource, RouteError, RouteHandler,
    RouteSegment, StaticRoutes, VariableRoutes,
};
use regex::Regex;

use crate::{
    compiler::{RouteRecord, compile_method},
    config::RouterConfig,
    dispatcher::Dispatcher,
    parser::parse,
    path::build_path,
};

// ============================================================================
// Method lists
// ============================================================================

/// Conversion into a list of HTTP method tokens.
///
/// Tokens are case-sensitive and used as given; normalizing them is up to
/// the caller.
pub trait IntoMethods {
    /// Convert into method tokens.
    fn into_methods(self) -> Vec<String>;
}

impl IntoMethods for &str {
    fn into_methods(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> Vec<String> {
        vec![self]
    }
}

impl<const N: usize> IntoMethods for [&str; N] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|m| m.to_string()).collect()
    }
}

impl<const N: usize> IntoMethods for &[&str; N] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|m| m.to_string()).collect()
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|m| m.to_string()).collect()
    }
}

impl IntoMethods for Vec<&str> {
    fn into_methods(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoMethods for Vec<String> {
    fn into_methods(self) -> Vec<String> {
        self
    }
}

/// Drop repeated tokens, keeping the first occurrence.
fn dedup_methods(methods: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    methods
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

// ============================================================================
// Route expressions
// ============================================================================

/// The regular expression, reverse template and variable names generated
/// for a variable route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteExpression {
    /// Escaped literals and one `(constraint)` group per placeholder.
    pub regex: String,
    /// Literal text with a `{name}` token per placeholder.
    pub template: String,
    /// Placeholder names in order.
    pub variables: Vec<String>,
}

impl RouteExpression {
    /// Build the expression for parsed segments.
    ///
    /// # Errors
    ///
    /// [`RouteError::DuplicateVariable`] if a placeholder name repeats.
    pub fn from_segments(pattern: &str, segments: &[RouteSegment]) -> Result<Self, RouteError> {
        let mut source = String::new();
        let mut template = String::new();
        let mut variables: Vec<String> = Vec::new();

        for segment in segments {
            match segment {
                RouteSegment::Literal(text) => {
                    source.push_str(&regex::escape(text));
                    template.push_str(text);
                }
                RouteSegment::Variable { name, constraint } => {
                    if variables.contains(name) {
                        return Err(RouteError::DuplicateVariable {
                            pattern: pattern.to_string(),
                            name: name.clone(),
                        });
                    }
                    variables.push(name.clone());
                    source.push('(');
                    source.push_str(constraint);
                    source.push(')');
                    template.push('{');
                    template.push_str(name);
                    template.push('}');
                }
            }
        }

        Ok(Self {
            regex: source,
            template,
            variables,
        })
    }

    /// Compile the expression anchored at both ends.
    fn anchored(&self) -> Result<Regex, RouteError> {
        let anchored = format!("^(?:{})$", self.regex);
        Regex::new(&anchored).map_err(|e| RouteError::Compile {
            regex: anchored,
            reason: e.to_string(),
        })
    }
}

// ============================================================================
// Route Collection
// ============================================================================

/// Routes registered so far, and their compiled form.
///
/// Registration is expected to happen once, at startup, on a single thread.
/// The compiled variable groups are cached and rebuilt after any new
/// registration.
#[derive(Debug, Clone)]
pub struct RouteCollection<H> {
    config: RouterConfig,
    static_routes: StaticRoutes<H>,
    variable_routes: BTreeMap<String, Vec<RouteRecord<H>>>,
    named_routes: NamedRoutes,
    compiled: Option<VariableRoutes<H>>,
}

impl<H: RouteHandler> Default for RouteCollection<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RouteHandler> RouteCollection<H> {
    /// Create an empty collection with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty collection with the given configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            static_routes: BTreeMap::new(),
            variable_routes: BTreeMap::new(),
            named_routes: BTreeMap::new(),
            compiled: None,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Register `handler` for `pattern` under every method in `methods`.
    ///
    /// Patterns without placeholders become static routes, others variable
    /// routes. If `name` is given and not used yet, the route becomes
    /// available for reverse routing; an already used name is ignored.
    ///
    /// # Errors
    ///
    /// Any [`RouteError`] registration variant. A failed registration leaves
    /// the collection unchanged.
    pub fn add_route(
        &mut self,
        methods: impl IntoMethods,
        pattern: &str,
        handler: H,
        name: Option<&str>,
    ) -> Result<&mut Self, RouteError> {
        let methods = dedup_methods(methods.into_methods());
        let segments = parse(pattern).map_err(rejected)?;

        match segments.as_slice() {
            [RouteSegment::Literal(path)] => {
                self.add_static_route(&methods, path, handler, name)?;
            }
            _ => {
                self.add_variable_route(&methods, pattern, &segments, handler, name)?;
            }
        }

        Ok(self)
    }

    /// Register a named route.
    pub fn add_named_route(
        &mut self,
        name: &str,
        methods: impl IntoMethods,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        self.add_route(methods, pattern, handler, Some(name))
    }

    /// Register a `GET` route.
    pub fn get(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("GET", pattern, handler, None)
    }

    /// Register a `POST` route.
    pub fn post(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("POST", pattern, handler, None)
    }

    /// Register a `PUT` route.
    pub fn put(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("PUT", pattern, handler, None)
    }

    /// Register a `PATCH` route.
    pub fn patch(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("PATCH", pattern, handler, None)
    }

    /// Register a `DELETE` route.
    pub fn delete(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("DELETE", pattern, handler, None)
    }

    /// Register a `HEAD` route.
    pub fn head(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("HEAD", pattern, handler, None)
    }

    /// Register an `OPTIONS` route.
    pub fn options(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.add_route("OPTIONS", pattern, handler, None)
    }

    /// Register a route without placeholders.
    ///
    /// Every method is checked before anything is stored: the (path, method)
    /// pair must be new, and no variable route already registered for the
    /// method may match the path.
    pub(crate) fn add_static_route(
        &mut self,
        methods: &[String],
        path: &str,
        handler: H,
        name: Option<&str>,
    ) -> Result<(), RouteError> {
        for method in methods {
            let taken = self
                .static_routes
                .get(path)
                .is_some_and(|by_method| by_method.contains_key(method));
            if taken {
                return Err(rejected(RouteError::DuplicateRoute {
                    route: path.to_string(),
                    method: method.clone(),
                }));
            }
        }

        for method in methods {
            // One full match per stored route, chunking has not happened yet.
            let shadowing = self
                .variable_routes
                .get(method)
                .and_then(|records| records.iter().find(|r| r.matches(path)));
            if let Some(record) = shadowing {
                return Err(rejected(RouteError::ShadowedRoute {
                    route: path.to_string(),
                    shadowed_by: record.regex.clone(),
                    method: method.clone(),
                }));
            }
        }

        // Every static entry holds at least one method.
        if methods.is_empty() {
            return Ok(());
        }

        let by_method = self.static_routes.entry(path.to_string()).or_default();
        for method in methods {
            by_method.insert(method.clone(), handler.clone());
        }

        self.register_name(name, path, Vec::new());
        self.compiled = None;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(path, ?methods, "registered static route");
        }

        Ok(())
    }

    /// Register a route with placeholders.
    ///
    /// The generated expression must be new for every method. With
    /// [`RouterConfig::strict_overlap`] the route must also not match an
    /// already registered static path for the method.
    pub(crate) fn add_variable_route(
        &mut self,
        methods: &[String],
        pattern: &str,
        segments: &[RouteSegment],
        handler: H,
        name: Option<&str>,
    ) -> Result<(), RouteError> {
        let expression = RouteExpression::from_segments(pattern, segments).map_err(rejected)?;
        let matcher = expression.anchored().map_err(rejected)?;

        for method in methods {
            let taken = self
                .variable_routes
                .get(method)
                .is_some_and(|records| records.iter().any(|r| r.regex == expression.regex));
            if taken {
                return Err(rejected(RouteError::DuplicateRoute {
                    route: expression.regex.clone(),
                    method: method.clone(),
                }));
            }
        }

        if self.config.strict_overlap {
            for method in methods {
                let overlapping = self.static_routes.iter().find(|(path, by_method)| {
                    by_method.contains_key(method) && matcher.is_match(path)
                });
                if let Some((path, _)) = overlapping {
                    return Err(rejected(RouteError::ShadowedRoute {
                        route: path.clone(),
                        shadowed_by: expression.regex.clone(),
                        method: method.clone(),
                    }));
                }
            }
        }

        for method in methods {
            self.variable_routes
                .entry(method.clone())
                .or_default()
                .push(RouteRecord {
                    regex: expression.regex.clone(),
                    matcher: matcher.clone(),
                    handler: handler.clone(),
                    variables: expression.variables.clone(),
                });
        }

        if !methods.is_empty() {
            self.register_name(name, &expression.template, expression.variables.clone());
        }
        self.compiled = None;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                pattern,
                regex = %expression.regex,
                ?methods,
                "registered variable route"
            );
        }

        Ok(())
    }

    /// First registration of a name wins.
    fn register_name(&mut self, name: Option<&str>, template: &str, variables: Vec<String>) {
        if let Some(name) = name {
            self.named_routes
                .entry(name.to_string())
                .or_insert_with(|| NamedRoute {
                    template: template.to_string(),
                    variables,
                });
        }
    }

    // ------------------------------------------------------------------------
    // Compilation
    // ------------------------------------------------------------------------

    /// Returns true if the variable routes are compiled and up to date.
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }

    /// Fold the variable routes of every method into chunked groups.
    pub fn compile(&mut self) {
        let compiled: VariableRoutes<H> = self
            .variable_routes
            .iter()
            .map(|(method, records)| (method.clone(), compile_method(records, &self.config)))
            .collect();

        #[cfg(feature = "tracing")]
        {
            for (method, groups) in &compiled {
                tracing::debug!(
                    method = %method,
                    routes = self.variable_routes[method].len(),
                    groups = groups.len(),
                    "compiled variable routes"
                );
            }
        }

        self.compiled = Some(compiled);
    }

    /// Export the compiled structure, compiling first if needed.
    ///
    /// Two calls without registration in between return equal structures.
    pub fn save(&mut self) -> CompiledRoutes<H> {
        if self.compiled.is_none() {
            self.compile();
        }

        CompiledRoutes {
            static_routes: self.static_routes.clone(),
            variable_routes: self.compiled.clone().unwrap_or_default(),
            named_routes: self.named_routes.clone(),
        }
    }

    /// Build a dispatcher from the current routes.
    ///
    /// # Errors
    ///
    /// [`RouteError::Compile`] if a combined expression exceeds the regex
    /// engine's limits.
    pub fn dispatcher(&mut self) -> Result<Dispatcher<H>, RouteError> {
        let config = self.config;
        Dispatcher::with_config(self.save(), config)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Generate the path of a named route.
    ///
    /// See [`build_path`] for the substitution rules.
    pub fn path(&self, name: &str, params: impl ParamSource) -> Option<String> {
        build_path(&self.named_routes, name, params)
    }

    /// Number of registered (route, method) pairs.
    pub fn len(&self) -> usize {
        let statics: usize = self.static_routes.values().map(BTreeMap::len).sum();
        let variables: usize = self.variable_routes.values().map(Vec::len).sum();
        statics + variables
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every method with at least one route, sorted.
    pub fn methods(&self) -> Vec<&str> {
        self.static_routes
            .values()
            .flat_map(|by_method| by_method.keys())
            .chain(self.variable_routes.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns true if `pattern` is registered for `method`.
    ///
    /// Variable patterns compare by generated expression, so
    /// `/u/{id}` and `/u/{user}` are the same route.
    pub fn has_route(&self, method: &str, pattern: &str) -> bool {
        let Ok(segments) = parse(pattern) else {
            return false;
        };

        match segments.as_slice() {
            [RouteSegment::Literal(path)] => self
                .static_routes
                .get(path)
                .is_some_and(|by_method| by_method.contains_key(method)),
            _ => RouteExpression::from_segments(pattern, &segments).is_ok_and(|expression| {
                self.variable_routes
                    .get(method)
                    .is_some_and(|records| records.iter().any(|r| r.regex == expression.regex))
            }),
        }
    }

    /// The named routes registered so far.
    pub fn named_routes(&self) -> &NamedRoutes {
        &self.named_routes
    }
}

fn rejected(err: RouteError) -> RouteError {
    #[cfg(feature = "tracing")]
    {
        tracing::warn!(error = %err, "route registration rejected");
    }
    err
}
