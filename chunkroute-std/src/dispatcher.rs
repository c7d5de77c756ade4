//! Query-time dispatch.
//!
//! A [`Dispatcher`] wraps a [`CompiledRoutes`] structure, fresh from a
//! [`RouteCollection`](crate::RouteCollection) or loaded from a cache, and
//! answers `(method, path)` queries without touching it again.
//!
//! # Lookup order
//!
//! 1. Exact match in the static map.
//! 2. The compiled groups of the requested method, in registration order.
//!    `HEAD` falls back to `GET` when no `HEAD` route exists.
//! 3. The groups of every other method, to tell "wrong method" apart from
//!    "no such path".
//!
//! # Thread Safety
//!
//! `dispatch` takes `&self` and never mutates, so one dispatcher can serve
//! any number of threads at once.

use std::collections::BTreeMap;

use chunkroute_core::{CompiledRoutes, Dispatch, ParamSource, Params, RouteError, VariableGroup};
use regex::Regex;

use crate::{config::RouterConfig, path::build_path};

const HEAD: &str = "HEAD";
const GET: &str = "GET";

/// Immutable, shareable request dispatcher.
#[derive(Debug, Clone)]
pub struct Dispatcher<H> {
    routes: CompiledRoutes<H>,
    /// Compiled form of every group's expression, parallel to
    /// `routes.variable_routes`.
    matchers: BTreeMap<String, Vec<Regex>>,
    head_fallback: bool,
}

impl<H> Dispatcher<H> {
    /// Build a dispatcher with the default configuration.
    ///
    /// # Errors
    ///
    /// [`RouteError::Compile`] if a group's expression does not compile,
    /// which only happens for structures that were altered after export.
    pub fn new(routes: CompiledRoutes<H>) -> Result<Self, RouteError> {
        Self::with_config(routes, RouterConfig::default())
    }

    /// Build a dispatcher honoring [`RouterConfig::head_fallback`].
    pub fn with_config(routes: CompiledRoutes<H>, config: RouterConfig) -> Result<Self, RouteError> {
        let matchers = routes
            .variable_routes
            .iter()
            .map(|(method, groups)| {
                let compiled = groups
                    .iter()
                    .map(|group| compile_group(group))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((method.clone(), compiled))
            })
            .collect::<Result<BTreeMap<_, _>, RouteError>>()?;

        Ok(Self {
            routes,
            matchers,
            head_fallback: config.head_fallback,
        })
    }

    /// Find the handler for `method` and `path`.
    pub fn dispatch<'a>(&'a self, method: &str, path: &'a str) -> Dispatch<'a, H> {
        if let Some(by_method) = self.routes.static_routes.get(path) {
            if let Some(handler) = by_method.get(method) {
                return Dispatch::Found {
                    handler,
                    params: Params::new(),
                };
            }
            if self.head_fallback && method == HEAD {
                if let Some(handler) = by_method.get(GET) {
                    return Dispatch::Found {
                        handler,
                        params: Params::new(),
                    };
                }
            }
            return Dispatch::MethodNotAllowed {
                allowed: by_method.keys().map(String::as_str).collect(),
            };
        }

        let query_method = self.query_method(method);
        if let Some(found) = self.match_method(query_method, path) {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(method, path, "variable route matched");
            }
            return found;
        }

        let allowed: Vec<&'a str> = self
            .matchers
            .iter()
            .filter(|(other, _)| other.as_str() != query_method)
            .filter(|(_, regexes)| regexes.iter().any(|regex| regex.is_match(path)))
            .map(|(other, _)| other.as_str())
            .collect();

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(method, path, ?allowed, "no route for method");
        }

        if allowed.is_empty() {
            Dispatch::NotFound
        } else {
            Dispatch::MethodNotAllowed { allowed }
        }
    }

    /// `HEAD` is answered by `GET` routes unless `HEAD` routes exist.
    fn query_method<'m>(&self, method: &'m str) -> &'m str {
        if self.head_fallback && method == HEAD && !self.matchers.contains_key(HEAD) {
            GET
        } else {
            method
        }
    }

    fn match_method<'a>(&'a self, method: &str, path: &'a str) -> Option<Dispatch<'a, H>> {
        let groups = self.routes.groups(method);
        let regexes = self.matchers.get(method)?;

        for (group, regex) in groups.iter().zip(regexes) {
            let Some(captures) = regex.captures(path) else {
                continue;
            };

            let participating = 1 + captures.iter().skip(1).flatten().count();
            let Some(route) = group.route_map.get(&participating) else {
                continue;
            };

            let params = route
                .variables
                .iter()
                .map(String::as_str)
                .zip(captures.iter().skip(1).flatten().map(|m| m.as_str()))
                .collect();

            return Some(Dispatch::Found {
                handler: &route.handler,
                params,
            });
        }

        None
    }

    /// Generate the path of a named route. See
    /// [`build_path`](crate::path::build_path).
    pub fn path(&self, name: &str, params: impl ParamSource) -> Option<String> {
        build_path(&self.routes.named_routes, name, params)
    }

    /// The compiled structure this dispatcher serves.
    pub fn routes(&self) -> &CompiledRoutes<H> {
        &self.routes
    }

    /// Give back the compiled structure.
    pub fn into_routes(self) -> CompiledRoutes<H> {
        self.routes
    }

    /// Returns true if `HEAD` falls back to `GET`.
    pub fn head_fallback(&self) -> bool {
        self.head_fallback
    }
}

fn compile_group<H>(group: &VariableGroup<H>) -> Result<Regex, RouteError> {
    Regex::new(&group.regex).map_err(|e| RouteError::Compile {
        regex: group.regex.clone(),
        reason: e.to_string(),
    })
}
