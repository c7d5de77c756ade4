//! # chunkroute-core
//!
//! Core types for the chunkroute compiled request router.
//!
//! This crate has minimal dependencies and holds the data shared between the
//! build-time half of the router (registration and compilation, in
//! `chunkroute-std`) and the query-time half (dispatch and reverse routing).
//!
//! # Two Phases
//!
//! ## Build time
//!
//! Route patterns are parsed into [`RouteSegment`]s, validated and folded
//! into a [`CompiledRoutes`] structure: a static map, chunked
//! [`VariableGroup`]s per method and a table of [`NamedRoute`]s.
//!
//! ## Query time
//!
//! A dispatcher answers `(method, path)` queries against a [`CompiledRoutes`]
//! with a [`Dispatch`] outcome, and generates paths from named routes using
//! any [`ParamSource`].
//!
//! # Error Types
//!
//! - [`RouteError`] - registration and compilation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod compiled;
mod dispatch;
mod error;
mod handler;
mod params;
mod segment;

// Re-exports
pub use compiled::{
    CompiledRoutes, NamedRoute, NamedRoutes, StaticRoutes, VariableGroup, VariableRoute,
    VariableRoutes,
};
pub use dispatch::{Dispatch, Params};
pub use error::RouteError;
pub use handler::RouteHandler;
pub use params::ParamSource;
pub use segment::{DEFAULT_CONSTRAINT, RouteSegment, is_static, render};
