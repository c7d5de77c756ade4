//! # chunkroute-std
//!
//! Standard implementations for the chunkroute router.
//!
//! This crate provides:
//! - **Pattern parsing**: [`parser::parse`]
//! - **Registration and compilation**: [`RouteCollection`], [`RouterConfig`]
//! - **Dispatch**: [`Dispatcher`]
//! - **Reverse routing**: [`path::build_path`]
//! - **Runtime registration**: [`LiveRouter`]
//! - **Test helpers**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use chunkroute_core;

// Modules
pub mod collection;
pub mod compiler;
pub mod config;
pub mod dispatcher;
pub mod live;
pub mod parser;
pub mod path;
pub mod testing;

pub use collection::{IntoMethods, RouteCollection, RouteExpression};
pub use compiler::{chunk_count, chunk_size};
pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CAPTURE_GROUPS, RouterConfig};
pub use dispatcher::Dispatcher;
pub use live::LiveRouter;
