//! Marker trait for route handler values.

/// A value attached to a route and handed back by the dispatcher.
///
/// The router never inspects or invokes a handler; it only stores it and
/// returns a reference on a match. Handlers must be `Clone` so a compiled
/// structure can be exported, and `Send + Sync + 'static` so a dispatcher can
/// be shared across threads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chunkroute_core::RouteHandler;
///
/// fn assert_handler<H: RouteHandler>(_: &H) {}
///
/// assert_handler(&"users.show");
/// assert_handler(&Arc::new(|| 42));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a route handler",
    label = "must be `Clone + Send + Sync + 'static`",
    note = "Wrap non-cloneable handlers in an `Arc`."
)]
pub trait RouteHandler: Clone + Send + Sync + 'static {}

impl<T> RouteHandler for T where T: Clone + Send + Sync + 'static {}
