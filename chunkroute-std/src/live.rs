//! Routes that can grow while requests are being served.
//!
//! [`LiveRouter`] keeps the [`RouteCollection`] behind a mutex for writers
//! and the current [`Dispatcher`] behind an [`ArcSwap`] for readers. Each
//! registration recompiles into a fresh dispatcher and swaps it in; readers
//! that loaded the previous snapshot finish on it undisturbed.
//!
//! ```text
//! add_route ──► lock collection ──► register on a copy ──► recompile
//!                                                            │
//! dispatch ◄── load snapshot ◄── ArcSwap::store ◄────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwap;
use chunkroute_core::{Dispatch, ParamSource, RouteError, RouteHandler};

use crate::{
    collection::{IntoMethods, RouteCollection},
    dispatcher::Dispatcher,
};

/// A router that accepts new routes at runtime.
///
/// # Example
///
/// ```rust
/// use chunkroute_std::{LiveRouter, RouteCollection};
///
/// let router = LiveRouter::new(RouteCollection::new()).unwrap();
/// router.add_route("GET", "/user/{id}", 1u32, None).unwrap();
///
/// let id = router.dispatch("GET", "/user/9", |result| {
///     result.params().and_then(|p| p.get("id")).map(str::to_string)
/// });
/// assert_eq!(id.as_deref(), Some("9"));
/// ```
pub struct LiveRouter<H> {
    collection: Mutex<RouteCollection<H>>,
    current: ArcSwap<Dispatcher<H>>,
}

impl<H: RouteHandler> LiveRouter<H> {
    /// Start serving the routes already in `collection`.
    ///
    /// # Errors
    ///
    /// [`RouteError::Compile`] if the routes do not compile.
    pub fn new(mut collection: RouteCollection<H>) -> Result<Self, RouteError> {
        let dispatcher = collection.dispatcher()?;
        Ok(Self {
            collection: Mutex::new(collection),
            current: ArcSwap::from_pointee(dispatcher),
        })
    }

    /// Register a route and publish the recompiled dispatcher.
    ///
    /// See [`RouteCollection::add_route`]. On error neither the routes nor the
    /// published dispatcher change.
    pub fn add_route(
        &self,
        methods: impl IntoMethods,
        pattern: &str,
        handler: H,
        name: Option<&str>,
    ) -> Result<(), RouteError> {
        self.update(|routes| routes.add_route(methods, pattern, handler, name).map(|_| ()))
    }

    /// Apply several registrations and publish once.
    ///
    /// `f` runs on a copy of the collection; nothing is published unless it
    /// returns `Ok` and the result compiles.
    pub fn update<F>(&self, f: F) -> Result<(), RouteError>
    where
        F: FnOnce(&mut RouteCollection<H>) -> Result<(), RouteError>,
    {
        let mut collection = self.lock();

        let mut next = collection.clone();
        f(&mut next)?;
        let dispatcher = next.dispatcher()?;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(routes = next.len(), "publishing recompiled dispatcher");
        }

        *collection = next;
        self.current.store(Arc::new(dispatcher));
        Ok(())
    }

    /// Dispatch against the current snapshot and hand the result to `f`.
    ///
    /// The result borrows from the snapshot, which is only held for the
    /// duration of `f`.
    pub fn dispatch<R>(&self, method: &str, path: &str, f: impl FnOnce(Dispatch<'_, H>) -> R) -> R {
        let dispatcher = self.current.load();
        f(dispatcher.dispatch(method, path))
    }

    /// The dispatcher currently published.
    pub fn snapshot(&self) -> Arc<Dispatcher<H>> {
        self.current.load_full()
    }

    /// Generate the path of a named route from the current snapshot.
    pub fn path(&self, name: &str, params: impl ParamSource) -> Option<String> {
        self.current.load().path(name, params)
    }

    /// Number of registered (route, method) pairs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, RouteCollection<H>> {
        // The collection is only replaced wholesale, so a panicking writer
        // cannot leave it half-updated.
        self.collection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H> std::fmt::Debug for LiveRouter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveRouter").finish_non_exhaustive()
    }
}
