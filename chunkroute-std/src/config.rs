//! Router configuration.
//!
//! Configuration is a plain value built with chained setters and handed to
//! [`RouteCollection::with_config`](crate::RouteCollection::with_config) or
//! [`Dispatcher::with_config`](crate::Dispatcher::with_config).
//!
//! ```rust
//! use chunkroute_std::RouterConfig;
//!
//! let config = RouterConfig::new().chunk_size(20).head_fallback(false);
//! assert_eq!(config.approx_chunk_size, 20);
//! ```

/// Approximate number of variable routes folded into one expression.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Upper bound on capture groups in one combined expression.
pub const DEFAULT_MAX_CAPTURE_GROUPS: usize = 65_535;

/// Tunables for registration, compilation and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Target number of routes per compiled group. Values below 1 are
    /// treated as 1.
    pub approx_chunk_size: usize,
    /// A compiled group is split before its expression would carry more
    /// capture groups than this.
    pub max_capture_groups: usize,
    /// Answer `HEAD` requests with the `GET` handler when no `HEAD` route
    /// exists.
    pub head_fallback: bool,
    /// Also reject a variable route that matches an already registered
    /// static path for the same method.
    pub strict_overlap: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            approx_chunk_size: DEFAULT_CHUNK_SIZE,
            max_capture_groups: DEFAULT_MAX_CAPTURE_GROUPS,
            head_fallback: true,
            strict_overlap: false,
        }
    }
}

impl RouterConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the approximate chunk size.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.approx_chunk_size = size;
        self
    }

    /// Set the capture group limit per combined expression.
    pub fn max_capture_groups(mut self, limit: usize) -> Self {
        self.max_capture_groups = limit;
        self
    }

    /// Enable or disable the `HEAD` to `GET` fallback.
    pub fn head_fallback(mut self, enabled: bool) -> Self {
        self.head_fallback = enabled;
        self
    }

    /// Enable or disable rejection of variable routes overlapping static ones.
    pub fn strict_overlap(mut self, enabled: bool) -> Self {
        self.strict_overlap = enabled;
        self
    }
}
