//! The compiled dispatch structure.
//!
//! [`CompiledRoutes`] is the only artifact that crosses from build time to
//! query time. It holds plain data (strings, ordered maps, vectors and the
//! opaque handlers) and has no reference back to the collection that
//! produced it, so it can be cached by an external serializer and turned
//! into a dispatcher later without registering anything again.

use std::collections::BTreeMap;

/// A variable route as stored inside a compiled group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRoute<H> {
    /// The handler registered for the route.
    pub handler: H,
    /// Placeholder names, in the order their groups appear.
    pub variables: Vec<String>,
}

/// Several variable routes of one method folded into one expression.
///
/// `regex` has the form `^(?:alt1|alt2|...)$`. Each alternative is padded
/// with empty groups so that the number of capture groups taking part in a
/// match, counting the whole match, is different for every alternative.
/// `route_map` is keyed by that number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableGroup<H> {
    /// Combined, anchored expression.
    pub regex: String,
    /// Participating group count to route.
    pub route_map: BTreeMap<usize, VariableRoute<H>>,
}

impl<H> VariableGroup<H> {
    /// Number of routes folded into this group.
    pub fn len(&self) -> usize {
        self.route_map.len()
    }

    /// Returns true if the group holds no route.
    pub fn is_empty(&self) -> bool {
        self.route_map.is_empty()
    }
}

/// A route registered under a name, ready for reverse routing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedRoute {
    /// Literal path text with a `{name}` token for every variable.
    pub template: String,
    /// Variable names in template order.
    pub variables: Vec<String>,
}

/// Static path to method to handler.
pub type StaticRoutes<H> = BTreeMap<String, BTreeMap<String, H>>;

/// Method to compiled groups, in registration order.
pub type VariableRoutes<H> = BTreeMap<String, Vec<VariableGroup<H>>>;

/// Route name to reverse template.
pub type NamedRoutes = BTreeMap<String, NamedRoute>;

/// Everything a dispatcher needs, and nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompiledRoutes<H> {
    /// Routes without placeholders, matched by exact string equality.
    pub static_routes: StaticRoutes<H>,
    /// Routes with placeholders, grouped per method.
    pub variable_routes: VariableRoutes<H>,
    /// Named routes for reverse routing.
    pub named_routes: NamedRoutes,
}

impl<H> Default for CompiledRoutes<H> {
    fn default() -> Self {
        Self {
            static_routes: BTreeMap::new(),
            variable_routes: BTreeMap::new(),
            named_routes: BTreeMap::new(),
        }
    }
}

impl<H> CompiledRoutes<H> {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of (path, method) static entries.
    pub fn static_count(&self) -> usize {
        self.static_routes.values().map(BTreeMap::len).sum()
    }

    /// Total number of variable routes across all methods.
    pub fn variable_count(&self) -> usize {
        self.variable_routes
            .values()
            .flatten()
            .map(VariableGroup::len)
            .sum()
    }

    /// The compiled groups for a method, in dispatch order.
    pub fn groups(&self, method: &str) -> &[VariableGroup<H>] {
        self.variable_routes
            .get(method)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.static_routes.is_empty() && self.variable_routes.is_empty()
    }
}
