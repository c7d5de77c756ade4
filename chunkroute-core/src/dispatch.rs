//! Dispatch outcome types.
//!
//! A dispatch either finds a handler, finds the path under other methods
//! only, or finds nothing. There is no error channel: any string is a valid
//! (if non-matching) path.

use std::collections::HashMap;

/// Path variables extracted by a match, in pattern order.
///
/// Names borrow from the dispatcher, values borrow from the requested path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Params<'a> {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create parameters with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a (name, value) pair.
    pub fn push(&mut self, name: &'a str, value: &'a str) {
        self.entries.push((name, value));
    }

    /// Value of the variable called `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Iterate over (name, value) pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the route had no variables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy into an owned map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of dispatching a (method, path) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a, H> {
    /// A route matched.
    Found {
        /// The handler registered for the route.
        handler: &'a H,
        /// Extracted path variables.
        params: Params<'a>,
    },
    /// The path exists, but not for the requested method.
    MethodNotAllowed {
        /// Methods under which the path would match.
        allowed: Vec<&'a str>,
    },
    /// No route matches the path under any method.
    NotFound,
}

impl<'a, H> Dispatch<'a, H> {
    /// Returns true if a route matched.
    pub fn is_found(&self) -> bool {
        matches!(self, Dispatch::Found { .. })
    }

    /// The matched handler, if any.
    pub fn handler(&self) -> Option<&'a H> {
        match self {
            Dispatch::Found { handler, .. } => Some(handler),
            _ => None,
        }
    }

    /// The extracted variables, if a route matched.
    pub fn params(&self) -> Option<&Params<'a>> {
        match self {
            Dispatch::Found { params, .. } => Some(params),
            _ => None,
        }
    }

    /// The allowed methods, if the path matched under other methods only.
    pub fn allowed_methods(&self) -> Option<&[&'a str]> {
        match self {
            Dispatch::MethodNotAllowed { allowed } => Some(allowed),
            _ => None,
        }
    }

    /// The HTTP status code a server would typically answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Dispatch::Found { .. } => 200,
            Dispatch::MethodNotAllowed { .. } => 405,
            Dispatch::NotFound => 404,
        }
    }
}
