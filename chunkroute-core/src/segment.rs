//! Parsed route pattern segments.

use std::fmt;

/// Constraint used when a placeholder does not name one: one or more
/// non-slash characters.
pub const DEFAULT_CONSTRAINT: &str = "[^/]+";

/// One piece of a parsed route pattern.
///
/// `/user/{name}/{id:[0-9]+}` parses to
/// `[Literal("/user/"), Variable(name, [^/]+), Literal("/"), Variable(id, [0-9]+)]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteSegment {
    /// Text matched verbatim.
    Literal(String),
    /// A named placeholder and the regular expression its value must match.
    Variable {
        /// Placeholder name.
        name: String,
        /// Regular expression body, without anchors or enclosing group.
        constraint: String,
    },
}

impl RouteSegment {
    /// Create a literal segment.
    pub fn literal(text: impl Into<String>) -> Self {
        RouteSegment::Literal(text.into())
    }

    /// Create a variable segment with the given constraint.
    pub fn variable(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        RouteSegment::Variable {
            name: name.into(),
            constraint: constraint.into(),
        }
    }

    /// Returns true if this is a literal segment.
    pub fn is_literal(&self) -> bool {
        matches!(self, RouteSegment::Literal(_))
    }

    /// The placeholder name, if this is a variable segment.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            RouteSegment::Variable { name, .. } => Some(name),
            RouteSegment::Literal(_) => None,
        }
    }
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSegment::Literal(text) => f.write_str(text),
            RouteSegment::Variable { name, constraint } if constraint == DEFAULT_CONSTRAINT => {
                write!(f, "{{{name}}}")
            }
            RouteSegment::Variable { name, constraint } => write!(f, "{{{name}:{constraint}}}"),
        }
    }
}

/// Re-join parsed segments into a pattern string.
///
/// Placeholders using the default constraint are rendered as `{name}`,
/// others as `{name:constraint}`.
pub fn render(segments: &[RouteSegment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

/// Returns true if the segments describe a static route: a single literal.
pub fn is_static(segments: &[RouteSegment]) -> bool {
    matches!(segments, [RouteSegment::Literal(_)])
}
