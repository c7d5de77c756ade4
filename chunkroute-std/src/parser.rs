//! Route pattern parser.
//!
//! Turns patterns of the form `/user/{name}/{id:[0-9]+}` into a sequence of
//! [`RouteSegment`]s.
//!
//! # Syntax
//!
//! - `{name}` - a placeholder matching one or more non-slash characters
//! - `{name:constraint}` - a placeholder matching the regular expression
//!   `constraint`, which may itself contain balanced braces (`{id:\d{1,5}}`)
//!
//! Names start with an ASCII letter followed by letters, digits or `_`.
//! Whitespace around the name and around the constraint is ignored. A `}`
//! outside a placeholder is ordinary text.
//!
//! # Example
//!
//! ```rust
//! use chunkroute_core::RouteSegment;
//! use chunkroute_std::parser::parse;
//!
//! let segments = parse("/user/{id:[0-9]+}").unwrap();
//! assert_eq!(
//!     segments,
//!     vec![
//!         RouteSegment::literal("/user/"),
//!         RouteSegment::variable("id", "[0-9]+"),
//!     ]
//! );
//! ```

use chunkroute_core::{DEFAULT_CONSTRAINT, RouteError, RouteSegment};
use regex::Regex;

/// Parse a route pattern.
///
/// A pattern without placeholders yields exactly one literal segment equal to
/// the input, which marks it as a static route.
///
/// # Errors
///
/// [`RouteError::MalformedPattern`] if a placeholder has an invalid name, is
/// not terminated, has an empty constraint, or has a constraint that is not a
/// valid regular expression or contains capturing groups.
pub fn parse(pattern: &str) -> Result<Vec<RouteSegment>, RouteError> {
    let mut segments = Vec::new();
    let mut offset = 0;

    while let Some(found) = pattern[offset..].find('{') {
        let open = offset + found;
        let (segment, end) = parse_placeholder(pattern, open)?;

        if open > offset {
            segments.push(RouteSegment::literal(&pattern[offset..open]));
        }
        segments.push(segment);
        offset = end;
    }

    if offset < pattern.len() || segments.is_empty() {
        segments.push(RouteSegment::literal(&pattern[offset..]));
    }

    Ok(segments)
}

/// Parse the placeholder whose `{` sits at byte `open`.
///
/// Returns the segment and the byte offset just past its closing `}`.
fn parse_placeholder(pattern: &str, open: usize) -> Result<(RouteSegment, usize), RouteError> {
    let body = &pattern[open + 1..];
    let mut chars = body.char_indices().peekable();

    skip_whitespace(&mut chars);

    let name_start = match chars.peek() {
        Some(&(i, c)) if c.is_ascii_alphabetic() => i,
        _ => {
            return Err(RouteError::malformed(
                pattern,
                format!("invalid placeholder name at offset {open}"),
            ));
        }
    };
    let mut name_end = name_start;
    while let Some(&(i, c)) = chars.peek() {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            break;
        }
        name_end = i + c.len_utf8();
        chars.next();
    }
    let name = &body[name_start..name_end];

    skip_whitespace(&mut chars);

    match chars.next() {
        Some((i, '}')) => Ok((
            RouteSegment::variable(name, DEFAULT_CONSTRAINT),
            open + 1 + i + 1,
        )),
        Some((i, ':')) => {
            let constraint_start = i + 1;
            let close = find_closing_brace(&body[constraint_start..])
                .map(|rel| constraint_start + rel)
                .ok_or_else(|| {
                    RouteError::malformed(
                        pattern,
                        format!("unterminated placeholder \"{name}\""),
                    )
                })?;
            let constraint = body[constraint_start..close].trim();
            validate_constraint(pattern, name, constraint)?;

            Ok((
                RouteSegment::variable(name, constraint),
                open + 1 + close + 1,
            ))
        }
        Some((_, c)) => Err(RouteError::malformed(
            pattern,
            format!("unexpected '{c}' after placeholder name \"{name}\""),
        )),
        None => Err(RouteError::malformed(
            pattern,
            format!("unterminated placeholder \"{name}\""),
        )),
    }
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) {
    while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
}

/// Byte offset of the `}` closing a constraint, honoring nested braces and
/// backslash escapes.
fn find_closing_brace(constraint: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;

    for (i, c) in constraint.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }

    None
}

fn validate_constraint(pattern: &str, name: &str, constraint: &str) -> Result<(), RouteError> {
    if constraint.is_empty() {
        return Err(RouteError::malformed(
            pattern,
            format!("empty constraint for placeholder \"{name}\""),
        ));
    }

    let regex = Regex::new(constraint).map_err(|e| {
        RouteError::malformed(
            pattern,
            format!("invalid constraint for placeholder \"{name}\": {e}"),
        )
    })?;

    // Group 0 is the whole match; anything more would shift the group count
    // used to identify routes after chunking.
    if regex.captures_len() > 1 {
        return Err(RouteError::malformed(
            pattern,
            format!(
                "constraint for placeholder \"{name}\" must not contain capturing groups, use (?:...) instead"
            ),
        ));
    }

    Ok(())
}
