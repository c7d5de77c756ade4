//! Folding variable routes into combined expressions.
//!
//! Matching N single-route expressions per request costs N engine runs.
//! Instead, the routes of one method are split into chunks of roughly
//! [`RouterConfig::approx_chunk_size`] routes and every chunk becomes one
//! anchored alternation.
//!
//! # Identifying the route that matched
//!
//! Each alternative is padded with empty groups `()` so that, walking the
//! chunk in registration order, every alternative carries strictly more
//! groups than the one before it. Only the groups of the alternative that
//! matched take part in the match, and all of them do (placeholders are
//! mandatory and padding matches the empty string). Counting the
//! participating groups, plus one for the whole match, therefore yields a
//! number that is unique to that alternative, and `route_map` maps it back
//! to the route.
//!
//! ```text
//! /user/([^/]+)               -> 1 group,          key 2
//! /user/([^/]+)/([0-9]+)      -> 2 groups,         key 3
//! /post/([^/]+)()()           -> 1 group + 2 pads, key 4
//! ```

use std::collections::BTreeMap;

use chunkroute_core::{VariableGroup, VariableRoute};
use regex::Regex;

use crate::config::RouterConfig;

/// A registered variable route before chunking.
#[derive(Debug, Clone)]
pub(crate) struct RouteRecord<H> {
    /// Single-route expression: escaped literals and `(constraint)` groups.
    pub(crate) regex: String,
    /// `regex` anchored at both ends, used for overlap checks.
    pub(crate) matcher: Regex,
    pub(crate) handler: H,
    pub(crate) variables: Vec<String>,
}

impl<H> RouteRecord<H> {
    /// Returns true if the route matches the whole of `path`.
    pub(crate) fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// Number of chunks for `route_count` routes: `max(1, round(n / k))`.
pub fn chunk_count(route_count: usize, approx_chunk_size: usize) -> usize {
    let k = approx_chunk_size.max(1);
    // round half away from zero, in integers
    ((2 * route_count + k) / (2 * k)).max(1)
}

/// Routes per chunk: `ceil(n / chunk_count)`.
pub fn chunk_size(route_count: usize, approx_chunk_size: usize) -> usize {
    route_count
        .div_ceil(chunk_count(route_count, approx_chunk_size))
        .max(1)
}

/// Compile the variable routes of one method, keeping registration order.
pub(crate) fn compile_method<H: Clone>(
    records: &[RouteRecord<H>],
    config: &RouterConfig,
) -> Vec<VariableGroup<H>> {
    let size = chunk_size(records.len(), config.approx_chunk_size);

    let mut groups = Vec::with_capacity(records.len().div_ceil(size));
    for chunk in records.chunks(size) {
        build_groups(chunk, config.max_capture_groups, &mut groups);
    }
    groups
}

/// Build one group per chunk, or several if the chunk would exceed the
/// capture group limit.
fn build_groups<H: Clone>(
    chunk: &[RouteRecord<H>],
    max_capture_groups: usize,
    out: &mut Vec<VariableGroup<H>>,
) {
    let mut builder = GroupBuilder::default();

    for record in chunk {
        if !builder.is_empty() && builder.would_exceed(record, max_capture_groups) {
            out.push(std::mem::take(&mut builder).finish());
        }
        builder.push(record);
    }

    if !builder.is_empty() {
        out.push(builder.finish());
    }
}

struct GroupBuilder<H> {
    alternatives: Vec<String>,
    route_map: BTreeMap<usize, VariableRoute<H>>,
    groups_so_far: usize,
    total_groups: usize,
}

impl<H> Default for GroupBuilder<H> {
    fn default() -> Self {
        Self {
            alternatives: Vec::new(),
            route_map: BTreeMap::new(),
            groups_so_far: 0,
            total_groups: 0,
        }
    }
}

impl<H: Clone> GroupBuilder<H> {
    fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Groups the alternative for `record` would carry once padded.
    fn padded_width(&self, record: &RouteRecord<H>) -> usize {
        self.groups_so_far.max(record.variables.len())
    }

    fn would_exceed(&self, record: &RouteRecord<H>, limit: usize) -> bool {
        self.total_groups + self.padded_width(record) > limit
    }

    fn push(&mut self, record: &RouteRecord<H>) {
        let width = self.padded_width(record);
        let padding = width - record.variables.len();

        let mut alternative = String::with_capacity(record.regex.len() + 2 * padding);
        alternative.push_str(&record.regex);
        for _ in 0..padding {
            alternative.push_str("()");
        }

        self.alternatives.push(alternative);
        self.route_map.insert(
            width + 1,
            VariableRoute {
                handler: record.handler.clone(),
                variables: record.variables.clone(),
            },
        );
        self.total_groups += width;
        self.groups_so_far = width + 1;
    }

    fn finish(self) -> VariableGroup<H> {
        VariableGroup {
            regex: format!("^(?:{})$", self.alternatives.join("|")),
            route_map: self.route_map,
        }
    }
}
