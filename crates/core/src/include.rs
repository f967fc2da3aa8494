//! Relationship inclusion paths (`include=comments.author,history`).
//!
//! An [`IncludePath`] is one dot-delimited token from the `include`
//! parameter; [`IncludeTree`] groups a list of paths by shared leading
//! segments so a fetch layer can walk relationships level by level.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::CriteriaError;

// ---------------------------------------------------------------------------
// IncludePath
// ---------------------------------------------------------------------------

/// One dot-delimited relationship path, e.g. `comments.author`.
///
/// Always holds at least one segment; empty segments produced by stray or
/// consecutive dots are dropped during parsing, and a token with no usable
/// segments fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncludePath {
    segments: Vec<String>,
}

impl IncludePath {
    /// The path segments, outermost relationship first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment: the relationship on the primary resource.
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// True when the path reaches through a relationship into a
    /// sub-resource (`comments.author`), false for a flat inclusion
    /// (`comments`).
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl FromStr for IncludePath {
    type Err = CriteriaError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let segments: Vec<String> = token
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(CriteriaError::EmptyIncludePath);
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for IncludePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Serialize for IncludePath {
    /// Serializes as the dotted wire form, e.g. `"comments.author"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// IncludeTree
// ---------------------------------------------------------------------------

/// Inclusion paths grouped by shared leading segments, in request order.
///
/// `comments.author` and `comments.location` become one `comments` child
/// with two children of its own. The tree is the shape a fetch layer wants
/// for resolving relationships level by level; the flat path list on
/// [`Criteria`](crate::Criteria) remains the canonical representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeTree {
    children: IndexMap<String, IncludeTree>,
}

impl IncludeTree {
    /// Build a tree from a list of paths, preserving first-seen segment
    /// order at every level.
    pub fn from_paths(paths: &[IncludePath]) -> Self {
        let mut tree = Self::default();
        for path in paths {
            tree.insert(path.segments());
        }
        tree
    }

    fn insert(&mut self, segments: &[String]) {
        if let Some((head, rest)) = segments.split_first() {
            self.children
                .entry(head.clone())
                .or_default()
                .insert(rest);
        }
    }

    /// True for a tree with no children (no inclusions requested).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child subtrees in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &IncludeTree)> {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// The subtree for one relationship name, if included.
    pub fn get(&self, name: &str) -> Option<&IncludeTree> {
        self.children.get(name)
    }

    /// True when every segment of `path` is present, walking from the root.
    ///
    /// A tree built from `comments.author` contains both `comments.author`
    /// and its prefix `comments`.
    pub fn contains(&self, path: &IncludePath) -> bool {
        let mut node = self;
        for segment in path.segments() {
            match node.children.get(segment) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Flatten back to the leaf paths, depth-first in insertion order.
    ///
    /// Interior nodes are implied by their leaves (`comments.author` implies
    /// `comments`), so only leaves are emitted.
    pub fn paths(&self) -> Vec<IncludePath> {
        let mut out = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    fn collect_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<IncludePath>) {
        if self.children.is_empty() {
            if !prefix.is_empty() {
                out.push(IncludePath {
                    segments: prefix.clone(),
                });
            }
            return;
        }
        for (name, child) in &self.children {
            prefix.push(name.clone());
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
