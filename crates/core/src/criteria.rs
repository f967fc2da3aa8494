//! The [`Criteria`] value object and its raw-input counterpart.
//!
//! A `Criteria` aggregates every query intention a JSON:API client can
//! express for one request: sparse fieldsets, sort directives, pagination,
//! filters, and relationship inclusion. It is assembled once from a
//! [`RawQuery`] and read-only afterwards, so it can be shared freely across
//! threads for the lifetime of the request.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::include::{IncludePath, IncludeTree};
use crate::parse;

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

/// Direction of a single sort directive.
///
/// A leading `-` on a sort field selects [`SortDirection::Desc`]; the bare
/// field name selects [`SortDirection::Asc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The lowercase wire form (`"asc"` / `"desc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CriteriaError::UnknownDirection(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw query input
// ---------------------------------------------------------------------------

/// Decoded query parameters grouped by JSON:API family, before parsing.
///
/// This is the hand-off point between the HTTP layer and the parser: the
/// `fields`, `page`, and `filter` maps hold the bracketed parameter families
/// (`fields[articles]=title,body` becomes `"articles" => "title,body"`),
/// while `sort` and `include` carry their flat comma-separated values.
///
/// Absent parameters stay `None` / empty and yield empty containers in the
/// resulting [`Criteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    /// Resource type to comma-separated field list (`fields[<type>]`).
    pub fields: IndexMap<String, String>,
    /// The `sort` parameter value, if present.
    pub sort: Option<String>,
    /// Pagination parameters (`page[<key>]`), free-form keys.
    pub page: IndexMap<String, String>,
    /// Filter parameters (`filter[<key>]`), free-form keys.
    pub filter: IndexMap<String, String>,
    /// The `include` parameter value, if present.
    pub include: Option<String>,
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Immutable aggregate of the parsed query intentions for one request.
///
/// Constructed once via [`Criteria::from_raw`]; fields are private and only
/// reachable through the read accessors, so a `Criteria` never changes after
/// construction. Created per incoming request and discarded after request
/// handling, with no caching or shared ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    fields: IndexMap<String, Vec<String>>,
    sort: IndexMap<String, SortDirection>,
    page: IndexMap<String, String>,
    filters: IndexMap<String, String>,
    include: Vec<IncludePath>,
}

impl Criteria {
    /// Parse a [`RawQuery`] into a `Criteria`.
    ///
    /// Parsing is lenient: absent sections become empty containers and
    /// empty tokens in the sort/include lists are skipped. Field names are
    /// not validated against any schema here.
    pub fn from_raw(raw: &RawQuery) -> Self {
        Self {
            fields: parse::parse_fields(&raw.fields),
            sort: raw.sort.as_deref().map(parse::parse_sort).unwrap_or_default(),
            page: parse::parse_page(&raw.page),
            filters: parse::parse_filters(&raw.filter),
            include: raw
                .include
                .as_deref()
                .map(parse::parse_include)
                .unwrap_or_default(),
        }
    }

    /// Sparse fieldsets: resource type to ordered field names.
    pub fn fields(&self) -> &IndexMap<String, Vec<String>> {
        &self.fields
    }

    /// The requested fields for one resource type, if a fieldset was given.
    pub fn fields_for(&self, resource_type: &str) -> Option<&[String]> {
        self.fields.get(resource_type).map(Vec::as_slice)
    }

    /// Sort directives in request order (highest priority first).
    pub fn sort(&self) -> &IndexMap<String, SortDirection> {
        &self.sort
    }

    /// Pagination parameters, passed through unmodified.
    pub fn page(&self) -> &IndexMap<String, String> {
        &self.page
    }

    /// Filter parameters, passed through unmodified.
    ///
    /// No filter query language is defined at this stage; consumers assign
    /// meaning to the keys and values.
    pub fn filters(&self) -> &IndexMap<String, String> {
        &self.filters
    }

    /// Relationship inclusion paths in request order, duplicates removed.
    pub fn include(&self) -> &[IncludePath] {
        &self.include
    }

    /// The inclusion paths grouped into a tree by leading segment.
    ///
    /// `comments.author` and `comments.location` both land under a single
    /// `comments` child. Built on demand; the flat path list remains the
    /// canonical representation.
    pub fn include_tree(&self) -> IncludeTree {
        IncludeTree::from_paths(&self.include)
    }

    /// True when the request expressed no query intentions at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.sort.is_empty()
            && self.page.is_empty()
            && self.filters.is_empty()
            && self.include.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
