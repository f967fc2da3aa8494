//! One pure parsing function per JSON:API query-parameter concern.
//!
//! Each function is independent and side-effect-free; [`Criteria::from_raw`]
//! composes them. Parsing is deliberately lenient (see the crate docs):
//! structural validation against a resource schema belongs to downstream
//! consumers, not this stage.
//!
//! [`Criteria::from_raw`]: crate::Criteria::from_raw

use indexmap::IndexMap;

use crate::criteria::SortDirection;
use crate::include::IncludePath;

/// Split each per-type CSV into an ordered list of trimmed field names.
///
/// Token count and order are preserved exactly: `"title,body"` yields two
/// names, and `"title,,body"` yields three (one of them empty). Whether an
/// empty or unknown field name is an error is the schema layer's call.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use jsonapi_core::parse::parse_fields;
///
/// let mut raw = IndexMap::new();
/// raw.insert("articles".to_string(), "title, body".to_string());
/// let fields = parse_fields(&raw);
/// assert_eq!(fields["articles"], vec!["title", "body"]);
/// ```
pub fn parse_fields(raw: &IndexMap<String, String>) -> IndexMap<String, Vec<String>> {
    raw.iter()
        .map(|(resource_type, csv)| {
            let names = csv.split(',').map(|name| name.trim().to_string()).collect();
            (resource_type.clone(), names)
        })
        .collect()
}

/// Parse a comma-separated sort specification into field/direction pairs.
///
/// A leading `-` selects descending order and is stripped from the field
/// name. Empty tokens are skipped, so an empty or whitespace-only input
/// yields no entries rather than a spurious empty-string key (splitting
/// `""` on `,` produces one empty token). A bare `-` is skipped for the
/// same reason.
///
/// Duplicate field names keep the position of the first occurrence and the
/// direction of the last.
///
/// # Examples
///
/// ```
/// use jsonapi_core::parse::parse_sort;
/// use jsonapi_core::SortDirection;
///
/// let sort = parse_sort("-created,age");
/// assert_eq!(sort["created"], SortDirection::Desc);
/// assert_eq!(sort["age"], SortDirection::Asc);
/// assert!(parse_sort("").is_empty());
/// ```
pub fn parse_sort(raw: &str) -> IndexMap<String, SortDirection> {
    let mut sort = IndexMap::new();

    for token in raw.split(',') {
        let token = token.trim();
        let (name, direction) = match token.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Desc),
            None => (token, SortDirection::Asc),
        };

        if name.is_empty() {
            continue;
        }
        sort.insert(name.to_string(), direction);
    }

    sort
}

/// Pagination passthrough: keys and values are caller-defined (`number`,
/// `size`, cursors, ...) and not interpreted here.
pub fn parse_page(raw: &IndexMap<String, String>) -> IndexMap<String, String> {
    raw.clone()
}

/// Filter passthrough.
///
/// No filter query language is defined at this stage; the map is handed to
/// consumers verbatim as an extension point.
pub fn parse_filters(raw: &IndexMap<String, String>) -> IndexMap<String, String> {
    raw.clone()
}

/// Parse a comma-separated list of dot-delimited inclusion paths.
///
/// Empty tokens are skipped (so empty input yields no paths), tokens that
/// reduce to no usable segments (`"."`, `".."`) are dropped, and exact
/// duplicate paths are removed while preserving first-seen order.
///
/// # Examples
///
/// ```
/// use jsonapi_core::parse::parse_include;
///
/// let include = parse_include("comments.author,history,comments.author");
/// let paths: Vec<String> = include.iter().map(ToString::to_string).collect();
/// assert_eq!(paths, vec!["comments.author", "history"]);
/// ```
pub fn parse_include(raw: &str) -> Vec<IncludePath> {
    let mut paths: Vec<IncludePath> = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Ok(path) = token.parse::<IncludePath>() {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
