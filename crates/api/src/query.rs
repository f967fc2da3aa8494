//! Raw query-string decoding into [`RawQuery`] parameter groups.
//!
//! Percent-decodes the request query string and groups the JSON:API
//! parameter families: `fields[<type>]`, `page[<key>]`, `filter[<key>]`,
//! `sort`, and `include`. Parameters outside these families belong to other
//! layers and are ignored here.

use jsonapi_core::RawQuery;
use url::form_urlencoded;

use crate::error::{QueryError, QueryResult};

/// Decode a raw (still percent-encoded) query string into grouped
/// [`RawQuery`] parameters.
///
/// Repeated keys within a family follow last-wins semantics, matching how
/// an associative parameter map would behave. A structurally malformed
/// bracket key (see [`QueryError::MalformedParameter`]) is the only error.
pub fn decode_raw_query(query: &str) -> QueryResult<RawQuery> {
    let mut raw = RawQuery::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "sort" => raw.sort = Some(value.into_owned()),
            "include" => raw.include = Some(value.into_owned()),
            key => {
                if let Some(resource_type) = bracketed_key(key, "fields")? {
                    raw.fields
                        .insert(resource_type.to_string(), value.into_owned());
                } else if let Some(page_key) = bracketed_key(key, "page")? {
                    raw.page.insert(page_key.to_string(), value.into_owned());
                } else if let Some(filter_key) = bracketed_key(key, "filter")? {
                    raw.filter
                        .insert(filter_key.to_string(), value.into_owned());
                }
                // Anything else (auth tokens, cache busters, ...) is not
                // this layer's concern.
            }
        }
    }

    Ok(raw)
}

/// Match `key` against the `family[inner]` bracket convention.
///
/// Returns `Ok(None)` when `key` does not belong to `family` at all (so the
/// caller can try the next family), `Ok(Some(inner))` on a well-formed
/// bracketed key, and an error when the key starts as this family but the
/// bracket part is malformed: a bare `fields`, an unterminated `fields[x`,
/// an empty `fields[]`, or nested brackets.
fn bracketed_key<'a>(key: &'a str, family: &str) -> QueryResult<Option<&'a str>> {
    let Some(rest) = key.strip_prefix(family) else {
        return Ok(None);
    };

    if rest.is_empty() {
        // `fields=...` without a resource type.
        return Err(QueryError::MalformedParameter(key.to_string()));
    }
    if !rest.starts_with('[') {
        // A different parameter that merely shares the prefix, e.g.
        // `fieldset`.
        return Ok(None);
    }

    let inner = rest
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| QueryError::MalformedParameter(key.to_string()))?;

    if inner.is_empty() || inner.contains('[') || inner.contains(']') {
        return Err(QueryError::MalformedParameter(key.to_string()));
    }

    Ok(Some(inner))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
