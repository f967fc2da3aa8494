//! The [`JsonApiQuery`] extractor.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonapi_core::Criteria;

use crate::error::QueryError;
use crate::query::decode_raw_query;

/// Extractor that parses the request query string into a [`Criteria`].
///
/// Mirrors `axum::extract::Query` in shape: destructure it in a handler to
/// get at the criteria directly.
///
/// ```ignore
/// async fn list_articles(JsonApiQuery(criteria): JsonApiQuery) -> ... {
///     let sort = criteria.sort();
///     ...
/// }
/// ```
///
/// Rejects with a 400 only for structurally malformed bracket keys; all
/// other input parses leniently (see `jsonapi_core::parse`).
#[derive(Debug, Clone)]
pub struct JsonApiQuery(pub Criteria);

impl Deref for JsonApiQuery {
    type Target = Criteria;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for JsonApiQuery
where
    S: Send + Sync,
{
    type Rejection = QueryError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or("");
        let raw = decode_raw_query(query)?;
        let criteria = Criteria::from_raw(&raw);

        tracing::debug!(
            fieldsets = criteria.fields().len(),
            sort_keys = criteria.sort().len(),
            page_keys = criteria.page().len(),
            filters = criteria.filters().len(),
            includes = criteria.include().len(),
            "Parsed JSON:API query criteria",
        );

        Ok(Self(criteria))
    }
}
