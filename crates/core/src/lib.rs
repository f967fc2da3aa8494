//! Pure parsing of JSON:API query parameters into an immutable [`Criteria`]
//! value object.
//!
//! This crate has no HTTP or async dependencies so it can be used by the
//! axum layer, repository code, or any future CLI tooling. The HTTP boundary
//! (query-string decoding, extractors, error responses) lives in
//! `jsonapi-api`.

pub mod criteria;
pub mod error;
pub mod include;
pub mod parse;

pub use criteria::{Criteria, RawQuery, SortDirection};
pub use error::CriteriaError;
pub use include::{IncludePath, IncludeTree};
