//! axum integration for JSON:API query criteria parsing.
//!
//! Exposes the [`JsonApiQuery`] extractor, the raw query-string decoding it
//! is built on, the error-to-response mapping, and the `{ "data": ... }`
//! response envelope, so handlers and integration tests share one surface.
//!
//! [`JsonApiQuery`]: extract::JsonApiQuery

pub mod error;
pub mod extract;
pub mod query;
pub mod response;

pub use error::{QueryError, QueryResult};
pub use extract::JsonApiQuery;
