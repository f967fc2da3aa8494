//! Shared response envelope for handlers built on this crate.
//!
//! Successful responses wrap their payload in a `{ "data": ... }` envelope,
//! the same shape JSON:API documents use for primary data. Prefer
//! [`DataResponse`] over ad-hoc `serde_json::json!({ "data": ... })` so the
//! payload type stays checked at compile time.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: articles }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
