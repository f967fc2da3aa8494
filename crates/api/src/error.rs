use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// HTTP-level error for JSON:API query parsing.
///
/// Parsing itself is lenient; the only rejection this stage produces is a
/// structurally malformed parameter key (a bracket family with no key, an
/// unterminated `[`, or an empty bracket). Implements [`IntoResponse`] to
/// produce the project's standard JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A query parameter key that does not follow the
    /// `family[key]` bracket convention, e.g. `fields[articles` or `page[]`.
    #[error("Malformed query parameter: {0}")]
    MalformedParameter(String),
}

/// Convenience type alias for query-decoding return values.
pub type QueryResult<T> = Result<T, QueryError>;

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            QueryError::MalformedParameter(key) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_PARAMETER",
                format!("Malformed query parameter: {key}"),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
