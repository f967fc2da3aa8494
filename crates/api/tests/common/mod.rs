use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use jsonapi_api::response::DataResponse;
use jsonapi_api::JsonApiQuery;

/// Build a minimal application router exposing one listing endpoint that
/// echoes the parsed criteria back as JSON.
///
/// This exercises the full extractor path (query-string decoding, bracket
/// grouping, criteria parsing, error mapping) exactly as a real resource
/// handler would.
pub fn build_test_app() -> Router {
    Router::new().route("/articles", get(list_articles))
}

async fn list_articles(JsonApiQuery(criteria): JsonApiQuery) -> impl IntoResponse {
    Json(DataResponse { data: criteria })
}

/// Issue a GET request against the app and return the raw response.
pub async fn get_uri(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string, for assertions that depend on
/// serialization order (JSON object key order survives in the raw text but
/// not in a parsed `serde_json::Value`).
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
