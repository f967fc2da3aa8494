//! Integration tests for the JSON:API query extractor over a real router.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, get_uri};

// ---------------------------------------------------------------------------
// Test: full query round-trips through the extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_query_round_trips_through_extractor() {
    let app = build_test_app();
    let response = get_uri(
        app,
        "/articles?fields%5Barticles%5D=title,body&fields%5Bpeople%5D=name\
         &sort=-created,age&page%5Bnumber%5D=2&page%5Bsize%5D=10\
         &filter%5Bauthor%5D=12&include=comments.author,history",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["fields"]["articles"][0], "title");
    assert_eq!(data["fields"]["articles"][1], "body");
    assert_eq!(data["fields"]["people"][0], "name");
    assert_eq!(data["sort"]["created"], "desc");
    assert_eq!(data["sort"]["age"], "asc");
    assert_eq!(data["page"]["number"], "2");
    assert_eq!(data["page"]["size"], "10");
    assert_eq!(data["filters"]["author"], "12");
    assert_eq!(data["include"][0], "comments.author");
    assert_eq!(data["include"][1], "history");
}

// ---------------------------------------------------------------------------
// Test: sort order is preserved in the serialized response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sort_order_is_preserved_in_response_body() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?sort=-created,age").await;

    assert_eq!(response.status(), StatusCode::OK);

    // Key order only survives in the raw body text.
    let body = body_text(response).await;
    assert!(
        body.contains(r#""sort":{"created":"desc","age":"asc"}"#),
        "sort directives out of order in: {body}"
    );
}

#[tokio::test]
async fn reversed_sort_specification_reverses_order() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?sort=age,-created").await;

    let body = body_text(response).await;
    assert!(
        body.contains(r#""sort":{"age":"asc","created":"desc"}"#),
        "sort directives out of order in: {body}"
    );
}

// ---------------------------------------------------------------------------
// Test: empty and absent parameters yield empty containers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_query_string_yields_empty_criteria() {
    let app = build_test_app();
    let response = get_uri(app, "/articles").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["fields"], serde_json::json!({}));
    assert_eq!(data["sort"], serde_json::json!({}));
    assert_eq!(data["page"], serde_json::json!({}));
    assert_eq!(data["filters"], serde_json::json!({}));
    assert_eq!(data["include"], serde_json::json!([]));
}

#[tokio::test]
async fn empty_sort_value_yields_no_sort_entries() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?sort=").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // Never an empty-string sort key.
    assert_eq!(json["data"]["sort"], serde_json::json!({}));
}

// ---------------------------------------------------------------------------
// Test: percent-encoded values decode before parsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn percent_encoded_commas_decode_before_splitting() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?fields%5Barticles%5D=title%2Cbody").await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["fields"]["articles"][0], "title");
    assert_eq!(json["data"]["fields"]["articles"][1], "body");
}

// ---------------------------------------------------------------------------
// Test: unrelated parameters are ignored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unrelated_parameters_are_ignored() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?access_token=abc&sort=name").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["sort"]["name"], "asc");
    assert_eq!(json["data"]["fields"], serde_json::json!({}));
}

// ---------------------------------------------------------------------------
// Test: malformed bracket keys reject with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_bracket_key_rejects_with_400() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?fields%5Barticles=title").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MALFORMED_PARAMETER");
    assert!(json["error"].as_str().unwrap().contains("fields[articles"));
}

#[tokio::test]
async fn bare_family_key_rejects_with_400() {
    let app = build_test_app();
    let response = get_uri(app, "/articles?page=1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MALFORMED_PARAMETER");
}
