//! Router-level integration tests over a small in-memory catalog.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use costar_core::{dataset, Catalog};
use costar_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const DATA: &str = concat!(
    r#"{"year": 1999, "title": "Alpha", "cast": ["[[Ann A]]", "[[Bob B]]"]}"#,
    "\n",
    r#"{"year": 2004, "title": "Beta", "cast": ["[[Bob B]]", "[[Cy C]]"]}"#,
    "\n",
    r#"{"year": 2010, "title": "Solo Show", "cast": ["[[Zed Z]]"]}"#,
);

fn test_app() -> Router {
    let movies = dataset::read_movies(Cursor::new(DATA)).expect("parse test data");
    let catalog = Catalog::from_movies(movies).expect("build catalog");
    build_router(Arc::new(AppState { catalog }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_link_chain() {
    let (status, body) = get(test_app(), "/link?a=Ann%20A&b=Cy%20C").await;
    assert_eq!(status, StatusCode::OK);

    let steps = body.as_array().expect("array body");
    let names: Vec<&str> = steps
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Ann A", "Alpha", "Bob B", "Beta", "Cy C"]);
    assert_eq!(steps[0]["type"], "cast");
    assert_eq!(steps[1]["type"], "movie");
}

#[tokio::test]
async fn test_link_unconnected_is_empty_array() {
    let (status, body) = get(test_app(), "/link?a=Ann%20A&b=Zed%20Z").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_link_missing_params() {
    let (status, body) = get(test_app(), "/link?b=Cy%20C").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "a is a required query parameter");

    let (status, body) = get(test_app(), "/link?a=Ann%20A").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "b is a required query parameter");
}

#[tokio::test]
async fn test_link_unknown_member() {
    let (status, body) = get(test_app(), "/link?a=Ann%20A&b=Nobody").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error string");
    assert!(message.contains("unknown cast member"), "got: {message}");
}

#[tokio::test]
async fn test_center_distribution() {
    let (status, body) = get(test_app(), "/center?p=Bob%20B").await;
    assert_eq!(status, StatusCode::OK);
    // Bob, Ann, Cy are mutually linkable; Zed is stranded on Solo Show.
    assert_eq!(body["total_linkable"], 4);
    assert_eq!(body["count_by_distance"]["0"], 1);
    assert_eq!(body["count_by_distance"]["1"], 2);
}

#[tokio::test]
async fn test_center_missing_param() {
    let (status, body) = get(test_app(), "/center").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "p is a required query parameter");
}

#[tokio::test]
async fn test_center_unknown_person() {
    let (status, body) = get(test_app(), "/center?p=Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "person not found");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get(test_app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
