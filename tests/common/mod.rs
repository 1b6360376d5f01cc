//! Common test utilities
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Local;
use clube_admin::{build_app, AppState, Club, Config};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

pub const API_KEY: &str = "test_key_123";

/// Router over the demo roster, keyed with [`API_KEY`]
pub fn seeded_app() -> Router {
    let club = Club::seeded(Local::now().date_naive());
    build_app(AppState::new(club.into_shared(), Config::with_api_key(API_KEY)))
}

pub fn empty_app() -> Router {
    build_app(AppState::new(Club::empty().into_shared(), Config::with_api_key(API_KEY)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("X-API-Key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("X-API-Key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    with_json("POST", uri, body)
}

pub fn put_json(uri: &str, body: Value) -> Request<Body> {
    with_json("PUT", uri, body)
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("X-API-Key", API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON body (`Null` when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
