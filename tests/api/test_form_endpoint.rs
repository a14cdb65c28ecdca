// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for GET / and unknown routes

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::util::ServiceExt; // for `oneshot`

use crate::common::{app, body_string};

#[tokio::test]
async fn test_form_route_returns_html_form() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("<h1>Hot Dog Checker</h1>"));
    assert!(body.contains(r#"action="/check""#));
    assert!(body.contains(r#"name="euid""#));
    assert!(body.contains(r#"name="image1""#));
    assert!(body.contains(r#"name="image2""#));
}

#[tokio::test]
async fn test_form_route_rejects_post() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_check_route_rejects_get() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/check")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/models")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
