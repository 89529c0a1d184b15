mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};

use common::{get, insert_character, json_body, send, setup_state};

#[tokio::test]
async fn unknown_route_returns_json_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let response = send(&state, get("/starships")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "No route for /starships");

    Ok(())
}

#[tokio::test]
async fn trailing_slash_is_ignored() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_character(&state, "Luke Skywalker").await?;

    let response = send(&state, get("/people/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[tokio::test]
async fn responses_carry_a_request_id() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let response = send(&state, get("/health")).await;
    assert!(response.headers().contains_key("x-request-id"));

    Ok(())
}

#[tokio::test]
async fn sitemap_lists_endpoints() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let response = send(&state, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let html = String::from_utf8(bytes.to_vec())?;
    assert!(html.contains("/users/favourites"));
    assert!(html.contains("/favourite/peoples/{id_character}"));

    Ok(())
}

#[tokio::test]
async fn docs_are_served() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let response = send(&state, get("/docs")).await;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/people")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())?;

    let response = send(&state, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    Ok(())
}

#[tokio::test]
async fn oversized_body_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let name = "x".repeat(2 * 1024 * 1024);
    let body = serde_json::json!({ "name": name, "id": 1 }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/favourite/planet/1")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))?;

    let response = send(&state, request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}
