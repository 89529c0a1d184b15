#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use starwars_api::{
    db::{create_orm_conn, run_migrations},
    entity::{characters, planets, user_favourites, users},
    routes::create_service,
    state::AppState,
};
use tower::ServiceExt;

// Fresh in-memory database with the real migrations applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    create_service(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn insert_user(state: &AppState, name: &str, email: &str) -> anyhow::Result<users::Model> {
    let user = users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set("not-a-real-hash".to_string()),
        nickname: Set(Some(name.to_lowercase())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(user)
}

pub async fn insert_character(state: &AppState, name: &str) -> anyhow::Result<characters::Model> {
    let character = characters::ActiveModel {
        name: Set(Some(name.to_string())),
        birth_year: Set(Some("19BBY".to_string())),
        gender: Set(Some("male".to_string())),
        height: Set(Some(172)),
        skin_color: Set(Some("fair".to_string())),
        eye_color: Set(Some("blue".to_string())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(character)
}

pub async fn insert_planet(state: &AppState, name: &str) -> anyhow::Result<planets::Model> {
    let planet = planets::ActiveModel {
        name: Set(Some(name.to_string())),
        diameter: Set(Some(10465)),
        rotation_period: Set(Some(23)),
        orbital_period: Set(Some(304)),
        climate: Set(Some("arid".to_string())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(planet)
}

pub async fn insert_favourite(
    state: &AppState,
    id_user: Option<i32>,
    id_character: Option<i32>,
    id_planet: Option<i32>,
) -> anyhow::Result<user_favourites::Model> {
    let favourite = user_favourites::ActiveModel {
        id_user: Set(id_user),
        id_character: Set(id_character),
        id_planet: Set(id_planet),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(favourite)
}
