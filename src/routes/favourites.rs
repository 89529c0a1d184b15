use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::favourites::{FavouriteList, FavouriteRequest},
    error::AppResult,
    models::{Character, Planet, UserFavourite},
    services::favourite_service,
    state::AppState,
};

// POST and DELETE on /favourite/planet share one path template; the router
// rejects two templates that differ only in the parameter name.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/favourites", get(list_favourites))
        .route(
            "/favourite/planet/{id}",
            post(add_favourite_planet).delete(remove_favourite_planet),
        )
        .route("/favourite/people/{id}", post(add_favourite_person))
        .route("/favourite/peoples/{id_character}", delete(remove_favourite_person))
}

#[utoipa::path(
    get,
    path = "/users/favourites",
    responses(
        (status = 200, description = "All favourites", body = FavouriteList)
    ),
    tag = "Favourites"
)]
pub async fn list_favourites(State(state): State<AppState>) -> AppResult<Json<FavouriteList>> {
    let favourites = favourite_service::list_favourites(&state).await?;
    Ok(Json(favourites))
}

#[utoipa::path(
    post,
    path = "/favourite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Ignored; the planet is built from the body")
    ),
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Planet created", body = Planet),
        (status = 500, description = "Duplicate id or database failure", body = crate::error::ErrorBody)
    ),
    tag = "Favourites"
)]
pub async fn add_favourite_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FavouriteRequest>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    if id != payload.id {
        tracing::debug!(path_id = id, body_id = payload.id, "path id ignored, using body id");
    }
    let planet = favourite_service::add_favourite_planet(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

#[utoipa::path(
    post,
    path = "/favourite/people/{id}",
    params(
        ("id" = i32, Path, description = "Ignored; the character is built from the body")
    ),
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Character created", body = Character),
        (status = 500, description = "Duplicate id or database failure", body = crate::error::ErrorBody)
    ),
    tag = "Favourites"
)]
pub async fn add_favourite_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FavouriteRequest>,
) -> AppResult<(StatusCode, Json<Character>)> {
    if id != payload.id {
        tracing::debug!(path_id = id, body_id = payload.id, "path id ignored, using body id");
    }
    let character = favourite_service::add_favourite_person(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

#[utoipa::path(
    delete,
    path = "/favourite/planet/{id}",
    params(
        ("id" = i32, Path, description = "UserFavourite ID (shares the POST route's template)")
    ),
    responses(
        (status = 200, description = "Favourite removed", body = UserFavourite),
        (status = 404, description = "Favourite not found", body = crate::error::ErrorBody)
    ),
    tag = "Favourites"
)]
pub async fn remove_favourite_planet(
    State(state): State<AppState>,
    Path(id_planet): Path<i32>,
) -> AppResult<Json<UserFavourite>> {
    let favourite = favourite_service::remove_favourite(&state, id_planet).await?;
    Ok(Json(favourite))
}

#[utoipa::path(
    delete,
    path = "/favourite/peoples/{id_character}",
    params(
        ("id_character" = i32, Path, description = "UserFavourite ID")
    ),
    responses(
        (status = 200, description = "Favourite removed", body = UserFavourite),
        (status = 404, description = "Favourite not found", body = crate::error::ErrorBody)
    ),
    tag = "Favourites"
)]
pub async fn remove_favourite_person(
    State(state): State<AppState>,
    Path(id_character): Path<i32>,
) -> AppResult<Json<UserFavourite>> {
    let favourite = favourite_service::remove_favourite(&state, id_character).await?;
    Ok(Json(favourite))
}
