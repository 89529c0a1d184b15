use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::planets::PlanetList,
    error::AppResult,
    models::Planet,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = PlanetList)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<PlanetList>> {
    let planets = planet_service::list_planets(&state).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = crate::error::ErrorBody)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}
