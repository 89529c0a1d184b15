use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::people::CharacterList,
    error::AppResult,
    models::Character,
    services::people_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All characters", body = CharacterList)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<CharacterList>> {
    let people = people_service::list_people(&state).await?;
    Ok(Json(people))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = Character),
        (status = 404, description = "Character not found", body = crate::error::ErrorBody)
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Character>> {
    let person = people_service::get_person(&state, id).await?;
    Ok(Json(person))
}
