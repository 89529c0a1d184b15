use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::users::{HelloResponse, UserList},
    error::AppResult,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(hello))
        .route("/users", get(list_users))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    ),
    tag = "Users"
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(user_service::hello())
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, without passwords", body = UserList)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = user_service::list_users(&state).await?;
    Ok(Json(users))
}
