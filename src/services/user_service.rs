use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::users::{HelloResponse, UserList},
    entity::users::{Column, Entity as Users},
    error::AppResult,
    models::User,
    state::AppState,
};

pub fn hello() -> HelloResponse {
    HelloResponse {
        msg: "Hello, this is your GET /user response ".to_string(),
    }
}

pub async fn list_users(state: &AppState) -> AppResult<UserList> {
    let items = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(UserList { items })
}
