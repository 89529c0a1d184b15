use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::people::CharacterList,
    entity::characters::{Column, Entity as Characters},
    error::{AppError, AppResult},
    models::Character,
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<CharacterList> {
    let items = Characters::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();

    Ok(CharacterList { items })
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<Character> {
    Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Character::from)
        .ok_or(AppError::NotFound)
}
