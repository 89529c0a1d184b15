use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{
    dto::favourites::{FavouriteList, FavouriteRequest},
    entity::{
        characters,
        planets,
        user_favourites::{Column, Entity as UserFavourites},
    },
    error::{AppError, AppResult},
    models::{Character, Planet, UserFavourite},
    state::AppState,
};

pub async fn list_favourites(state: &AppState) -> AppResult<FavouriteList> {
    let items = UserFavourites::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(UserFavourite::from)
        .collect();

    Ok(FavouriteList { items })
}

/// Inserts a planet row built from the request body.
pub async fn add_favourite_planet(
    state: &AppState,
    payload: FavouriteRequest,
) -> AppResult<Planet> {
    let active = planets::ActiveModel {
        id: Set(payload.id),
        name: Set(Some(payload.name)),
        ..Default::default()
    };
    let planet = active.insert(&state.orm).await?;

    tracing::info!(planet_id = planet.id, "planet created from favourite request");

    Ok(Planet::from(planet))
}

/// Inserts a character row built from the request body.
pub async fn add_favourite_person(
    state: &AppState,
    payload: FavouriteRequest,
) -> AppResult<Character> {
    let active = characters::ActiveModel {
        id: Set(payload.id),
        name: Set(Some(payload.name)),
        ..Default::default()
    };
    let character = active.insert(&state.orm).await?;

    tracing::info!(character_id = character.id, "character created from favourite request");

    Ok(Character::from(character))
}

/// Deletes the favourite whose primary key is `id` and returns it.
pub async fn remove_favourite(state: &AppState, id: i32) -> AppResult<UserFavourite> {
    let favourite = UserFavourites::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let removed = UserFavourite::from(favourite.clone());
    favourite.delete(&state.orm).await?;

    tracing::info!(favourite_id = removed.id, "favourite removed");

    Ok(removed)
}
