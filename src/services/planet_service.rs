use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::planets::PlanetList,
    entity::planets::{Column, Entity as Planets},
    error::{AppError, AppResult},
    models::Planet,
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<PlanetList> {
    let items = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();

    Ok(PlanetList { items })
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or(AppError::NotFound)
}
