use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserFavourite;

/// Body of the favourite POST routes. The row is created from these fields,
/// not from the path parameter.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct FavouriteRequest {
    pub name: String,
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavouriteList {
    #[schema(value_type = Vec<UserFavourite>)]
    pub items: Vec<UserFavourite>,
}
