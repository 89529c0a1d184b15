use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Character;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CharacterList {
    #[schema(value_type = Vec<Character>)]
    pub items: Vec<Character>,
}
