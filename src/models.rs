use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{characters, planets, user_favourites, users};

/// Public view of a user. The password column is never serialized.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub nickname: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub climate: Option<String>,
}

/// Association record. Only the foreign keys are exposed, never the related rows.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserFavourite {
    pub id: i32,
    pub id_user: Option<i32>,
    pub id_character: Option<i32>,
    pub id_planet: Option<i32>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            nickname: model.nickname,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_year: model.birth_year,
            gender: model.gender,
            height: model.height,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            climate: model.climate,
        }
    }
}

impl From<user_favourites::Model> for UserFavourite {
    fn from(model: user_favourites::Model) -> Self {
        Self {
            id: model.id,
            id_user: model.id_user,
            id_character: model.id_character,
            id_planet: model.id_planet,
        }
    }
}
