//! Demo catalog used by the `seed` binary.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entity::{Characters, Users, characters, planets, user_favourites, users};

#[derive(Debug)]
pub struct SeedSummary {
    pub user_id: i32,
    pub characters: usize,
    pub planets: usize,
}

/// Seeds a user, characters, planets and two favourites.
///
/// Returns `None` when characters already exist.
pub async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<Option<SeedSummary>> {
    if Characters::find().count(orm).await? > 0 {
        return Ok(None);
    }

    let user = ensure_user(orm, "Luke Skywalker", "luke@rebellion.org", "usethe4ce").await?;
    let characters = seed_characters(orm).await?;
    let planets = seed_planets(orm).await?;

    let favourites = [
        (Some(characters[0].id), None),
        (None, Some(planets[0].id)),
    ];
    for (id_character, id_planet) in favourites {
        user_favourites::ActiveModel {
            id_user: Set(Some(user.id)),
            id_character: Set(id_character),
            id_planet: Set(id_planet),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    Ok(Some(SeedSummary {
        user_id: user.id,
        characters: characters.len(),
        planets: planets.len(),
    }))
}

/// Returns the user with `email`, creating it with an argon2-hashed password if missing.
pub async fn ensure_user(
    orm: &DatabaseConnection,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<users::Model> {
    // If user already exists, reuse it
    if let Some(existing) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        tracing::debug!(email, "user already exists");
        return Ok(existing);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        nickname: Set(None),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    tracing::info!(email, "created user");
    Ok(user)
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<Vec<characters::Model>> {
    let people = vec![
        ("Luke Skywalker", "19BBY", "male", 172, "fair", "blue"),
        ("Leia Organa", "19BBY", "female", 150, "light", "brown"),
        ("Darth Vader", "41.9BBY", "male", 202, "white", "yellow"),
        ("Yoda", "896BBY", "male", 66, "green", "brown"),
    ];

    let mut seeded = Vec::with_capacity(people.len());
    for (name, birth_year, gender, height, skin_color, eye_color) in people {
        let character = characters::ActiveModel {
            name: Set(Some(name.to_string())),
            birth_year: Set(Some(birth_year.to_string())),
            gender: Set(Some(gender.to_string())),
            height: Set(Some(height)),
            skin_color: Set(Some(skin_color.to_string())),
            eye_color: Set(Some(eye_color.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        seeded.push(character);
    }

    Ok(seeded)
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<Vec<planets::Model>> {
    let catalog = vec![
        ("Tatooine", 10465, 23, 304, "arid"),
        ("Alderaan", 12500, 24, 364, "temperate"),
        ("Hoth", 7200, 23, 549, "frozen"),
        ("Dagobah", 8900, 23, 341, "murky"),
    ];

    let mut seeded = Vec::with_capacity(catalog.len());
    for (name, diameter, rotation_period, orbital_period, climate) in catalog {
        let planet = planets::ActiveModel {
            name: Set(Some(name.to_string())),
            diameter: Set(Some(diameter)),
            rotation_period: Set(Some(rotation_period)),
            orbital_period: Set(Some(orbital_period)),
            climate: Set(Some(climate.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        seeded.push(planet);
    }

    Ok(seeded)
}
