use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        favourites::{FavouriteList, FavouriteRequest},
        people::CharacterList,
        planets::PlanetList,
        users::{HelloResponse, UserList},
    },
    error::ErrorBody,
    models::{Character, Planet, User, UserFavourite},
    routes::{favourites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Star Wars API", description = "Characters, planets, users and favourites"),
    paths(
        health::health_check,
        sitemap::sitemap,
        users::hello,
        users::list_users,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        favourites::list_favourites,
        favourites::add_favourite_planet,
        favourites::add_favourite_person,
        favourites::remove_favourite_planet,
        favourites::remove_favourite_person
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            UserFavourite,
            UserList,
            CharacterList,
            PlanetList,
            FavouriteList,
            FavouriteRequest,
            HelloResponse,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check and sitemap"),
        (name = "Users", description = "User endpoints"),
        (name = "People", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Favourites", description = "Favourite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::sitemap::ENDPOINTS;

    #[test]
    fn sitemap_paths_match_documented_paths() {
        let doc = ApiDoc::openapi();

        for (method, path) in ENDPOINTS.iter().filter(|(_, path)| *path != "/docs") {
            let item = doc
                .paths
                .paths
                .get(*path)
                .unwrap_or_else(|| panic!("{path} missing from the OpenAPI document"));
            let operation = match *method {
                "GET" => item.get.as_ref(),
                "POST" => item.post.as_ref(),
                "DELETE" => item.delete.as_ref(),
                other => panic!("unexpected method {other}"),
            };
            assert!(operation.is_some(), "{method} {path} is not documented");
        }
    }

    #[test]
    fn favourite_planet_post_and_delete_share_one_path() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/favourite/planet/{id}")
            .expect("shared favourite planet path");

        assert!(item.post.is_some());
        assert!(item.delete.is_some());
        assert!(!doc.paths.paths.contains_key("/favourite/planet/{id_planet}"));
    }
}
