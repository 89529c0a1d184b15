use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000001_create_catalog_tables::{Character, Planet, User};

static FK_USER_FAVOURITE_USER: &str = "fk_user_favourite_id_user";
static FK_USER_FAVOURITE_CHARACTER: &str = "fk_user_favourite_id_character";
static FK_USER_FAVOURITE_PLANET: &str = "fk_user_favourite_id_planet";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavourite::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFavourite::Id))
                    .col(integer_null(UserFavourite::IdUser))
                    .col(integer_null(UserFavourite::IdCharacter))
                    .col(integer_null(UserFavourite::IdPlanet))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVOURITE_USER)
                            .from(UserFavourite::Table, UserFavourite::IdUser)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVOURITE_CHARACTER)
                            .from(UserFavourite::Table, UserFavourite::IdCharacter)
                            .to(Character::Table, Character::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVOURITE_PLANET)
                            .from(UserFavourite::Table, UserFavourite::IdPlanet)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavourite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserFavourite {
    Table,
    Id,
    IdUser,
    IdCharacter,
    IdPlanet,
}
