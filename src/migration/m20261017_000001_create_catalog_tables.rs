use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Name, 120))
                    .col(string_len(User::Email, 120))
                    .col(string_len(User::Password, 80))
                    .col(string_len_null(User::Nickname, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_null(Character::Name, 250))
                    .col(string_len_null(Character::BirthYear, 250))
                    .col(string_len_null(Character::Gender, 250))
                    .col(integer_null(Character::Height))
                    .col(string_len_null(Character::SkinColor, 250))
                    .col(string_len_null(Character::EyeColor, 250))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_null(Planet::Name, 250))
                    .col(integer_null(Planet::Diameter))
                    .col(integer_null(Planet::RotationPeriod))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(string_len_null(Planet::Climate, 250))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Password,
    Nickname,
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    SkinColor,
    EyeColor,
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Climate,
}
