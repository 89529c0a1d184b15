use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favourites::Entity")]
    UserFavourites,
}

impl Related<super::user_favourites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavourites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
