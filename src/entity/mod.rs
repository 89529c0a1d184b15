pub mod characters;
pub mod planets;
pub mod user_favourites;
pub mod users;

pub use characters::Entity as Characters;
pub use planets::Entity as Planets;
pub use user_favourites::Entity as UserFavourites;
pub use users::Entity as Users;
