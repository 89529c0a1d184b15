pub mod favourites;
pub mod people;
pub mod planets;
pub mod users;
