pub mod tmdb;

pub use tmdb::{fetch_movies, fetch_movies_from_str};
