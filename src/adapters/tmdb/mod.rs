//! TMDB adapter - `MovieCatalog` over TMDB API v3.

mod tmdb_catalog;
mod types;

pub use tmdb_catalog::{TmdbConfig, TmdbMovieCatalog};
