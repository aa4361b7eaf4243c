//! MovieCatalog port - Interface for looking up movies by genre.
//!
//! The catalog itself (pagination, filtering, localization) lives outside
//! the bot. Implementations perform exactly one lookup per call and never
//! touch session state.

use async_trait::async_trait;

use crate::domain::movie::{Genre, Movie, MovieError};

/// Port for fetching a random movie.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one movie of `genre`, chosen uniformly from the catalog's results.
    ///
    /// # Errors
    ///
    /// - `Network` - transport failure or timeout
    /// - `Rejected` - catalog answered with a non-success status
    /// - `Parse` - malformed response body
    /// - `EmptyResult` - catalog returned no movies
    async fn fetch_random_movie(&self, genre: Genre) -> Result<Movie, MovieError>;
}
