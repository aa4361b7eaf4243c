//! Movie value object and random selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::MovieError;

/// A movie as presented to the user.
///
/// Immutable once fetched; replaced wholesale by the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster_path: None,
            overview: overview.into(),
        }
    }

    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Full poster URL under the given image base, joined with a single slash.
    ///
    /// Returns `None` when the catalog had no poster for this movie.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}", image_base_url.trim_end_matches('/'), path))
    }

    pub fn has_overview(&self) -> bool {
        !self.overview.trim().is_empty()
    }
}

/// Picks one movie uniformly at random.
///
/// # Errors
///
/// Returns `MovieError::EmptyResult` if `movies` is empty.
pub fn choose_random<R: Rng + ?Sized>(
    mut movies: Vec<Movie>,
    rng: &mut R,
) -> Result<Movie, MovieError> {
    if movies.is_empty() {
        return Err(MovieError::EmptyResult);
    }
    let index = rng.gen_range(0..movies.len());
    Ok(movies.swap_remove(index))
}
