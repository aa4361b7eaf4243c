//! TMDB response payloads.

use serde::Deserialize;

use crate::domain::movie::Movie;

/// One page of `/discover/movie` or `/movie/popular` results.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    /// Missing `results` is treated as an empty page.
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub original_title: Option<String>,

    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,
}

impl From<TmdbMovie> for Movie {
    fn from(movie: TmdbMovie) -> Self {
        Movie {
            title: movie.original_title.unwrap_or_default(),
            poster_path: movie.poster_path.filter(|p| !p.is_empty()),
            overview: movie.overview.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_and_converts_to_movies() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 1, "original_title": "Spirited Away", "poster_path": "/a.jpg", "overview": "A girl..."},
                {"id": 2, "original_title": "No Poster", "poster_path": null, "overview": null}
            ],
            "total_pages": 500
        }"#;

        let page: TmdbPage = serde_json::from_str(json).unwrap();
        let movies: Vec<Movie> = page.results.into_iter().map(Movie::from).collect();

        assert_eq!(movies.len(), 2);
        assert_eq!(
            movies[0],
            Movie::new("Spirited Away", "A girl...").with_poster_path("/a.jpg")
        );
        assert_eq!(movies[1], Movie::new("No Poster", ""));
    }

    #[test]
    fn missing_results_is_empty_page() {
        let page: TmdbPage =
            serde_json::from_str(r#"{"status_code": 7, "status_message": "Invalid API key"}"#)
                .unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn null_title_does_not_fail_the_page() {
        let json = r#"{
            "results": [
                {"original_title": null, "poster_path": "/n.jpg", "overview": "o"},
                {"original_title": "Kept", "poster_path": null, "overview": "k"}
            ]
        }"#;

        let page: TmdbPage = serde_json::from_str(json).unwrap();
        let movies: Vec<Movie> = page.results.into_iter().map(Movie::from).collect();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "");
        assert_eq!(movies[1].title, "Kept");
    }
}
