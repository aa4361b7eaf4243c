//! TMDB movie catalog adapter.
//!
//! Implements the `MovieCatalog` port against TMDB API v3.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TmdbConfig::new(api_key)
//!     .with_language("th-TH")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let catalog = TmdbMovieCatalog::new(config)?;
//! ```

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::movie::{choose_random, Genre, Movie, MovieError};
use crate::ports::MovieCatalog;

use super::types::TmdbPage;

/// Configuration for the TMDB adapter.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.themoviedb.org/3).
    pub base_url: String,
    /// Response locale.
    pub language: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "th-TH".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// TMDB-backed movie catalog.
///
/// Holds one random generator for the adapter's lifetime; it is seeded once
/// rather than per call.
pub struct TmdbMovieCatalog {
    config: TmdbConfig,
    client: Client,
    rng: Mutex<StdRng>,
}

impl TmdbMovieCatalog {
    /// Creates a catalog with an entropy-seeded generator.
    pub fn new(config: TmdbConfig) -> Result<Self, reqwest::Error> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a catalog with a fixed seed, for reproducible picks.
    pub fn with_seed(config: TmdbConfig, seed: u64) -> Result<Self, reqwest::Error> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: TmdbConfig, rng: StdRng) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            client,
            rng: Mutex::new(rng),
        })
    }

    /// Endpoint and query for a genre; `All` uses the popular list.
    fn request_for(&self, genre: Genre) -> (String, Vec<(&'static str, String)>) {
        let base = self.config.base_url.trim_end_matches('/');
        let mut query = vec![("api_key", self.config.api_key().to_string())];

        let url = match genre.tmdb_id() {
            Some(id) => {
                query.push(("with_genres", id.to_string()));
                format!("{}/discover/movie", base)
            }
            None => format!("{}/movie/popular", base),
        };
        query.push(("language", self.config.language.clone()));

        (url, query)
    }

    async fn fetch_page(&self, genre: Genre) -> Result<TmdbPage, MovieError> {
        let (url, query) = self.request_for(genre);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MovieError::network(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    MovieError::network(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%genre, status = status.as_u16(), "TMDB request rejected");
            return Err(MovieError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MovieError::network(e.without_url().to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%genre, error = %e, "Failed to parse TMDB response");
            MovieError::parse(e.to_string())
        })
    }

    fn pick(&self, movies: Vec<Movie>) -> Result<Movie, MovieError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        choose_random(movies, &mut *rng)
    }
}

#[async_trait]
impl MovieCatalog for TmdbMovieCatalog {
    async fn fetch_random_movie(&self, genre: Genre) -> Result<Movie, MovieError> {
        let page = self.fetch_page(genre).await?;
        tracing::debug!(%genre, results = page.results.len(), "Fetched TMDB page");

        let movies = page.results.into_iter().map(Movie::from).collect();
        self.pick(movies)
    }
}
