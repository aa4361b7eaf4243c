//! Movie genres the bot can pick from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::MovieError;

/// Genre filter for a random movie request.
///
/// `All` has no genre filter and draws from the popular list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    All,
    Romance,
    Comedy,
    Horror,
}

impl Genre {
    /// TMDB genre id used for `with_genres`, or `None` for the popular list.
    pub fn tmdb_id(&self) -> Option<u32> {
        match self {
            Genre::All => None,
            Genre::Romance => Some(10749),
            Genre::Comedy => Some(35),
            Genre::Horror => Some(27),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::All => "all",
            Genre::Romance => "romance",
            Genre::Comedy => "comedy",
            Genre::Horror => "horror",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Genre::All),
            "romance" => Ok(Genre::Romance),
            "comedy" => Ok(Genre::Comedy),
            "horror" => Ok(Genre::Horror),
            other => Err(MovieError::UnrecognizedGenre(other.to_string())),
        }
    }
}
