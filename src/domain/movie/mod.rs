//! Movie domain module.
//!
//! - `movie` - Movie value object and uniform random selection
//! - `genre` - Supported genre filters
//! - `errors` - Catalog lookup failures

mod errors;
mod genre;
mod movie;

pub use errors::MovieError;
pub use genre::Genre;
pub use movie::{choose_random, Movie};
