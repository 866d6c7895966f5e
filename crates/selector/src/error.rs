//! Errors returned by a pick.
//!
//! All of these are per-call and recoverable: the caller can report the
//! problem and ask again with a different genre.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The requested genre is not in the catalog's genre list
    #[error("Unknown genre: {genre}")]
    UnknownGenre { genre: String },

    /// The resolved genre exists but has no movies in its bucket
    #[error("No movies available for genre {genre}")]
    NoMoviesForGenre { genre: String },

    /// A bucket named an id the movie index does not hold
    #[error("Movie {id} is listed in a genre but missing from the catalog")]
    DanglingReference { id: String },
}

pub type Result<T> = std::result::Result<T, SelectError>;
