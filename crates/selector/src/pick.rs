//! Random movie selection over a built catalog.
//!
//! ## Algorithm
//! 1. If no genre was requested (or it is blank), draw one uniformly from the
//!    catalog's ordered genre list
//! 2. Draw an id uniformly from that genre's bucket
//! 3. Resolve the id through the movie index
//!
//! The random source is a parameter, so a seeded generator gives the same
//! movie for the same seed and genre.

use crate::error::{Result, SelectError};
use data_loader::{Catalog, Movie, MovieId};
use rand::Rng;
use tracing::{debug, instrument};

/// The genre a caller asked for, or `None` if it is absent or blank
pub(crate) fn requested_genre(genre: Option<&str>) -> Option<&str> {
    genre.map(str::trim).filter(|g| !g.is_empty())
}

/// Bucket for a named genre, provided the genre is known and has movies
pub(crate) fn pickable_bucket<'a>(catalog: &'a Catalog, genre: &str) -> Result<&'a [MovieId]> {
    if !catalog.contains_genre(genre) {
        return Err(SelectError::UnknownGenre {
            genre: genre.to_string(),
        });
    }
    let bucket = catalog.movies_in_genre(genre);
    if bucket.is_empty() {
        return Err(SelectError::NoMoviesForGenre {
            genre: genre.to_string(),
        });
    }
    Ok(bucket)
}

/// Pick one movie, optionally restricted to a genre.
///
/// # Errors
/// * `UnknownGenre` - `genre` names something outside the genre list
/// * `NoMoviesForGenre` - the resolved genre's bucket is empty. This also
///   applies when the genre was drawn at random; there is no retry.
#[instrument(level = "debug", skip(catalog, rng))]
pub fn pick_movie<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    genre: Option<&str>,
    rng: &mut R,
) -> Result<&'a Movie> {
    let genre = match requested_genre(genre) {
        Some(requested) => requested,
        None => {
            // Catalog::build rejects an empty genre list, so the range is never empty
            let genres = catalog.genres();
            let drawn = genres[rng.random_range(0..genres.len())].as_str();
            debug!(genre = drawn, "no genre requested, drew one at random");
            drawn
        }
    };

    let bucket = pickable_bucket(catalog, genre)?;

    let id = &bucket[rng.random_range(0..bucket.len())];
    let movie = catalog
        .get_movie(id)
        .ok_or_else(|| SelectError::DanglingReference { id: id.clone() })?;

    debug!(genre, id = %movie.id, "picked movie");
    Ok(movie)
}
