//! Catalog building and indexing logic.
//!
//! Builds the two lookup tables from the parsed dataset:
//! - genre_index: genre -> ordered bucket of movie identifiers
//! - movie_index: movie identifier -> movie record
//!
//! Every genre in the genre list gets a bucket, even if no movie uses it.
//! Buckets keep dataset order. On duplicate identifiers the later record
//! wins and the earlier record's bucket entries are dropped, so a bucket
//! only ever lists movies whose kept record carries that genre.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Build the genre and movie indexes from a genre list and a movie list.
///
/// Fails with `EmptyGenreList` if `genres` is empty, and with
/// `UnknownGenreTag` if any movie is tagged outside `genres`. An empty
/// `movies` list is valid and yields empty buckets.
pub fn build_indexes(genres: &[Genre], movies: Vec<Movie>) -> Result<(GenreIndex, MovieIndex)> {
    let (genre_index, movie_index, _report) = index_movies(genres, movies)?;
    Ok((genre_index, movie_index))
}

fn index_movies(
    genres: &[Genre],
    movies: Vec<Movie>,
) -> Result<(GenreIndex, MovieIndex, BuildReport)> {
    if genres.is_empty() {
        return Err(DataLoadError::EmptyGenreList);
    }

    let mut genre_index: GenreIndex = genres.iter().map(|g| (g.clone(), Vec::new())).collect();

    // all tags are checked before any bucket is filled
    for movie in &movies {
        if let Some(tag) = movie.genres.iter().find(|g| !genre_index.contains_key(*g)) {
            return Err(DataLoadError::UnknownGenreTag {
                movie: movie.id.clone(),
                genre: tag.clone(),
            });
        }
    }

    let mut movie_index = MovieIndex::with_capacity(movies.len());
    let mut report = BuildReport::default();

    for movie in movies {
        if let Some(stale) = movie_index.get(&movie.id) {
            warn!(id = %movie.id, "duplicate movie identifier, keeping the later record");
            for tag in &stale.genres {
                if let Some(bucket) = genre_index.get_mut(tag) {
                    bucket.retain(|id| id != &movie.id);
                }
            }
            report.duplicate_ids.push(movie.id.clone());
        }

        for (i, tag) in movie.genres.iter().enumerate() {
            // a tag repeated within one record only counts once
            if movie.genres[..i].contains(tag) {
                continue;
            }
            if let Some(bucket) = genre_index.get_mut(tag) {
                bucket.push(movie.id.clone());
            }
        }

        movie_index.insert(movie.id.clone(), movie);
    }

    Ok((genre_index, movie_index, report))
}

impl Catalog {
    /// Build a catalog from an in-memory genre list and movie list.
    ///
    /// Repeated names in `genres` collapse to their first occurrence.
    pub fn build(genres: Vec<Genre>, movies: Vec<Movie>) -> Result<Self> {
        let mut ordered: Vec<Genre> = Vec::with_capacity(genres.len());
        for genre in genres {
            if !ordered.contains(&genre) {
                ordered.push(genre);
            }
        }

        let (genre_index, movie_index, report) = index_movies(&ordered, movies)?;

        debug!(
            genres = ordered.len(),
            movies = movie_index.len(),
            duplicates = report.duplicate_ids.len(),
            "catalog built"
        );

        Ok(Self {
            genres: ordered,
            genre_index,
            movie_index,
            report,
        })
    }

    /// Load the genre list and movie list from JSON files and build a catalog
    ///
    /// This is the main entry point for the application.
    pub fn load_from_files(genres_path: &Path, movies_path: &Path) -> Result<Self> {
        info!(
            genres = %genres_path.display(),
            movies = %movies_path.display(),
            "loading movie dataset"
        );

        let genres = parser::parse_genres(genres_path)?;
        let movies = parser::parse_movies(movies_path)?;

        let catalog = Self::build(genres, movies)?;

        let (genres, movies, entries) = catalog.counts();
        let empty = catalog
            .genres()
            .iter()
            .filter(|g| catalog.movies_in_genre(g).is_empty())
            .count();
        info!(genres, movies, entries, empty_genres = empty, "catalog ready");

        Ok(catalog)
    }
}
