//! Core domain types for the movie dataset.
//!
//! This module defines the record shape read from the bundled JSON files and
//! the immutable `Catalog` that the selector queries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// A genre name, e.g. "Comedy". The valid set is supplied by the genre list.
pub type Genre = String;

/// Unique identifier for a movie. This is the Wikipedia page slug, so it is
/// safe to use as a URL path segment.
pub type MovieId = String;

/// Genre name -> ordered bucket of movie identifiers
pub type GenreIndex = HashMap<Genre, Vec<MovieId>>;

/// Movie identifier -> full movie record
pub type MovieIndex = HashMap<MovieId, Movie>;

const WIKI_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the dataset
///
/// Field names follow the wikipedia-movie-data JSON layout; keys we do not
/// model (thumbnail sizes and so on) are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "href")]
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Poster image reference. May be absent, or present but unusable.
    #[serde(rename = "thumbnail", default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    /// Short plot summary
    #[serde(default)]
    pub extract: Option<String>,
}

impl Movie {
    /// Poster reference, or `None` if it is missing or blank
    pub fn poster_ref(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// External reference link for this movie
    pub fn wiki_url(&self) -> String {
        format!("{}{}", WIKI_BASE_URL, self.id)
    }
}

// =============================================================================
// Catalog - the immutable context object
// =============================================================================

/// Data-quality signals collected while building a catalog.
///
/// None of these are errors; they are logged and kept here so a caller can
/// inspect them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Identifiers that appeared more than once, in the order the repeat
    /// was seen. The last occurrence of each is the one kept.
    pub duplicate_ids: Vec<MovieId>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
    }
}

/// Holds the genre list and both indexes.
///
/// Built once by `Catalog::build` (see `index.rs`) and never mutated after;
/// share it with `Arc<Catalog>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Genre list in source order. The random genre draw indexes into this.
    pub(crate) genres: Vec<Genre>,
    pub(crate) genre_index: GenreIndex,
    pub(crate) movie_index: MovieIndex,
    pub(crate) report: BuildReport,
}

impl Catalog {
    /// Genres in the order they were supplied
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn contains_genre(&self, genre: &str) -> bool {
        self.genre_index.contains_key(genre)
    }

    /// Movie identifiers in a genre's bucket
    ///
    /// Returns an empty slice if the genre is unknown.
    pub fn movies_in_genre(&self, genre: &str) -> &[MovieId] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get a movie by identifier
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.movie_index.get(id)
    }

    pub fn genre_index(&self) -> &GenreIndex {
        &self.genre_index
    }

    pub fn movie_index(&self) -> &MovieIndex {
        &self.movie_index
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// (genres, distinct movies, total bucket entries)
    pub fn counts(&self) -> (usize, usize, usize) {
        let entries = self.genre_index.values().map(|v| v.len()).sum();
        (self.genres.len(), self.movie_index.len(), entries)
    }
}
