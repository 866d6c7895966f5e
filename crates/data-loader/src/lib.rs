//! # Data Loader Crate
//!
//! This crate loads the bundled movie dataset and indexes it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog, GenreIndex, MovieIndex)
//! - **parser**: Read the genre list and movie list from JSON
//! - **index**: Build the genre buckets and the id lookup table
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(
//!     Path::new("data/genres.json"),
//!     Path::new("data/movies-2020s.json"),
//! )?;
//!
//! for id in catalog.movies_in_genre("Comedy") {
//!     let movie = catalog.get_movie(id).unwrap();
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```
//!
//! A `Catalog` is built once and is read-only afterwards. Wrap it in an
//! `Arc` to share it with the selector.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::build_indexes;
pub use types::{
    // Type aliases
    Genre,
    MovieId,
    GenreIndex,
    MovieIndex,
    // Core types
    Movie,
    Catalog,
    BuildReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn comedy(id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: "Palm Springs".to_string(),
            year: 2020,
            genres: vec!["Comedy".to_string()],
            poster: None,
            cast: vec!["Andy Samberg".to_string()],
            extract: None,
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::build(vec!["Comedy".to_string()], vec![]).unwrap();
        let (genres, movies, entries) = catalog.counts();

        assert_eq!(genres, 1);
        assert_eq!(movies, 0);
        assert_eq!(entries, 0);
        assert!(catalog.report().is_clean());
    }

    #[test]
    fn test_get_movie() {
        let catalog = Catalog::build(
            vec!["Comedy".to_string()],
            vec![comedy("Palm_Springs_(2020_film)")],
        )
        .unwrap();

        let retrieved = catalog.get_movie("Palm_Springs_(2020_film)").unwrap();
        assert_eq!(retrieved.year, 2020);
        assert_eq!(retrieved.cast.len(), 1);
        assert!(catalog.contains_genre("Comedy"));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::build(vec!["Comedy".to_string()], vec![]).unwrap();

        // Querying non-existent data should return None or empty slices
        assert!(catalog.get_movie("Nope_(film)").is_none());
        assert!(catalog.movies_in_genre("Western").is_empty());
        assert!(!catalog.contains_genre("Western"));
    }
}
