//! Loads the JSON files shipped in `data/` and checks the catalog invariants
//! against real records.

use data_loader::{Catalog, DataLoadError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn load() -> Catalog {
    let dir = data_dir();
    Catalog::load_from_files(&dir.join("genres.json"), &dir.join("movies-2020s.json"))
        .expect("bundled dataset should load")
}

#[test]
fn test_bundled_counts() {
    let catalog = load();
    let (genres, movies, _) = catalog.counts();

    assert_eq!(genres, 22);
    assert_eq!(movies, 15);
    assert_eq!(catalog.genre_index().len(), 22);
    assert!(catalog.report().is_clean());
}

#[test]
fn test_bundled_buckets() {
    let catalog = load();

    assert_eq!(catalog.movies_in_genre("Comedy").len(), 5);
    assert_eq!(catalog.movies_in_genre("Drama").len(), 7);
    assert!(catalog.movies_in_genre("Western").is_empty());
    assert_eq!(
        catalog.movies_in_genre("War"),
        ["All_Quiet_on_the_Western_Front_(2022_film)".to_string()]
    );
}

#[test]
fn test_bundled_has_no_dangling_references() {
    let catalog = load();

    for (genre, bucket) in catalog.genre_index() {
        for id in bucket {
            let movie = catalog
                .get_movie(id)
                .unwrap_or_else(|| panic!("{} in {} is dangling", id, genre));
            assert!(movie.genres.contains(genre));
        }
    }

    for (id, movie) in catalog.movie_index() {
        for genre in &movie.genres {
            assert!(catalog.movies_in_genre(genre).contains(id));
        }
    }
}

#[test]
fn test_bundled_record_fields() {
    let catalog = load();

    let tenet = catalog.get_movie("Tenet_(film)").unwrap();
    assert_eq!(tenet.title, "Tenet");
    assert_eq!(tenet.year, 2020);
    assert!(tenet.poster_ref().is_some());
    assert!(tenet.extract.is_some());

    // present but blank poster counts as broken
    let palm_springs = catalog.get_movie("Palm_Springs_(2020_film)").unwrap();
    assert!(palm_springs.poster.is_some());
    assert!(palm_springs.poster_ref().is_none());
}

#[test]
fn test_genre_order_is_preserved() {
    let catalog = load();
    let genres = catalog.genres();

    assert_eq!(genres.first().map(String::as_str), Some("Action"));
    assert_eq!(genres.last().map(String::as_str), Some("Western"));

    let unique: HashSet<_> = genres.iter().collect();
    assert_eq!(unique.len(), genres.len());
}

#[test]
fn test_genres_file_is_not_a_movie_list() {
    let dir = data_dir();
    let result = Catalog::load_from_files(&dir.join("genres.json"), &dir.join("genres.json"));

    assert!(matches!(result, Err(DataLoadError::Json { .. })));
}
