//! Example: load the bundled dataset and print what the catalog holds
//!
//! Run with: cargo run --package data-loader --example load_catalog

use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let data_dir = Path::new("data");

    let start = Instant::now();
    let catalog = Catalog::load_from_files(
        &data_dir.join("genres.json"),
        &data_dir.join("movies-2020s.json"),
    )?;
    let elapsed = start.elapsed();

    let (genres, movies, entries) = catalog.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Genres: {}", genres);
    println!("Movies: {}", movies);
    println!("Bucket entries: {}", entries);

    println!("\nPer genre:");
    for genre in catalog.genres() {
        println!("  {:<16} {}", genre, catalog.movies_in_genre(genre).len());
    }

    if !catalog.report().is_clean() {
        println!("\nDuplicate ids: {:?}", catalog.report().duplicate_ids);
    }

    Ok(())
}
