use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Genre, Movie};
use selector::{MoviePicker, SelectError};
use std::path::PathBuf;
use std::sync::Arc;

/// Genre rows shown by `genres`: 8, 10, 10, 8, then rows of 10
const ROW_LENGTHS: [usize; 4] = [8, 10, 10, 8];
const OVERFLOW_ROW_LENGTH: usize = 10;

/// Cast members shown on a card
const CAST_ON_CARD: usize = 5;

/// Movie Night Helper - pick a random movie to watch
#[derive(Parser)]
#[command(name = "movie-night")]
#[command(about = "Pick a random movie, optionally from one genre", long_about = None)]
struct Cli {
    /// Directory holding the bundled dataset
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Genre list file, relative to the data directory
    #[arg(long, default_value = "genres.json")]
    genres_file: PathBuf,

    /// Movie list file, relative to the data directory
    #[arg(long, default_value = "movies-2020s.json")]
    movies_file: PathBuf,

    /// Seed the random source so picks are reproducible
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random movie
    Pick {
        /// Only pick from this genre (default: a random genre)
        #[arg(short, long)]
        genre: Option<String>,

        /// How many movies to pick (at least 1)
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        count: usize,
    },

    /// List the genres you can pick from
    Genres,

    /// Show one movie by its identifier
    Show {
        /// Movie identifier (Wikipedia page slug)
        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing (default level: warn, on stderr)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let genres_path = cli.data_dir.join(&cli.genres_file);
    let movies_path = cli.data_dir.join(&cli.movies_file);
    let catalog = Arc::new(
        Catalog::load_from_files(&genres_path, &movies_path)
            .context("Failed to load movie dataset")?,
    );

    let picker = match cli.seed {
        Some(seed) => MoviePicker::seeded(catalog, seed),
        None => MoviePicker::from_os_rng(catalog),
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pick { genre, count } => handle_pick(picker, genre, count)?,
        Commands::Genres => handle_genres(picker.catalog())?,
        Commands::Show { id } => handle_show(picker.catalog(), &id)?,
    }

    Ok(())
}

/// Handle the 'pick' command
fn handle_pick(mut picker: MoviePicker, genre: Option<String>, count: usize) -> Result<()> {
    let movies = match picker.pick_many(genre.as_deref(), count) {
        Ok(movies) => movies,
        Err(SelectError::NoMoviesForGenre { genre }) => {
            println!(
                "{}",
                format!("No movies available for genre {}", genre).yellow()
            );
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to pick a movie")),
    };

    for (i, movie) in movies.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_movie_card(movie);
    }

    println!(
        "\n{} {}",
        "Not interested? Pick another!".bold(),
        "(movie-night pick --genre <GENRE>)".dimmed()
    );
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) -> Result<()> {
    println!("{}", "Genres:".bold().blue());
    for row in genre_rows(catalog.genres()) {
        let labels: Vec<String> = row
            .iter()
            .map(|g| {
                let size = catalog.movies_in_genre(g).len();
                if size == 0 {
                    format!("{} ({})", g, size).dimmed().to_string()
                } else {
                    format!("{} ({})", g, size)
                }
            })
            .collect();
        println!("  {}", labels.join("  "));
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str) -> Result<()> {
    let movie = catalog
        .get_movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;
    print_movie_card(movie);
    Ok(())
}

/// Split the genre list into display rows
fn genre_rows(genres: &[Genre]) -> Vec<&[Genre]> {
    let mut rows = Vec::new();
    let mut rest = genres;
    let mut lengths = ROW_LENGTHS
        .iter()
        .copied()
        .chain(std::iter::repeat(OVERFLOW_ROW_LENGTH));

    while !rest.is_empty() {
        let len = lengths.next().unwrap_or(OVERFLOW_ROW_LENGTH).min(rest.len());
        let (row, tail) = rest.split_at(len);
        rows.push(row);
        rest = tail;
    }
    rows
}

/// Format and print one movie as a card
fn print_movie_card(movie: &Movie) {
    println!(
        "{}",
        format!("{} ({})", movie.title, movie.year).bold().blue()
    );

    if !movie.genres.is_empty() {
        println!("{}Genres: {}", "• ".green(), movie.genres.join(", "));
    }

    if !movie.cast.is_empty() {
        let mut cast = movie
            .cast
            .iter()
            .take(CAST_ON_CARD)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if movie.cast.len() > CAST_ON_CARD {
            cast.push_str(", ...");
        }
        println!("{}Cast: {}", "• ".green(), cast);
    }

    if let Some(extract) = &movie.extract {
        println!("{}{}", "• ".green(), extract.italic());
    }

    match movie.poster_ref() {
        Some(poster) => println!("{}Poster: {}", "• ".cyan(), poster),
        None => println!("{}Poster: {}", "• ".cyan(), "not found".yellow()),
    }
    println!("{}More: {}", "• ".cyan(), movie.wiki_url().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<Genre> {
        (0..n).map(|i| format!("G{}", i)).collect()
    }

    #[test]
    fn test_genre_rows_follow_button_layout() {
        let genres = names(36);
        let lengths: Vec<usize> = genre_rows(&genres).iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![8, 10, 10, 8]);
    }

    #[test]
    fn test_genre_rows_overflow() {
        let genres = names(50);
        let lengths: Vec<usize> = genre_rows(&genres).iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![8, 10, 10, 8, 10, 4]);
    }

    #[test]
    fn test_genre_rows_short_list() {
        let genres = names(3);
        let rows = genre_rows(&genres);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], genres.as_slice());
        assert!(genre_rows(&[]).is_empty());
    }

    #[test]
    fn test_cli_parses_pick() {
        let cli = Cli::try_parse_from([
            "movie-night",
            "--seed",
            "7",
            "pick",
            "--genre",
            "Comedy",
            "--count",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        match cli.command {
            Commands::Pick { genre, count } => {
                assert_eq!(genre.as_deref(), Some("Comedy"));
                assert_eq!(count, 3);
            }
            _ => panic!("expected pick"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        let result = Cli::try_parse_from(["movie-night", "pick", "--genre", "Western", "--count", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_negative_count() {
        assert!(Cli::try_parse_from(["movie-night", "pick", "--count", "-3"]).is_err());
    }

    #[test]
    fn test_cli_pick_defaults_to_any_genre() {
        let cli = Cli::try_parse_from(["movie-night", "pick"]).unwrap();
        match cli.command {
            Commands::Pick { genre, count } => {
                assert!(genre.is_none());
                assert_eq!(count, 1);
            }
            _ => panic!("expected pick"),
        }
    }
}
