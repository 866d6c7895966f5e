//! # Selector Crate
//!
//! Picks a movie uniformly at random from a built `Catalog`, optionally
//! restricted to one genre.
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use selector::MoviePicker;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_files(genres_path, movies_path)?);
//! let mut picker = MoviePicker::from_os_rng(catalog);
//!
//! // first load: any genre
//! let movie = picker.pick(None)?;
//!
//! // user clicked a genre
//! match picker.pick(Some("Horror")) {
//!     Ok(movie) => println!("{} ({})", movie.title, movie.year),
//!     Err(SelectError::NoMoviesForGenre { genre }) => println!("Nothing in {}", genre),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! Pass a seeded generator (`MoviePicker::seeded`, or `pick_movie` with your
//! own `Rng`) for reproducible picks.

pub mod error;
pub mod pick;
pub mod picker;

pub use error::{Result, SelectError};
pub use pick::pick_movie;
pub use picker::MoviePicker;
