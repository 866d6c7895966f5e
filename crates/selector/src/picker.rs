//! The query object handed to the presentation layer.

use crate::error::Result;
use crate::pick::{pick_movie, pickable_bucket, requested_genre};
use data_loader::{Catalog, Movie, MovieId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Owns a shared catalog and a random source, and answers `pick(genre?)`.
#[derive(Debug)]
pub struct MoviePicker<R = StdRng> {
    /// Shared reference to the built catalog
    catalog: Arc<Catalog>,
    rng: R,
}

impl<R: Rng> MoviePicker<R> {
    /// Create a picker with an explicit random source
    pub fn new(catalog: Arc<Catalog>, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Pick one movie. `None` or a blank genre means "any genre".
    ///
    /// The movie is borrowed from the catalog this picker owns, so it lives
    /// only until the next pick. Use `pick_id` to hold on to a result, or
    /// clone the catalog `Arc` first and look the movie up there.
    pub fn pick(&mut self, genre: Option<&str>) -> Result<&Movie> {
        pick_movie(&self.catalog, genre, &mut self.rng)
    }

    /// Pick one movie and return its identifier
    pub fn pick_id(&mut self, genre: Option<&str>) -> Result<MovieId> {
        self.pick(genre).map(|movie| movie.id.clone())
    }

    /// Pick `count` movies independently (with replacement).
    ///
    /// A named genre is checked before any draw, so an unknown or empty
    /// genre is reported even when `count` is 0. Otherwise stops at the
    /// first error.
    pub fn pick_many(&mut self, genre: Option<&str>, count: usize) -> Result<Vec<&Movie>> {
        let reserve = match requested_genre(genre) {
            Some(name) => pickable_bucket(&self.catalog, name)?.len(),
            None => self.catalog.movie_index().len(),
        };

        let mut picks = Vec::with_capacity(count.min(reserve));
        for _ in 0..count {
            picks.push(pick_movie(&self.catalog, genre, &mut self.rng)?);
        }
        Ok(picks)
    }
}

impl MoviePicker<StdRng> {
    /// Reproducible picker: same seed, same sequence of picks
    pub fn seeded(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system
    pub fn from_os_rng(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, StdRng::from_os_rng())
    }
}
