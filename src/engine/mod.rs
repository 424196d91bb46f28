//! Sparse Game of Life on a bounded grid.
//!
//! Only live cells and their neighbourhoods are visited each generation, so the
//! cost of a tick follows the population rather than the grid area.

mod grid;
mod seed;
mod spatial;
mod update;

#[cfg(test)]
mod tests;

pub use grid::{Cell, GridState};
pub use spatial::SpatialIndex;

use crate::{Config, ConfigError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use update::ActiveRegion;

/// Summary of the most recent generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub live_cells: usize,
    pub generation: u64,
    /// Wall time of the last successful tick.
    pub last_tick: Duration,
}

impl Stats {
    /// One-line description suitable for a window title.
    pub fn status_line(&self, paused: bool) -> String {
        let mut line = format!("Conway's Game of Life - Generation: {}", self.generation);
        if paused {
            line.push_str(" [PAUSED]");
        }
        line
    }
}

/// Owns all simulation state: bitmaps, live cells, spatial index and counters.
pub struct LifeEngine {
    grid: GridState,
    index: SpatialIndex,
    region: ActiveRegion,
    spare: Vec<Cell>, // Allocation of the previous live list, reused as the next one.
    rng: ChaCha8Rng,
    generation: u64,
    last_tick: Duration,
    paused: bool,
    tick_rate: u32,
}

impl LifeEngine {
    /// Creates an empty engine. Fails if the grid cannot be split evenly into
    /// `config.buckets` chunks per axis.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let (w, h) = (config.width, config.height);
        let rng = if let Some(x) = config.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Ok(Self {
            grid: GridState::blank(w, h),
            index: SpatialIndex::new(w, h, config.buckets),
            region: ActiveRegion::new(w * h),
            spare: vec![],
            rng,
            generation: 0,
            last_tick: Duration::ZERO,
            paused: false,
            tick_rate: Config::clamp_tick_rate(config.tick_rate),
        })
    }

    /// Creates an engine whose first generation is exactly `cells`.
    pub fn from_cells<I>(config: &Config, cells: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut engine = Self::new(config)?;
        engine.initialize_cells(cells);
        Ok(engine)
    }

    /// Reseeds the grid from the engine's own random stream.
    pub fn initialize(&mut self, density: f64) {
        self.grid.clear();
        seed::randomize(&mut self.grid, &mut self.rng, seed::clamp_density(density));
        self.finish_seeding();
    }

    /// Reseeds the grid from a caller-supplied random stream.
    pub fn initialize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        self.grid.clear();
        seed::randomize(&mut self.grid, rng, seed::clamp_density(density));
        self.finish_seeding();
    }

    /// Replaces all state with the given live coordinates.
    pub fn initialize_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.grid.clear();
        seed::place(&mut self.grid, cells);
        self.finish_seeding();
    }

    fn finish_seeding(&mut self) {
        self.index.rebuild(self.grid.cells());
        self.generation = 0;
        self.last_tick = Duration::ZERO;
    }

    /// Advances one generation. Returns `false`, touching nothing, when paused.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        let timer = Instant::now();

        self.region.mark(&self.grid);
        let mut next = std::mem::take(&mut self.spare);
        next.clear();
        self.region.evaluate(&self.grid, &mut next);
        self.region.clear();

        self.spare = self.grid.advance(next);
        self.index.rebuild(self.grid.cells());
        self.generation += 1;

        self.last_tick = timer.elapsed();
        true
    }

    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.grid.is_alive(x, y)
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            live_cells: self.grid.population(),
            generation: self.generation,
            last_tick: self.last_tick,
        }
    }

    /// Size of the region the next tick would evaluate.
    pub fn active_region_len(&mut self) -> usize {
        self.region.mark(&self.grid);
        let len = self.region.len();
        self.region.clear();
        len
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Sets updates per second, clamped to `Config::MIN_TICK_RATE..=Config::MAX_TICK_RATE`.
    pub fn set_tick_rate(&mut self, updates_per_second: u32) {
        self.tick_rate = Config::clamp_tick_rate(updates_per_second);
    }

    pub fn faster(&mut self) {
        self.set_tick_rate(self.tick_rate.saturating_add(1));
    }

    pub fn slower(&mut self) {
        self.set_tick_rate(self.tick_rate.saturating_sub(1));
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1. / self.tick_rate as f64)
    }
}
