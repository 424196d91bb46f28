use crate::{
    Cell, ColorParams, Config, ConfigError, Frame, Layout, LifeEngine, RenderSlot, Rgba, Stats,
    TickLimiter,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};
use tracing::{debug, info};

/// Progress is logged every this many generations.
const LOG_EVERY: u64 = 10;

/// Thread-safe handle around a [`LifeEngine`].
///
/// All engine access goes through one coarse lock, so a reset is never
/// interleaved with a tick. Every successful tick or reset publishes a
/// [`Frame`] into the [`RenderSlot`].
pub struct Session {
    engine: Mutex<LifeEngine>,
    colors: Mutex<ColorParams>,
    slot: RenderSlot,
    layout: Layout,
    initial_density: f64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Session {
    /// Validates `config`, seeds the grid at `config.initial_density` and
    /// publishes the first frame.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let session = Self {
            engine: Mutex::new(LifeEngine::new(config)?),
            colors: Mutex::new(ColorParams::default()),
            slot: RenderSlot::default(),
            layout: Layout::from_config(config),
            initial_density: config.initial_density,
        };
        session.reset(session.initial_density);
        Ok(session)
    }

    /// Reseeds at `density`, holding the engine for the whole operation.
    pub fn reset(&self, density: f64) {
        let mut engine = lock(&self.engine);
        engine.initialize(density);
        let (w, h) = engine.size();
        info!(
            density,
            cells = engine.population(),
            width = w,
            height = h,
            "grid seeded"
        );
        let frame = Frame::build(engine.cells(), engine.stats(), &self.layout, |_| Rgba::SEED);
        self.slot.publish(frame);
    }

    /// Reseeds at the default density.
    pub fn restart(&self) {
        self.reset(self.initial_density);
    }

    /// Reseeds at `Config::DENSITY_PRESETS[index]`.
    pub fn reset_preset(&self, index: usize) {
        self.reset(Config::density_preset(index));
    }

    /// Advances one generation and publishes it. No-op while paused.
    pub fn tick(&self) -> bool {
        let colors = self.color_params();
        let mut engine = lock(&self.engine);
        if !engine.tick() {
            return false;
        }
        let stats = engine.stats();
        let frame = Frame::build(engine.cells(), stats, &self.layout, |cell: &Cell| {
            colors.color(cell.neighbors, cell.newborn)
        });
        drop(engine);

        if stats.generation % LOG_EVERY == 0 {
            info!(
                generation = stats.generation,
                cells = stats.live_cells,
                update_ms = stats.last_tick.as_secs_f64() * 1e3,
                rendered = frame.records.len(),
                "progress"
            );
        }
        self.slot.publish(frame);
        true
    }

    /// Ticks at the engine's tick rate until `generations` ticks succeeded
    /// (forever if `None`) or `stop` is raised. Returns the number of ticks.
    ///
    /// With `paced == false` ticks run back to back, except while paused.
    pub fn run(&self, generations: Option<u64>, paced: bool, stop: &AtomicBool) -> u64 {
        let mut limiter = TickLimiter::default();
        let mut done = 0;
        while !stop.load(Ordering::Relaxed) && generations.map_or(true, |n| done < n) {
            let advanced = self.tick();
            if advanced {
                done += 1;
            }
            if paced || !advanced {
                limiter.wait(self.tick_interval());
            }
        }
        debug!(ticks = done, rate = limiter.rate(), "run finished");
        done
    }

    pub fn pause(&self) {
        lock(&self.engine).pause();
        debug!("paused");
    }

    pub fn resume(&self) {
        lock(&self.engine).resume();
        debug!("resumed");
    }

    pub fn toggle_pause(&self) {
        lock(&self.engine).toggle_pause();
    }

    pub fn is_paused(&self) -> bool {
        lock(&self.engine).is_paused()
    }

    pub fn set_tick_rate(&self, updates_per_second: u32) {
        let mut engine = lock(&self.engine);
        engine.set_tick_rate(updates_per_second);
        debug!(rate = engine.tick_rate(), "tick rate changed");
    }

    pub fn faster(&self) {
        lock(&self.engine).faster();
    }

    pub fn slower(&self) {
        lock(&self.engine).slower();
    }

    pub fn tick_rate(&self) -> u32 {
        lock(&self.engine).tick_rate()
    }

    pub fn tick_interval(&self) -> Duration {
        lock(&self.engine).tick_interval()
    }

    pub fn color_params(&self) -> ColorParams {
        *lock(&self.colors)
    }

    /// Takes effect from the next published frame on.
    pub fn set_color_params(&self, params: ColorParams) {
        *lock(&self.colors) = params;
    }

    pub fn update_color_params(&self, f: impl FnOnce(&mut ColorParams)) {
        f(&mut lock(&self.colors));
    }

    pub fn stats(&self) -> Stats {
        lock(&self.engine).stats()
    }

    pub fn status_line(&self) -> String {
        let engine = lock(&self.engine);
        engine.stats().status_line(engine.is_paused())
    }

    /// Read access to the engine, e.g. for spatial index queries.
    pub fn with_engine<R>(&self, f: impl FnOnce(&LifeEngine) -> R) -> R {
        f(&lock(&self.engine))
    }

    pub fn slot(&self) -> &RenderSlot {
        &self.slot
    }

    pub fn latest_frame(&self) -> Arc<Frame> {
        self.slot.latest().0
    }
}
