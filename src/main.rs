#![warn(clippy::all)]

use anyhow::{ensure, Result};
use clap::Parser;
use sparse_life::{ColorParams, Config, Session};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the simulation headless, with a reader thread consuming published frames.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = Config::default().width)]
    width: usize,
    #[arg(long, default_value_t = Config::default().height)]
    height: usize,
    /// Spatial buckets per axis; must divide width and height.
    #[arg(long, default_value_t = Config::default().buckets)]
    buckets: usize,
    /// Seed of the initial soup (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Probability of each cell starting alive.
    #[arg(long, default_value_t = Config::default().initial_density)]
    density: f64,
    /// Use one of the built-in densities instead of `--density`.
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..Config::DENSITY_PRESETS.len() as i64)
    )]
    preset: Option<u8>,
    /// Generations to simulate.
    #[arg(long, default_value_t = 100)]
    generations: u64,
    /// Updates per second, 1 to 60.
    #[arg(
        long = "tick-rate",
        default_value_t = Config::default().tick_rate,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    tick_rate: u32,
    #[arg(long = "hue-offset", default_value_t = 0.)]
    hue_offset: f32,
    #[arg(long = "color-spread", default_value_t = 1.)]
    color_spread: f32,
    /// Run generations back to back instead of at the tick rate.
    #[arg(long)]
    unpaced: bool,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config {
            width: self.width,
            height: self.height,
            buckets: self.buckets,
            seed: self.seed,
            tick_rate: self.tick_rate,
            initial_density: self.density,
            ..Default::default()
        };
        match self.preset {
            Some(preset) => config.with_density_preset(preset as usize),
            None => config,
        }
    }
}

/// Raises the flag when dropped, so it is set even if the owner unwinds.
struct RaiseOnDrop<'a>(&'a AtomicBool);

impl Drop for RaiseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config();
    let session = Session::new(&config)?;
    session.set_color_params(ColorParams::new(args.hue_offset, args.color_spread));

    let finished = AtomicBool::new(false);
    let (ticks, frames_seen) = thread::scope(|s| -> Result<(u64, u64)> {
        let sim = s.spawn(|| {
            let _finished = RaiseOnDrop(&finished);
            session.run(Some(args.generations), !args.unpaced, &AtomicBool::new(false))
        });

        // stands in for a renderer: picks up whatever frame is newest
        let mut seen = 0;
        let mut frames = 0;
        loop {
            let done = finished.load(Ordering::Acquire);
            if let Some((frame, version)) = session.slot().newer_than(seen) {
                ensure!(
                    frame.records.len() == frame.stats.live_cells.min(config.max_instances),
                    "frame {version} is incomplete"
                );
                seen = version;
                frames += 1;
            } else if done {
                break;
            } else {
                thread::sleep(Duration::from_millis(1));
            }
        }
        let ticks = sim
            .join()
            .map_err(|_| anyhow::anyhow!("simulation thread panicked"))?;
        Ok((ticks, frames))
    })?;

    let stats = session.stats();
    info!(
        ticks,
        frames_seen,
        cells = stats.live_cells,
        "{}",
        session.status_line()
    );
    Ok(())
}
