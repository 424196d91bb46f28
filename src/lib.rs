#![warn(clippy::all)]

mod engine;
mod error;
pub mod naive;
mod render;
mod session;
mod utils;

pub use engine::{Cell, GridState, LifeEngine, SpatialIndex, Stats};
pub use error::ConfigError;
pub use render::{
    cell_color, hsl_to_rgb, ColorParams, Frame, Layout, RenderRecord, RenderSlot, Rgba,
};
pub use session::Session;
pub use utils::{Config, TickLimiter};
