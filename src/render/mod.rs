//! What the engine hands to a renderer: colored, world-positioned records and
//! the slot they are published through.

mod color;
mod frame;
mod slot;

pub use color::{cell_color, hsl_to_rgb, ColorParams, Rgba};
pub use frame::{Frame, Layout, RenderRecord};
pub use slot::RenderSlot;
