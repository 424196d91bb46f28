use super::Rgba;
use crate::{Cell, Config, Stats};
use tracing::debug;

/// Maps grid coordinates into the renderer's world space and caps frame size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub voxel_size: f32,
    pub max_instances: usize,
}

impl Layout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.width,
            height: config.height,
            voxel_size: config.voxel_size,
            max_instances: config.max_instances,
        }
    }

    /// Grid is laid out on the `y = 0` plane, centered on the origin.
    pub fn world_position(&self, x: u32, y: u32) -> [f32; 3] {
        [
            (x as f32 - self.width as f32 / 2.) * self.voxel_size,
            0.,
            (y as f32 - self.height as f32 / 2.) * self.voxel_size,
        ]
    }
}

/// Everything a renderer needs to draw one live cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderRecord {
    pub x: u32,
    pub y: u32,
    pub neighbors: u8,
    pub newborn: bool,
    pub position: [f32; 3],
    pub color: Rgba,
}

/// Output of one generation: records plus statistics about the full population.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub records: Vec<RenderRecord>,
    pub stats: Stats,
}

impl Frame {
    /// Builds records for the first `layout.max_instances` cells of the live list.
    pub fn build(
        cells: &[Cell],
        stats: Stats,
        layout: &Layout,
        paint: impl Fn(&Cell) -> Rgba,
    ) -> Self {
        let limit = cells.len().min(layout.max_instances);
        if limit < cells.len() {
            debug!(
                live = cells.len(),
                rendered = limit,
                "frame truncated at render limit"
            );
        }
        let records = cells[..limit]
            .iter()
            .map(|cell| RenderRecord {
                x: cell.x,
                y: cell.y,
                neighbors: cell.neighbors,
                newborn: cell.newborn,
                position: layout.world_position(cell.x, cell.y),
                color: paint(cell),
            })
            .collect();
        Self { records, stats }
    }

    pub fn is_truncated(&self) -> bool {
        self.records.len() < self.stats.live_cells
    }
}
