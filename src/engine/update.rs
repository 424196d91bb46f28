use super::{Cell, GridState};

/// Cells whose state may change this generation: every live cell and its
/// in-bounds neighbours.
///
/// `mask` spans the whole grid but is only ever touched at the positions listed
/// in `indices`, so marking and clearing cost is proportional to the region.
pub(super) struct ActiveRegion {
    mask: Vec<bool>,
    indices: Vec<usize>,
}

impl ActiveRegion {
    pub(super) fn new(size: usize) -> Self {
        Self {
            mask: vec![false; size],
            indices: vec![],
        }
    }

    pub(super) fn len(&self) -> usize {
        self.indices.len()
    }

    /// Marks the 3x3 block around each live cell, clipped at the edges.
    /// Leaves `indices` sorted, i.e. in row-major order.
    pub(super) fn mark(&mut self, grid: &GridState) {
        let (w, h) = grid.size();
        for cell in grid.cells() {
            let (x, y) = (cell.x as usize, cell.y as usize);
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let idx = nx + ny * w;
                    if !self.mask[idx] {
                        self.mask[idx] = true;
                        self.indices.push(idx);
                    }
                }
            }
        }
        self.indices.sort_unstable();
    }

    pub(super) fn clear(&mut self) {
        for &idx in &self.indices {
            self.mask[idx] = false;
        }
        self.indices.clear();
    }

    /// Applies B3/S23 to every marked cell, appending survivors and births
    /// to `next` in row-major order.
    pub(super) fn evaluate(&self, grid: &GridState, next: &mut Vec<Cell>) {
        let (w, _) = grid.size();
        for &idx in &self.indices {
            let (x, y) = (idx % w, idx / w);
            let neighbors = grid.count_neibs(x, y);
            let alive = grid.get(idx);
            let will_live = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if will_live {
                next.push(Cell {
                    x: x as u32,
                    y: y as u32,
                    neighbors,
                    newborn: !alive,
                });
            }
        }
    }
}
