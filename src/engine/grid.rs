/// A live cell together with what the last rule evaluation saw around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    /// Live neighbours counted when this cell's fate was decided, `0..=8`.
    /// Always `0` for seeded cells.
    pub neighbors: u8,
    /// Was dead in the previous generation.
    pub newborn: bool,
}

impl Cell {
    pub fn seeded(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            neighbors: 0,
            newborn: true,
        }
    }
}

/// Current and next bitmaps plus the authoritative list of live cells.
///
/// `cells_curr[i]` is set exactly when `cells` contains a record for index `i`.
pub struct GridState {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl GridState {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            cells: vec![],
            width,
            height,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// Dead outside of the grid.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cells_curr[self.index(x as usize, y as usize)]
    }

    #[inline]
    pub(super) fn get(&self, idx: usize) -> bool {
        self.cells_curr[idx]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Row-major snapshot of the current bitmap.
    pub fn bitmap(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Live neighbours of `(x, y)` in the current bitmap. Cells past the
    /// edges do not exist and are not counted.
    pub(super) fn count_neibs(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width, self.height);
        let x1 = x.saturating_sub(1);
        let x2 = (x + 1).min(w - 1);
        let y1 = y.saturating_sub(1);
        let y2 = (y + 1).min(h - 1);
        let mut count = 0;
        for ny in y1..=y2 {
            let row = ny * w;
            for nx in x1..=x2 {
                if (nx != x || ny != y) && self.cells_curr[row + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Empties both bitmaps and the live list.
    pub(super) fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.cells_next.fill(false);
        self.cells.clear();
    }

    /// Appends a live cell to the current generation. Used only while seeding;
    /// returns `false` when the cell was already alive.
    pub(super) fn insert_seed(&mut self, x: usize, y: usize) -> bool {
        let idx = self.index(x, y);
        if self.cells_curr[idx] {
            return false;
        }
        self.cells_curr[idx] = true;
        self.cells.push(Cell::seeded(x as u32, y as u32));
        true
    }

    /// Installs `next` as the current generation: the next bitmap is wiped,
    /// filled from `next` and swapped in; the old list is handed back so its
    /// allocation can be reused.
    pub(super) fn advance(&mut self, next: Vec<Cell>) -> Vec<Cell> {
        self.cells_next.fill(false);
        for cell in &next {
            let idx = cell.x as usize + cell.y as usize * self.width;
            self.cells_next[idx] = true;
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        std::mem::replace(&mut self.cells, next)
    }
}
