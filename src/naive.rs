//! Full-grid reference evaluator: visits every cell every generation. Same
//! bounded topology as [`LifeEngine`](crate::LifeEngine), used to cross-check it.

pub struct NaiveField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl NaiveField {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
        }
    }

    /// Field with the given row-major states.
    pub fn from_bitmap(width: usize, height: usize, states: &[bool]) -> Self {
        assert_eq!(states.len(), width * height);
        let mut field = Self::blank(width, height);
        field.cells_curr.copy_from_slice(states);
        field
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells_curr[x + y * self.width] = state;
    }

    pub fn bitmap(&self) -> &[bool] {
        &self.cells_curr
    }

    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    pub fn count_neibs(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x as isize + dx, y as isize + dy);
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height
                {
                    count += self.get(nx as usize, ny as usize) as usize;
                }
            }
        }
        count
    }

    pub fn update(&mut self, n: usize) {
        for _ in 0..n {
            for y in 0..self.height {
                for x in 0..self.width {
                    let neibs = self.count_neibs(x, y);
                    let next = if self.cells_curr[x + y * self.width] {
                        neibs == 2 || neibs == 3
                    } else {
                        neibs == 3
                    };
                    self.cells_next[x + y * self.width] = next;
                }
            }
            std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        }
    }
}
