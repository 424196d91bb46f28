use super::Cell;

/// Coarse `buckets x buckets` grouping of live cells by the chunk they fall in.
///
/// Rebuilt from scratch every generation; the update rule itself never reads it.
pub struct SpatialIndex {
    buckets: Vec<Vec<usize>>,
    side: usize,
    chunk_width: usize,
    chunk_height: usize,
    grid_width: usize,
}

impl SpatialIndex {
    /// Caller guarantees `buckets` divides both dimensions (see `Config::validate`).
    pub fn new(width: usize, height: usize, buckets: usize) -> Self {
        assert!(buckets >= 1 && width % buckets == 0 && height % buckets == 0);
        Self {
            buckets: vec![vec![]; buckets * buckets],
            side: buckets,
            chunk_width: width / buckets,
            chunk_height: height / buckets,
            grid_width: width,
        }
    }

    /// Number of buckets along each axis.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cells covered by one bucket, `(width, height)`.
    pub fn chunk_size(&self) -> (usize, usize) {
        (self.chunk_width, self.chunk_height)
    }

    #[inline]
    fn bucket_of(&self, x: usize, y: usize) -> usize {
        x / self.chunk_width + y / self.chunk_height * self.side
    }

    /// Grid indices in bucket `(gx, gy)`, in insertion order.
    pub fn bucket(&self, gx: usize, gy: usize) -> &[usize] {
        &self.buckets[gx + gy * self.side]
    }

    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    /// Drops everything and re-inserts `cells`, preserving their relative order.
    pub fn rebuild(&mut self, cells: &[Cell]) {
        self.clear();
        for cell in cells {
            let (x, y) = (cell.x as usize, cell.y as usize);
            let b = self.bucket_of(x, y);
            self.buckets[b].push(x + y * self.grid_width);
        }
    }

    /// All indexed grid indices, bucket by bucket in row-major bucket order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Grid indices of live cells with `x0 <= x < x1` and `y0 <= y < y1`,
    /// touching only the buckets that overlap the rectangle.
    pub fn cells_in_rect(
        &self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        let grid_height = self.chunk_height * self.side;
        let (x1, y1) = (x1.min(self.grid_width), y1.min(grid_height));
        let (gx_range, gy_range) = if x0 < x1 && y0 < y1 {
            (
                x0 / self.chunk_width..(x1 - 1) / self.chunk_width + 1,
                y0 / self.chunk_height..(y1 - 1) / self.chunk_height + 1,
            )
        } else {
            (0..0, 0..0)
        };
        let w = self.grid_width;
        gy_range
            .flat_map(move |gy| gx_range.clone().map(move |gx| (gx, gy)))
            .flat_map(move |(gx, gy)| self.bucket(gx, gy).iter().copied())
            .filter(move |&idx| {
                let (x, y) = (idx % w, idx / w);
                (x0..x1).contains(&x) && (y0..y1).contains(&y)
            })
    }
}
