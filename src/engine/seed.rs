use super::GridState;
use rand::Rng;

/// One Bernoulli(`density`) trial per cell in row-major order. `grid` must be
/// cleared beforehand.
pub(super) fn randomize<R: Rng + ?Sized>(grid: &mut GridState, rng: &mut R, density: f64) {
    let (w, h) = grid.size();
    for y in 0..h {
        for x in 0..w {
            if rng.gen::<f64>() < density {
                grid.insert_seed(x, y);
            }
        }
    }
}

/// Seeds explicit coordinates. Positions outside the grid and repeats are
/// dropped; the resulting live list is sorted row-major.
pub(super) fn place<I>(grid: &mut GridState, cells: I)
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let (w, h) = grid.size();
    let mut coords = cells
        .into_iter()
        .filter(|&(x, y)| x < w && y < h)
        .collect::<Vec<_>>();
    coords.sort_unstable_by_key(|&(x, y)| (y, x));
    for (x, y) in coords {
        grid.insert_seed(x, y);
    }
}

/// Maps any input onto a valid probability; NaN counts as zero.
pub(super) fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        0.
    } else {
        density.clamp(0., 1.)
    }
}
