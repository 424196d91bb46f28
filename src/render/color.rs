use crate::Config;

/// Linear RGBA, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    /// Newborn cells while the spread is low.
    pub const HIGHLIGHT: Rgba = Rgba([1., 1., 1., 0.9]);
    /// Every cell of a freshly seeded field.
    pub const SEED: Rgba = Rgba([0.4, 0.8, 0.4, 0.8]);
}

const BASE_HUE: f32 = 120. / 360.;
const SATURATION: f32 = 0.95;
const LIGHTNESS: f32 = 0.5;
const ALPHA: f32 = 0.85;
/// Below this spread newborn cells are drawn with [`Rgba::HIGHLIGHT`].
const HIGHLIGHT_SPREAD: f32 = 0.25;

/// Hue a cell drifts towards as the spread approaches one.
fn target_hue(neighbors: u8) -> f32 {
    match neighbors {
        2 => 240. / 360.,
        3 => 120. / 360.,
        _ => 0.,
    }
}

/// Display color of a live cell.
///
/// `hue_offset` is in degrees, `color_spread` in `[0, 1]`: at zero spread every
/// cell shares the base hue, at full spread the hue depends on the neighbour
/// count.
pub fn cell_color(neighbors: u8, newborn: bool, hue_offset: f32, color_spread: f32) -> Rgba {
    if newborn && color_spread < HIGHLIGHT_SPREAD {
        return Rgba::HIGHLIGHT;
    }
    let hue = BASE_HUE + (target_hue(neighbors) - BASE_HUE) * color_spread;
    let hue = (hue + hue_offset / 360.).rem_euclid(1.);
    let [r, g, b] = hsl_to_rgb(hue, SATURATION, LIGHTNESS);
    Rgba([r, g, b, ALPHA])
}

/// HSL to RGB with all components in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0. {
        return [l; 3];
    }
    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0. {
            t += 1.;
        }
        if t > 1. {
            t -= 1.;
        }
        if t < 1. / 6. {
            p + (q - p) * 6. * t
        } else if t < 1. / 2. {
            q
        } else if t < 2. / 3. {
            p + (q - p) * (2. / 3. - t) * 6.
        } else {
            p
        }
    }
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    [
        hue_to_rgb(p, q, h + 1. / 3.),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1. / 3.),
    ]
}

/// The two user-tunable inputs of [`cell_color`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorParams {
    hue_offset: f32,
    color_spread: f32,
}

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            hue_offset: 0.,
            color_spread: 1.,
        }
    }
}

impl ColorParams {
    /// Wraps the offset into `[0, 360)` and clamps the spread into `[0, 1]`.
    pub fn new(hue_offset: f32, color_spread: f32) -> Self {
        let hue_offset = if hue_offset.is_finite() {
            hue_offset.rem_euclid(360.)
        } else {
            0.
        };
        let color_spread = if color_spread.is_nan() {
            0.
        } else {
            color_spread.clamp(0., 1.)
        };
        Self {
            hue_offset,
            color_spread,
        }
    }

    pub fn hue_offset(&self) -> f32 {
        self.hue_offset
    }

    pub fn color_spread(&self) -> f32 {
        self.color_spread
    }

    pub fn cycle_hue(&mut self) {
        *self = Self::new(self.hue_offset + Config::HUE_STEP, self.color_spread);
    }

    pub fn widen_spread(&mut self) {
        *self = Self::new(self.hue_offset, self.color_spread + Config::SPREAD_STEP);
    }

    pub fn narrow_spread(&mut self) {
        *self = Self::new(self.hue_offset, self.color_spread - Config::SPREAD_STEP);
    }

    pub fn color(&self, neighbors: u8, newborn: bool) -> Rgba {
        cell_color(neighbors, newborn, self.hue_offset, self.color_spread)
    }
}
