use crate::ConfigError;

/// Fixed-at-construction parameters of a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Buckets per axis of the spatial index; must divide both dimensions.
    pub buckets: usize,
    /// Seed of the initialization stream, `None` means entropy.
    pub seed: Option<u64>,
    /// Updates per second, clamped to `MIN_TICK_RATE..=MAX_TICK_RATE`.
    pub tick_rate: u32,
    pub initial_density: f64,
    /// World-space distance between neighbouring cells.
    pub voxel_size: f32,
    /// Upper bound on renderable records published per frame.
    pub max_instances: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            buckets: 24,
            seed: None,
            tick_rate: 20,
            initial_density: 0.1,
            voxel_size: 0.015,
            max_instances: 800_000,
        }
    }
}

impl Config {
    pub const MIN_TICK_RATE: u32 = 1;
    pub const MAX_TICK_RATE: u32 = 60;

    pub const DENSITY_PRESETS: [f64; 4] = [0.15, 0.22, 0.25, 0.3];

    pub const HUE_STEP: f32 = 30.;
    pub const SPREAD_STEP: f32 = 0.05;

    /// Config for a `width x height` grid, everything else default.
    pub fn with_size(width: usize, height: usize, buckets: usize) -> Self {
        Self {
            width,
            height,
            buckets,
            ..Default::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starts from `DENSITY_PRESETS[index]` instead of `initial_density`.
    pub fn with_density_preset(mut self, index: usize) -> Self {
        self.initial_density = Self::density_preset(index);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        if width > u32::MAX as usize
            || height > u32::MAX as usize
            || width.checked_mul(height).is_none()
        {
            return Err(ConfigError::TooLarge { width, height });
        }
        if self.buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        for (axis, len) in [("width", width), ("height", height)] {
            if len % self.buckets != 0 {
                return Err(ConfigError::IndivisibleGrid {
                    axis,
                    len,
                    buckets: self.buckets,
                });
            }
        }
        Ok(())
    }

    pub fn clamp_tick_rate(rate: u32) -> u32 {
        rate.clamp(Self::MIN_TICK_RATE, Self::MAX_TICK_RATE)
    }

    /// Preset density by index; indices past the end select the last preset.
    pub fn density_preset(index: usize) -> f64 {
        let last = Self::DENSITY_PRESETS.len() - 1;
        Self::DENSITY_PRESETS[index.min(last)]
    }
}
