use thiserror::Error;

/// Rejected grid configuration. Raised only at construction time; a running
/// engine never produces errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have non-zero dimensions, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("spatial index needs at least one bucket per axis")]
    ZeroBuckets,
    #[error("{axis} of {len} cells is not divisible into {buckets} buckets")]
    IndivisibleGrid {
        axis: &'static str,
        len: usize,
        buckets: usize,
    },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}
