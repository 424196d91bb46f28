mod config;
mod tick_limit;

pub use config::Config;
pub use tick_limit::TickLimiter;
