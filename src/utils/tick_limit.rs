use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces a loop to a target number of ticks per second.
pub struct TickLimiter {
    tick_timer: Instant,
    ticktime_smoothed: f64,
}

impl Default for TickLimiter {
    fn default() -> Self {
        Self {
            tick_timer: Instant::now(),
            ticktime_smoothed: 0.,
        }
    }
}

impl TickLimiter {
    /// Smoothed achieved rate, `0` before the first tick.
    pub fn rate(&self) -> f64 {
        if self.ticktime_smoothed == 0. {
            0.
        } else {
            1. / self.ticktime_smoothed
        }
    }

    /// Sleeps for whatever is left of `interval` since the previous call.
    pub fn wait(&mut self, interval: Duration) {
        let before_wait = self.tick_timer.elapsed();
        if interval > before_wait {
            sleep(interval - before_wait);
        }

        let ticktime = self.tick_timer.elapsed().as_secs_f64();
        self.ticktime_smoothed += (ticktime - self.ticktime_smoothed) * 0.1;

        self.tick_timer = Instant::now();
    }
}
