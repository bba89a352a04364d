/// Tick timing for the sampling loop
///
/// The cleaner does all of its work inside one tick and then sleeps for a
/// fixed interval. Unlike a frame loop there is no catch-up: a slow tick just
/// makes the effective rate lower.
use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Fixed sleep between ticks (~60 ticks per second)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Rate tracking window (average over last N ticks)
const RATE_WINDOW_SIZE: usize = 60;

/// Tick timing state
pub struct TickTimer {
    /// Sleep after each tick
    interval: Duration,

    /// Time the last tick began
    last_tick_time: Instant,

    /// Time when the loop started
    start_time: Instant,

    /// Tick-to-tick durations for rate calculation
    tick_times: VecDeque<Duration>,

    /// Ticks begun so far
    tick_count: u64,

    /// Measured ticks per second (updated periodically)
    current_rate: f32,
}

impl TickTimer {
    /// Create a timer with the given sleep interval
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            last_tick_time: now,
            start_time: now,
            tick_times: VecDeque::with_capacity(RATE_WINDOW_SIZE),
            tick_count: 0,
            current_rate: 0.0,
        }
    }

    /// Begin a new tick and return its number, starting at 1
    pub fn begin_tick(&mut self) -> u64 {
        let now = Instant::now();
        let tick_time = now.duration_since(self.last_tick_time);
        self.last_tick_time = now;
        self.tick_count += 1;

        // The first tick measures setup time, not the loop
        if self.tick_count > 1 {
            self.tick_times.push_back(tick_time);
            if self.tick_times.len() > RATE_WINDOW_SIZE {
                self.tick_times.pop_front();
            }
        }

        if self.tick_count % 10 == 0 {
            self.update_rate();
        }

        self.tick_count
    }

    /// Sleep for the fixed interval
    pub fn rest(&self) {
        thread::sleep(self.interval);
    }

    /// Rate the loop would reach if ticks took no time
    pub fn target_rate(&self) -> f32 {
        let secs = self.interval.as_secs_f32();
        if secs > 0.0 {
            1.0 / secs
        } else {
            f32::INFINITY
        }
    }

    /// Get measured ticks per second
    pub fn rate(&self) -> f32 {
        self.current_rate
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks begun
    #[cfg(test)]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update rate calculation
    fn update_rate(&mut self) {
        if self.tick_times.is_empty() {
            self.current_rate = 0.0;
            return;
        }

        let total: Duration = self.tick_times.iter().sum();
        let avg_tick_time = total / self.tick_times.len() as u32;

        self.current_rate = if avg_tick_time.as_secs_f32() > 0.0 {
            1.0 / avg_tick_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
