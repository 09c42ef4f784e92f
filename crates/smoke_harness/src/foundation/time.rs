//! Time management utilities
//!
//! Everything here runs on the backend's millisecond tick counter rather than
//! `std::time`, so the frame loop stays deterministic under a fake backend.
//! Tick arithmetic wraps: the counter rolls over after about 49 days.

/// Counts whole elapsed seconds against a tick mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondCounter {
    mark: u32,
    seconds: u32,
    interval: u32,
}

impl SecondCounter {
    /// Start counting from `start_ticks`, one second every `interval` ticks
    pub const fn new(start_ticks: u32, interval: u32) -> Self {
        Self {
            mark: start_ticks,
            seconds: 0,
            interval,
        }
    }

    /// Feed the current tick reading
    ///
    /// When at least one interval passed since the mark, returns the counter
    /// value to report (post-increment) and moves the mark to `now`.
    pub fn advance(&mut self, now: u32) -> Option<u32> {
        if now.wrapping_sub(self.mark) < self.interval {
            return None;
        }
        let reported = self.seconds;
        self.seconds = self.seconds.wrapping_add(1);
        self.mark = now;
        Some(reported)
    }

    /// Number of seconds counted so far
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }
}

/// Frame statistics for the loop summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    start: u32,
    last: u32,
    frame_count: u64,
}

impl FrameStats {
    /// Begin measuring at `start_ticks`
    pub const fn new(start_ticks: u32) -> Self {
        Self {
            start: start_ticks,
            last: start_ticks,
            frame_count: 0,
        }
    }

    /// Record one presented frame at tick `now`
    pub fn record_frame(&mut self, now: u32) {
        self.last = now;
        self.frame_count += 1;
    }

    /// Frames presented so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Ticks between the start and the last recorded frame
    pub const fn elapsed_ms(&self) -> u32 {
        self.last.wrapping_sub(self.start)
    }

    /// Average frames per second over the measured span
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        let elapsed = self.elapsed_ms();
        if elapsed > 0 {
            self.frame_count as f32 * 1000.0 / elapsed as f32
        } else {
            0.0
        }
    }
}
