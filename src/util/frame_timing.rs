use web_time::Instant;

/// Per-frame clock: elapsed time since the previous frame plus a smoothed
/// FPS estimate.
///
/// Owned by whoever drives the frame loop, so frame timing never lives in
/// process-wide state.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous tick.
    last_frame: Instant,
    /// Seconds between the previous two ticks.
    delta_time: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start a clock at a given instant.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            delta_time: 0.0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Mark a new frame now and return seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Mark a new frame at `now` and return seconds since the previous one.
    /// An instant earlier than the previous frame counts as zero elapsed.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.delta_time = elapsed.as_secs_f32();

        if self.delta_time > 0.0 {
            let instant_fps = 1.0 / self.delta_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta_time
    }

    /// Seconds between the two most recent ticks.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
