//! Frame clock: turns display-refresh timestamps into simulation `dt`

use circular_queue::CircularQueue;

use crate::consts::MAX_FRAME_DT;

/// Number of recent frame durations kept for the FPS estimate
const FPS_WINDOW: usize = 30;

pub struct FrameClock {
    /// Previous timestamp in milliseconds
    last_time: Option<f64>,
    max_dt: f32,
    frame_times: CircularQueue<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last_time: None,
            max_dt,
            frame_times: CircularQueue::with_capacity(FPS_WINDOW),
        }
    }

    /// Record a frame at `timestamp_ms` and return the clamped step in seconds.
    ///
    /// The first frame yields 0. A timestamp earlier than the previous one
    /// also yields 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => {
                let raw = ((timestamp_ms - last) / 1000.0) as f32;
                self.frame_times.push(raw.max(0.0));
                raw.max(0.0).min(self.max_dt)
            }
            None => 0.0,
        };
        self.last_time = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp so the next frame yields 0
    pub fn reset(&mut self) {
        self.last_time = None;
        self.frame_times = CircularQueue::with_capacity(FPS_WINDOW);
    }

    /// Smoothed frames per second over the recent window (unclamped wall time)
    pub fn fps(&self) -> Option<f32> {
        let mut iter = self.frame_times.iter();
        let mut frame_time = *iter.next()?;
        for &t in iter {
            frame_time = 0.8 * frame_time + 0.2 * t;
        }
        (frame_time > 0.0).then(|| 1.0 / frame_time)
    }
}
