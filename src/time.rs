//! Wall-clock timing for the viewer.
//!
//! Physics always advances by the fixed [`SimConfig::time_step`](crate::SimConfig)
//! per tick; this tracker only feeds the background animation, the pause
//! state and the FPS readout.

use std::time::{Duration, Instant};

/// Frame timing: elapsed time, frame count, FPS and pause state.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    elapsed_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            elapsed_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Record a rendered frame. Call once per redraw.
    ///
    /// Elapsed time keeps running while paused so the background keeps
    /// animating; only simulation ticks stop.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// Seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Frames rendered since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
