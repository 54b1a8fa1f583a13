// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::{
    thread,
    time::{Duration, Instant},
};

/// Sleep granularity of the pacing wait. Short enough that the wake-up
/// jitter stays well below one frame.
pub const SPIN_INTERVAL: Duration = Duration::from_micros(200);

/// Minimum time between frames at `target_fps`.
///
/// `target_fps` must be non-zero.
pub fn frame_interval(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps as f64)
}

/// Blocks until at least one frame interval has elapsed since `last` and
/// returns the time the wait ended, which becomes the next `last`.
///
/// The wait polls the monotonic clock between [`SPIN_INTERVAL`] sleeps
/// rather than sleeping until the deadline. It cannot be interrupted.
pub fn throttle(last: Instant, target_fps: u32) -> Instant {
    let interval = frame_interval(target_fps);
    let mut now = Instant::now();
    while now.duration_since(last) < interval {
        thread::sleep(SPIN_INTERVAL);
        now = Instant::now();
    }
    now
}

/// Owns the frame clock of the compositor loop.
#[derive(Debug)]
pub struct FramePacer {
    last: Instant,
    target_fps: u32,
}

impl FramePacer {
    /// Creates a pacer whose clock is seeded with the current time.
    pub fn new(target_fps: u32) -> Self {
        Self {
            last: Instant::now(),
            target_fps,
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn interval(&self) -> Duration {
        frame_interval(self.target_fps)
    }

    /// Time the previous wait ended.
    pub fn last(&self) -> Instant {
        self.last
    }

    /// Waits for the end of the current frame interval.
    pub fn throttle(&mut self) -> Instant {
        self.last = throttle(self.last, self.target_fps);
        self.last
    }
}

/// Rolling average of the achieved frame rate, for logging only.
#[derive(Debug)]
pub struct FrameRate {
    prev: Instant,
    history: Vec<f64>,
    index: usize,
    filled: usize,
}

impl FrameRate {
    pub fn new(samples: usize) -> Self {
        Self {
            prev: Instant::now(),
            history: vec![0.0; samples.max(1)],
            index: 0,
            filled: 0,
        }
    }

    /// Records a frame boundary and returns the average rate over the
    /// recorded history.
    pub fn update(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.prev);
        self.prev = now;

        self.history[self.index] = match elapsed.as_secs_f64() {
            secs if secs > 0.0 => 1.0 / secs,
            _ => 0.0,
        };
        self.index = (self.index + 1) % self.history.len();
        self.filled = (self.filled + 1).min(self.history.len());

        self.history[..self.filled].iter().sum::<f64>() / self.filled as f64
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new(30)
    }
}
