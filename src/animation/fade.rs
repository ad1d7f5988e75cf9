// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration linear fade driving the visibility opacity.

use std::time::{Duration, Instant};

/// Duration of the visibility fade.
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// Linear opacity ramp between two values.
///
/// Retargeting mid-flight restarts the ramp from the current opacity, so
/// toggling the hidden flag rapidly never produces a visual jump.
#[derive(Debug, Clone)]
pub struct Fade {
    current: f32,
    from: f32,
    to: f32,
    start: Option<Instant>,
}

impl Fade {
    /// A fade resting at the given opacity.
    pub fn resting(opacity: f32) -> Self {
        Self {
            current: opacity,
            from: opacity,
            to: opacity,
            start: None,
        }
    }

    /// Begin a linear ramp toward the new opacity.
    pub fn go(&mut self, to: f32, now: Instant) {
        self.from = self.current;
        self.to = to;
        self.start = Some(now);
    }

    /// Advance the ramp; returns true while still fading.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(start) = self.start else {
            return false;
        };

        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let t = (elapsed / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        self.current = self.from + (self.to - self.from) * t;

        if t >= 1.0 {
            self.current = self.to;
            self.start = None;
        }
        self.start.is_some()
    }

    /// Opacity as of the last step.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.current
    }

    /// Opacity the ramp is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// True while a ramp is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
