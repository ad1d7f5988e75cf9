// SPDX-License-Identifier: MPL-2.0
//! Spring-damper integrator driving the expansion value.

use std::time::Instant;

/// Spring stiffness for the expand/collapse motion.
pub const SPRING_K: f32 = 80.0;
/// Damping coefficient for the expand/collapse motion.
pub const DAMPING_B: f32 = 20.0;

/// px/s - when to consider the motion settled
const SETTLE_VELOCITY_THRESHOLD: f32 = 0.5;
/// px - proximity to the target that counts as arrived
const SETTLE_DISTANCE_THRESHOLD: f32 = 0.5;
/// Integration step cap so dropped frames cannot destabilize the spring.
const MAX_STEP_SECS: f32 = 0.05;

/// One continuously animated value with a velocity-based settle.
///
/// There is exactly one handle per tracked value: retargeting an in-flight
/// spring overwrites its target in place while the current value and velocity
/// carry over, so motion never jumps.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f32,
    target: f32,
    velocity: f32,
    last_update: Instant,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f32, now: Instant) -> Self {
        Self {
            value,
            target: value,
            velocity: 0.0,
            last_update: now,
        }
    }

    /// Retarget the spring. Any in-flight motion continues toward the new
    /// target (last writer wins).
    pub fn go(&mut self, target: f32, now: Instant) {
        self.target = target;
        self.last_update = now;
    }

    /// Snap to `value` without animating.
    pub fn jump(&mut self, value: f32, now: Instant) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.last_update = now;
    }

    /// Advance the integrator; returns true while motion is active.
    pub fn step(&mut self, now: Instant) -> bool {
        let dt = now
            .saturating_duration_since(self.last_update)
            .as_secs_f32()
            .min(MAX_STEP_SECS);
        self.last_update = now;

        if self.is_settled() {
            return false;
        }

        let spring_force = SPRING_K * (self.target - self.value);
        let damping_force = -DAMPING_B * self.velocity;
        self.velocity += (spring_force + damping_force) * dt;
        self.value += self.velocity * dt;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            false
        } else {
            true
        }
    }

    /// Current position.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True while the spring still has meaningful motion left.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_settled()
    }

    fn is_settled(&self) -> bool {
        self.velocity.abs() < SETTLE_VELOCITY_THRESHOLD
            && (self.target - self.value).abs() < SETTLE_DISTANCE_THRESHOLD
    }
}
