// SPDX-License-Identifier: MPL-2.0
//! Clamped linear interpolation for the derived visual effects.

/// Linear mapping from an input range onto an output range, clamped at both
/// ends so spring overshoot never escapes the documented output bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    input: (f32, f32),
    output: (f32, f32),
}

impl Range {
    pub const fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self { input, output }
    }

    /// Evaluate the mapping at `value`.
    ///
    /// A degenerate input range (zero, negative, or non-finite span) and a
    /// NaN `value` both collapse to the output start instead of producing
    /// NaN; infinities clamp like any other out-of-range value.
    pub fn eval(&self, value: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        let span = in_end - in_start;
        if !span.is_finite() || span <= f32::EPSILON {
            return out_start;
        }

        let t = (value - in_start) / span;
        if t.is_nan() {
            return out_start;
        }

        let t = t.clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}
