// SPDX-License-Identifier: MPL-2.0
//! Animation primitives: a spring integrator for the expansion value, a
//! fixed-duration fade for visibility, and clamped interpolation ranges
//! for the effects derived from the expansion.

pub mod fade;
pub mod range;
pub mod spring;

pub use fade::Fade;
pub use range::Range;
pub use spring::Spring;
