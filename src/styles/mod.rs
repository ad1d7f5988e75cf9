// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the button surfaces and the expanded strip.

pub mod button;
pub mod strip;

pub use button::Feedback;
