// SPDX-License-Identifier: MPL-2.0
//! The expanding floating action button.
//!
//! A circular main button anchored near a corner. Pressing it springs a
//! pill-shaped strip of action buttons out along the configured
//! orientation; pressing again collapses it. The strip scrolls when the
//! actions overflow, a translucent circle can dim the content behind the
//! button while open, and the whole layer fades over a fixed duration
//! when hidden.

pub mod component;
pub mod geometry;
pub mod glyph;
pub mod item;
pub mod options;
pub mod overlay;

pub use component::{Event, FloatingAction, Message, TransitionIntent};
pub use options::{defaults, Action, Options, Position};
