// SPDX-License-Identifier: MPL-2.0
//! `iced_fab` is an expanding floating action button for the Iced GUI
//! framework.
//!
//! It provides a circular main button that springs open into a scrollable
//! strip of secondary actions, with a dimming overlay, fixed-duration
//! show/hide fades, and per-button icons.

#![doc(html_root_url = "https://docs.rs/iced_fab/0.1.0")]

pub mod animation;
pub mod error;
pub mod fab;
pub mod icon;
pub mod styles;
pub mod widgets;

pub use error::{Error, Result};
pub use fab::{defaults, Action, Event, FloatingAction, Message, Options, Position, TransitionIntent};
pub use icon::Icon;
pub use styles::Feedback;
