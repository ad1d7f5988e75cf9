// SPDX-License-Identifier: MPL-2.0
//! Styles for the main button and the action item buttons.
//!
//! Both surfaces are transparent at rest so the strip shows through; a
//! press is the only state that produces visible feedback.

use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// How a pressed button acknowledges the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Tint the pressed surface with the ripple color, dimmed by the
    /// caller's pressed opacity.
    Tint,
    /// Flash the ripple color at full strength while pressed, with no
    /// static background change.
    Ripple,
}

impl Feedback {
    /// The feedback the current platform uses natively.
    #[must_use]
    pub fn native() -> Self {
        if cfg!(target_os = "android") {
            Self::Ripple
        } else {
            Self::Tint
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::native()
    }
}

/// Circular press surface for the main button and the action items.
///
/// `ripple` is expected to carry the visibility fade already multiplied
/// into its alpha channel. `pressed_dim` scales the tint feedback; the
/// main button passes `1.0`, items pass the pressed opacity.
pub fn action(
    ripple: Color,
    radius: f32,
    feedback: Feedback,
    pressed_dim: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (feedback, status) {
            (Feedback::Tint, button::Status::Pressed) => Some(Background::Color(Color {
                a: ripple.a * pressed_dim,
                ..ripple
            })),
            (Feedback::Ripple, button::Status::Pressed) => Some(Background::Color(ripple)),
            _ => None,
        };

        button::Style {
            background,
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            snap: true,
            ..button::Style::default()
        }
    }
}
