// SPDX-License-Identifier: MPL-2.0
//! Container style for the expanded strip of action items.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Pill-shaped surface behind the scrollable action items.
///
/// `tint` and the shadow color are expected to carry the visibility fade
/// already multiplied into their alpha channels.
pub fn strip(tint: Color, radius: f32, shadow: Shadow) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow,
        ..container::Style::default()
    }
}
