// SPDX-License-Identifier: MPL-2.0
//! The action item button rendered inside the expanded strip.

use iced::widget::{button, container, Row};
use iced::{Color, Element, Length};

use crate::fab::options::{defaults, Action};
use crate::icon;
use crate::styles::{self, Feedback};

/// Renders one action as a circular button of `diameter`.
///
/// `scale` shrinks the icon toward zero while the strip is mostly closed,
/// so items pop in only near full expansion. `ripple` carries the
/// visibility fade in its alpha; `opacity` fades the icon itself. Actions
/// without a renderable icon produce an empty press surface.
pub(crate) fn view<'a, Message: Clone + 'a>(
    action: &'a Action,
    diameter: f32,
    scale: f32,
    ripple: Color,
    feedback: Feedback,
    opacity: f32,
    on_press: Message,
) -> Element<'a, Message> {
    let icon_side = diameter * scale.clamp(0.0, 1.0);

    let icon = if icon_side > 0.0 {
        icon::resolve(action.icon.as_ref(), Some(icon_side), opacity, defaults::GLYPH)
    } else {
        None
    };

    let inner: Element<'a, Message> = match icon {
        Some(icon) => icon,
        None => Row::new().into(),
    };

    button(
        container(inner)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(diameter))
    .height(Length::Fixed(diameter))
    .padding(0)
    .style(styles::button::action(
        ripple,
        diameter / 2.0,
        feedback,
        defaults::PRESSED_OPACITY,
    ))
    .on_press(on_press)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_iconless_actions() {
        let action = Action::new("share");
        let _element: Element<'_, ()> = view(
            &action,
            56.0,
            1.0,
            Color::from_rgba(0.96, 0.96, 0.96, 0.1),
            Feedback::Tint,
            1.0,
            (),
        );
    }

    #[test]
    fn builds_with_a_zero_scale() {
        let action = Action::new("edit");
        let _element: Element<'_, ()> = view(
            &action,
            56.0,
            0.0,
            Color::from_rgba(0.96, 0.96, 0.96, 0.1),
            Feedback::Ripple,
            1.0,
            (),
        );
    }
}
