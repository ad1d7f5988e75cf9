// SPDX-License-Identifier: MPL-2.0
//! The dimming overlay behind the expanding button.
//!
//! Drawn as a circle growing out of the button's anchor point. The canvas
//! spans the whole layer but never captures pointer input.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// A circle centered on the main button, scaled by the expansion value.
pub struct DimOverlay {
    cache: Cache,
    center: Point,
    radius: f32,
    color: Color,
}

impl DimOverlay {
    /// Creates an overlay circle of `radius` around `center`.
    #[must_use]
    pub fn new(center: Point, radius: f32, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            center,
            radius,
            color,
        }
    }

    /// Creates a layer-filling Canvas widget from this overlay.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for DimOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                if self.radius > 0.0 && self.color.a > 0.0 {
                    let circle = Path::circle(self.center, self.radius);
                    frame.fill(&circle, self.color);
                }
            });

        vec![geometry]
    }
}
