// SPDX-License-Identifier: MPL-2.0
//! The fallback "+" glyph, drawn on a canvas so it can rotate smoothly.
//! At 45 degrees the same two strokes read as a close cross.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Radians, Rectangle, Renderer, Theme, Vector};

/// Text-size analog: the glyph is drawn as if set at `diameter / 1.4`.
const FONT_DIVISOR: f32 = 1.4;
/// Half arm length as a fraction of the glyph's text size.
const ARM_FRACTION: f32 = 0.315;
/// Stroke width as a fraction of the glyph's text size.
const STROKE_FRACTION: f32 = 0.11;

/// A "+" glyph rotated by the expansion-driven angle.
pub struct PlusGlyph {
    cache: Cache,
    diameter: f32,
    rotation_degrees: f32,
    color: Color,
}

impl PlusGlyph {
    /// Creates a glyph sized for a button of `diameter`.
    #[must_use]
    pub fn new(diameter: f32, rotation_degrees: f32, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            diameter,
            rotation_degrees,
            color,
        }
    }

    /// Creates a Canvas widget from this glyph.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for PlusGlyph {
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
                let center = frame.center();
                let text_size = self.diameter / FONT_DIVISOR;
                let half_arm = text_size * ARM_FRACTION;

                let stroke = Stroke::default()
                    .with_width(text_size * STROKE_FRACTION)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round);

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(Radians(self.rotation_degrees.to_radians()));

                    let horizontal =
                        Path::line(Point::new(-half_arm, 0.0), Point::new(half_arm, 0.0));
                    let vertical =
                        Path::line(Point::new(0.0, -half_arm), Point::new(0.0, half_arm));

                    frame.stroke(&horizontal, stroke);
                    frame.stroke(&vertical, stroke);
                });
            });

        vec![geometry]
    }
}
