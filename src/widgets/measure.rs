// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports its laid-out bounds to the application.
//! The floating action layer uses it to learn the extent its expansion
//! targets without influencing layout itself.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and publishes its bounds whenever they
/// differ from the last value the application recorded.
pub struct Measured<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    known: Option<Rectangle>,
    reported: Option<Rectangle>,
    on_measure: Box<dyn Fn(Rectangle) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> Measured<'a, Message, Theme, Renderer> {
    /// Creates a new `Measured` wrapping the given content.
    ///
    /// `known` is the rectangle the application last stored; passing it
    /// back suppresses repeat reports for an unchanged layout.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        known: Option<Rectangle>,
        on_measure: impl Fn(Rectangle) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            known,
            reported: None,
            on_measure: Box::new(on_measure),
        }
    }
}

/// Whether freshly laid-out `bounds` warrant a report, given the rectangle
/// the application already knows and the one this instance already sent.
fn should_report(
    known: Option<Rectangle>,
    reported: Option<Rectangle>,
    bounds: Rectangle,
) -> bool {
    known != Some(bounds) && reported != Some(bounds)
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Measured<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if should_report(self.known, self.reported, bounds) {
            shell.publish((self.on_measure)(bounds));
            self.reported = Some(bounds);
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Measured<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Measured<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a bounds-reporting wrapper.
pub fn measured<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    known: Option<Rectangle>,
    on_measure: impl Fn(Rectangle) -> Message + 'a,
) -> Measured<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Measured::new(content, known, on_measure)
}
