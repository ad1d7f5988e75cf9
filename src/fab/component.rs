// SPDX-License-Identifier: MPL-2.0
//! The floating action layer: open/closed state machine, animation
//! stepping, and the layered view.

use std::time::{Duration, Instant};

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, operation, scrollable, Column, Id, Row, Stack};
use iced::{alignment, Color, Element, Length, Padding, Point, Rectangle, Shadow};
use iced::{Subscription, Task};

use crate::animation::{Fade, Spring};
use crate::fab::geometry;
use crate::fab::glyph::PlusGlyph;
use crate::fab::item;
use crate::fab::options::{Action, Options, Position};
use crate::fab::overlay::DimOverlay;
use crate::icon;
use crate::styles::{self, Feedback};
use crate::widgets::measure;

/// Milliseconds between animation frames.
const FRAME_MILLIS: u64 = 16;

/// Id owned by no focusable widget; focusing it clears keyboard focus.
const FOCUS_SENTINEL: &str = "iced_fab--focus-sentinel";

/// The transition a main-button press is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionIntent {
    /// The strip is about to expand.
    Opening,
    /// The strip is about to collapse.
    Closing,
}

/// Internal messages routed through [`FloatingAction::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The main button was pressed.
    MainPressed,
    /// An action item was pressed, carrying its key.
    ItemPressed(String),
    /// The layer produced a fresh layout measurement.
    Measured(Rectangle),
    /// Animation frame tick.
    Tick,
}

/// What the host application should know about an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing the host needs to react to.
    None,
    /// The main button was pressed; carries the intent reported before
    /// the open flag flips.
    MainPressed(TransitionIntent),
    /// The action item with this key was pressed.
    ItemPressed(String),
}

/// An expanding floating action button layer.
///
/// Owns the open flag, the expansion spring, the visibility fade, and the
/// last layout measurement. Embed it in application state, feed its
/// [`Message`]s through [`update`](Self::update), and lay
/// [`view`](Self::view) over the content it floats above (a `Stack`
/// works well). [`subscription`](Self::subscription) keeps the
/// animations ticking while any is live.
pub struct FloatingAction {
    options: Options,
    is_open: bool,
    expansion: Spring,
    visibility: Fade,
    layer: Option<Rectangle>,
}

impl FloatingAction {
    /// Creates a closed layer with the given options.
    #[must_use]
    pub fn new(options: Options, now: Instant) -> Self {
        let size = geometry::resting_size(&options, None);
        let visibility = Fade::resting(if options.is_hidden { 0.0 } else { 1.0 });

        Self {
            is_open: false,
            expansion: Spring::new(size, now),
            visibility,
            layer: None,
            options,
        }
    }

    /// Handles a message, returning the event to surface to the host and
    /// a task to hand to the runtime.
    pub fn update(&mut self, message: Message, now: Instant) -> (Event, Task<Message>) {
        match message {
            Message::MainPressed => {
                let intent = if self.is_open {
                    TransitionIntent::Closing
                } else {
                    TransitionIntent::Opening
                };

                let task = if self.options.dismiss_keyboard_on_press {
                    dismiss_keyboard()
                } else {
                    Task::none()
                };

                let size = geometry::resting_size(&self.options, self.layer);
                let target = match intent {
                    TransitionIntent::Opening => geometry::extent_target(
                        size,
                        geometry::full_extent(&self.options, self.layer),
                    ),
                    TransitionIntent::Closing => size,
                };

                log::debug!("Main press: {intent:?}, expansion target {target}");
                self.expansion.go(target, now);
                self.is_open = !self.is_open;

                (Event::MainPressed(intent), task)
            }
            Message::ItemPressed(key) => (Event::ItemPressed(key), Task::none()),
            Message::Measured(bounds) => {
                self.layer = Some(bounds);
                self.sync_expansion_to_measurement(now);
                (Event::None, Task::none())
            }
            Message::Tick => {
                self.expansion.step(now);
                self.visibility.step(now);
                (Event::None, Task::none())
            }
        }
    }

    /// Re-derives the expansion's resting point or target from a fresh
    /// measurement. A measurement alone never starts an animation: a
    /// settled spring snaps, only an in-flight one is retargeted.
    fn sync_expansion_to_measurement(&mut self, now: Instant) {
        let size = geometry::resting_size(&self.options, self.layer);
        let target = if self.is_open {
            geometry::extent_target(size, geometry::full_extent(&self.options, self.layer))
        } else {
            size
        };

        if self.expansion.is_active() {
            self.expansion.go(target, now);
        } else {
            self.expansion.jump(target, now);
        }
    }

    /// Sets the hidden flag; the visibility fade follows it over its
    /// fixed duration. Setting the current value is a no-op.
    pub fn set_hidden(&mut self, hidden: bool, now: Instant) {
        if self.options.is_hidden == hidden {
            return;
        }

        self.options.is_hidden = hidden;
        self.visibility.go(if hidden { 0.0 } else { 1.0 }, now);
    }

    /// Replaces the rendered actions.
    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.options.actions = actions.into_iter().collect();
    }

    /// Whether the strip is open (or opening).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The hidden flag last set.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.options.is_hidden
    }

    /// Current visibility opacity, `0.0` hidden through `1.0` shown.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.visibility.opacity()
    }

    /// Current expansion of the strip, in logical pixels.
    #[must_use]
    pub fn expansion(&self) -> f32 {
        self.expansion.value()
    }

    /// Whether any animation is currently live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.expansion.is_active() || self.visibility.is_active()
    }

    /// Ticks the animations while any is live; idle otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            iced::time::every(Duration::from_millis(FRAME_MILLIS)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Builds the layer: the dimming overlay underneath, the anchored
    /// strip-and-button assembly on top, all wrapped in the measuring
    /// widget that reports the layer's bounds.
    pub fn view(&self) -> Element<'_, Message> {
        let size = geometry::resting_size(&self.options, self.layer);
        let extent = geometry::full_extent(&self.options, self.layer);
        let expansion = self.expansion.value();
        let opacity = self.visibility.opacity();

        let rotation = geometry::rotation_range(size, extent).eval(expansion);
        let item_scale = geometry::item_scale_range(size, extent).eval(expansion);
        let overlay_scale = geometry::overlay_scale_range(size, extent).eval(expansion);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(overlay) = self.view_overlay(size, overlay_scale, opacity) {
            layers = layers.push(overlay);
        }

        layers = layers.push(self.view_anchored(size, expansion, rotation, item_scale, opacity));

        measure::measured(layers, self.layer, Message::Measured).into()
    }

    /// The dimming circle behind the button, skipped when configured off
    /// or before the layer has been measured (it would be invisible: the
    /// overlay scale is zero while closed).
    fn view_overlay(
        &self,
        size: f32,
        overlay_scale: f32,
        opacity: f32,
    ) -> Option<Element<'_, Message>> {
        if self.options.hide_overlay {
            return None;
        }
        let layer = self.layer?;

        let center_x = match self.options.position {
            Position::Right => layer.width - self.options.horizontal_space - size / 2.0,
            Position::Left => self.options.horizontal_space + size / 2.0,
        };
        let center_y = layer.height - self.options.bottom_space - size / 2.0;
        let radius = size / 2.0 * overlay_scale;

        Some(
            DimOverlay::new(
                Point::new(center_x, center_y),
                radius,
                faded(self.options.overlay_color, opacity),
            )
            .into_element(),
        )
    }

    /// Positions the strip-and-button assembly at the configured corner.
    fn view_anchored(
        &self,
        size: f32,
        expansion: f32,
        rotation: f32,
        item_scale: f32,
        opacity: f32,
    ) -> Element<'_, Message> {
        let assembly = self.view_assembly(size, expansion, rotation, item_scale, opacity);

        let align_x = match self.options.position {
            Position::Right => alignment::Horizontal::Right,
            Position::Left => alignment::Horizontal::Left,
        };

        let padding = Padding {
            top: 0.0,
            right: match self.options.position {
                Position::Right => self.options.horizontal_space,
                Position::Left => 0.0,
            },
            bottom: self.options.bottom_space,
            left: match self.options.position {
                Position::Left => self.options.horizontal_space,
                Position::Right => 0.0,
            },
        };

        container(assembly)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(alignment::Vertical::Bottom)
            .padding(padding)
            .into()
    }

    /// The strip with the main button stacked over its anchored end. The
    /// stack spans the current expansion along the orientation axis, so
    /// growth extends away from the anchor.
    fn view_assembly(
        &self,
        size: f32,
        expansion: f32,
        rotation: f32,
        item_scale: f32,
        opacity: f32,
    ) -> Element<'_, Message> {
        let reach = expansion.max(size);
        let (width, height) = if self.options.is_vertical {
            (size, reach)
        } else {
            (reach, size)
        };

        let strip = self.view_strip(size, item_scale, opacity);
        let main = self.view_main_button(size, rotation, opacity);

        let button_align_x = match (self.options.is_vertical, self.options.position) {
            (false, Position::Right) => alignment::Horizontal::Right,
            (false, Position::Left) => alignment::Horizontal::Left,
            (true, _) => alignment::Horizontal::Center,
        };

        let main_layer = container(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(button_align_x)
            .align_y(alignment::Vertical::Bottom);

        Stack::new()
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .push(strip)
            .push(main_layer)
            .into()
    }

    /// The pill-shaped scrollable strip of action items. Padding on the
    /// anchored end keeps items from sliding under the main button.
    fn view_strip(&self, size: f32, item_scale: f32, opacity: f32) -> Element<'_, Message> {
        let ripple = faded(self.options.ripple_color, opacity);
        let feedback = Feedback::native();

        let children = self.options.actions.iter().map(|action| {
            item::view(
                action,
                size,
                item_scale,
                ripple,
                feedback,
                opacity,
                Message::ItemPressed(action.key.clone()),
            )
        });

        let (content, direction): (Element<'_, Message>, Direction) = if self.options.is_vertical {
            (
                Column::with_children(children)
                    .align_x(alignment::Horizontal::Center)
                    .into(),
                Direction::Vertical(Scrollbar::hidden()),
            )
        } else {
            (
                Row::with_children(children)
                    .align_y(alignment::Vertical::Center)
                    .into(),
                Direction::Horizontal(Scrollbar::hidden()),
            )
        };

        let padding = if self.options.is_vertical {
            Padding {
                top: 0.0,
                right: 0.0,
                bottom: size,
                left: 0.0,
            }
        } else {
            match self.options.position {
                Position::Right => Padding {
                    top: 0.0,
                    right: size,
                    bottom: 0.0,
                    left: 0.0,
                },
                Position::Left => Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: 0.0,
                    left: size,
                },
            }
        };

        let shadow = Shadow {
            color: faded(self.options.shadow.color, opacity),
            ..self.options.shadow
        };

        container(
            scrollable(content)
                .direction(direction)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .style(styles::strip::strip(
            faded(self.options.tint_color, opacity),
            size / 2.0,
            shadow,
        ))
        .into()
    }

    /// The main circular button: a custom icon when one resolves, the
    /// rotating glyph otherwise. Custom icons do not rotate.
    fn view_main_button(&self, size: f32, rotation: f32, opacity: f32) -> Element<'_, Message> {
        let icon_side = size * self.options.floating_icon_size;
        let custom = icon::resolve(
            self.options.floating_icon.as_ref(),
            Some(icon_side),
            opacity,
            self.options.floating_icon_color,
        );

        let inner: Element<'_, Message> = match custom {
            Some(icon) => icon,
            None => PlusGlyph::new(
                size,
                rotation,
                faded(self.options.floating_icon_color, opacity),
            )
            .into_element(),
        };

        button(
            container(inner)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .padding(0)
        .style(styles::button::action(
            faded(self.options.ripple_color, opacity),
            size / 2.0,
            Feedback::native(),
            1.0,
        ))
        .on_press(Message::MainPressed)
        .into()
    }
}

/// Clears keyboard focus by focusing an id owned by no widget.
fn dismiss_keyboard() -> Task<Message> {
    operation::focus(Id::new(FOCUS_SENTINEL))
}

/// Multiplies the visibility fade into a color's alpha channel.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use iced::Size;

    const FRAME: Duration = Duration::from_millis(FRAME_MILLIS);

    fn fab() -> (FloatingAction, Instant) {
        let now = Instant::now();
        (FloatingAction::new(Options::new(), now), now)
    }

    fn measured_layer() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 800.0))
    }

    #[test]
    fn starts_closed_at_rest_and_visible() {
        let (fab, _) = fab();
        assert!(!fab.is_open());
        assert!(!fab.is_hidden());
        assert!(!fab.is_animating());
        assert_relative_eq!(fab.opacity(), 1.0);
    }

    #[test]
    fn main_press_opens_with_opening_intent() {
        let (mut fab, now) = fab();
        let (event, _) = fab.update(Message::MainPressed, now);

        assert_eq!(event, Event::MainPressed(TransitionIntent::Opening));
        assert!(fab.is_open());
        assert!(fab.is_animating());
    }

    #[test]
    fn second_press_closes_with_closing_intent() {
        let (mut fab, now) = fab();
        fab.update(Message::MainPressed, now);
        let (event, _) = fab.update(Message::MainPressed, now + FRAME);

        assert_eq!(event, Event::MainPressed(TransitionIntent::Closing));
        assert!(!fab.is_open());
    }

    #[test]
    fn unmeasured_press_targets_a_size_multiple() {
        let (mut fab, now) = fab();
        fab.update(Message::MainPressed, now);

        let size = geometry::resting_size(&fab.options, None);
        assert_relative_eq!(fab.expansion.target(), size * 4.0);
    }

    #[test]
    fn measured_press_targets_the_extent() {
        let (mut fab, now) = fab();
        fab.update(Message::Measured(measured_layer()), now);
        fab.update(Message::MainPressed, now + FRAME);

        assert_relative_eq!(fab.expansion.target(), 340.0);
    }

    #[test]
    fn item_press_reports_its_key() {
        let (mut fab, now) = fab();
        let (event, _) = fab.update(Message::ItemPressed("share".into()), now);
        assert_eq!(event, Event::ItemPressed("share".into()));
    }

    #[test]
    fn measurement_alone_never_animates() {
        let (mut fab, now) = fab();
        let (event, _) = fab.update(Message::Measured(measured_layer()), now);

        assert_eq!(event, Event::None);
        assert!(!fab.is_animating());
        assert_relative_eq!(fab.expansion(), 400.0 * 0.13);
    }

    #[test]
    fn measurement_during_flight_retargets_without_snapping() {
        let (mut fab, mut now) = fab();
        fab.update(Message::MainPressed, now);
        now += FRAME;
        fab.update(Message::Tick, now);
        let before = fab.expansion();

        now += FRAME;
        fab.update(Message::Measured(measured_layer()), now);

        assert!(fab.is_animating());
        assert_relative_eq!(fab.expansion(), before);
        assert_relative_eq!(fab.expansion.target(), 340.0);
    }

    #[test]
    fn ticks_settle_the_expansion_on_its_target() {
        let (mut fab, mut now) = fab();
        fab.update(Message::Measured(measured_layer()), now);
        fab.update(Message::MainPressed, now);

        for _ in 0..600 {
            now += FRAME;
            fab.update(Message::Tick, now);
        }

        assert!(!fab.is_animating());
        assert_relative_eq!(fab.expansion(), 340.0);
    }

    #[test]
    fn hiding_fades_out_over_the_fixed_duration() {
        let (mut fab, mut now) = fab();
        fab.set_hidden(true, now);
        assert!(fab.is_hidden());
        assert!(fab.is_animating());

        now += Duration::from_millis(100);
        fab.update(Message::Tick, now);
        assert_relative_eq!(fab.opacity(), 0.5);

        now += Duration::from_millis(100);
        fab.update(Message::Tick, now);
        assert_relative_eq!(fab.opacity(), 0.0);
        assert!(!fab.is_animating());
    }

    #[test]
    fn setting_the_same_hidden_flag_is_a_no_op() {
        let (mut fab, now) = fab();
        fab.set_hidden(false, now);
        assert!(!fab.is_animating());
    }

    #[test]
    fn fade_runs_independently_of_an_open_transition() {
        let (mut fab, mut now) = fab();
        fab.update(Message::Measured(measured_layer()), now);
        fab.update(Message::MainPressed, now);
        fab.set_hidden(true, now);

        now += Duration::from_millis(200);
        fab.update(Message::Tick, now);

        assert_relative_eq!(fab.opacity(), 0.0);
        assert!(fab.is_open());
        assert!(fab.expansion() > geometry::resting_size(&fab.options, fab.layer));
    }

    #[test]
    fn replacing_actions_changes_the_rendered_list() {
        let (mut fab, _) = fab();
        fab.set_actions([Action::new("a"), Action::new("b"), Action::new("c")]);
        assert_eq!(fab.options.actions.len(), 3);
    }

    #[test]
    fn view_builds_in_every_configuration() {
        let now = Instant::now();
        for vertical in [false, true] {
            for position in [Position::Left, Position::Right] {
                for hide_overlay in [false, true] {
                    let options = Options::new()
                        .actions([Action::new("a"), Action::new("b")])
                        .vertical(vertical)
                        .position(position)
                        .hide_overlay(hide_overlay);
                    let mut fab = FloatingAction::new(options, now);
                    fab.update(Message::Measured(measured_layer()), now);
                    let _ = fab.view();
                }
            }
        }
    }
}
