// SPDX-License-Identifier: MPL-2.0
//! Presentation options for the floating action layer.

use iced::{Color, Shadow};

use crate::icon::Icon;

/// Screen edge the main button anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Anchor to the left edge; the strip grows rightwards.
    Left,
    /// Anchor to the right edge; the strip grows leftwards.
    #[default]
    Right,
}

/// An action rendered as a secondary button in the expanded strip.
#[derive(Debug, Clone)]
pub struct Action {
    pub(crate) key: String,
    pub(crate) icon: Option<Icon>,
}

impl Action {
    /// Creates an action reported under `key` when its button is pressed.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            icon: None,
        }
    }

    /// Sets the icon shown on the action's button.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The identifier reported when this action is pressed.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Configuration for the floating action layer.
///
/// Every field has a documented default; see [`defaults`].
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) actions: Vec<Action>,
    pub(crate) size: Option<f32>,
    pub(crate) is_vertical: bool,
    pub(crate) is_hidden: bool,
    pub(crate) tint_color: Color,
    pub(crate) overlay_color: Color,
    pub(crate) hide_overlay: bool,
    pub(crate) position: Position,
    pub(crate) bottom_space: f32,
    pub(crate) horizontal_space: f32,
    pub(crate) floating_icon: Option<Icon>,
    pub(crate) floating_icon_size: f32,
    pub(crate) floating_icon_color: Color,
    pub(crate) ripple_color: Color,
    pub(crate) dismiss_keyboard_on_press: bool,
    pub(crate) shadow: Shadow,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            size: None,
            is_vertical: false,
            is_hidden: false,
            tint_color: defaults::TINT,
            overlay_color: defaults::OVERLAY,
            hide_overlay: false,
            position: Position::default(),
            bottom_space: defaults::EDGE_SPACING,
            horizontal_space: defaults::EDGE_SPACING,
            floating_icon: None,
            floating_icon_size: defaults::ICON_FRACTION,
            floating_icon_color: defaults::GLYPH,
            ripple_color: defaults::RIPPLE,
            dismiss_keyboard_on_press: false,
            shadow: defaults::STRIP_SHADOW,
        }
    }
}

impl Options {
    /// Creates options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the actions rendered in the expanded strip, in order.
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Sets the main button diameter. Without an explicit size the button
    /// derives it from the measured layer width.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Expands into a vertical column instead of a horizontal row.
    pub fn vertical(mut self, is_vertical: bool) -> Self {
        self.is_vertical = is_vertical;
        self
    }

    /// Starts hidden; the visibility fade follows this flag at runtime.
    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    /// Sets the expanded strip's background color.
    pub fn tint_color(mut self, color: Color) -> Self {
        self.tint_color = color;
        self
    }

    /// Sets the dimming overlay's color.
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    /// Suppresses the dimming overlay entirely.
    pub fn hide_overlay(mut self, hide: bool) -> Self {
        self.hide_overlay = hide;
        self
    }

    /// Sets the screen edge the button anchors to.
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the offset from the bottom edge.
    pub fn bottom_space(mut self, space: f32) -> Self {
        self.bottom_space = space;
        self
    }

    /// Sets the offset from the anchored side edge.
    pub fn horizontal_space(mut self, space: f32) -> Self {
        self.horizontal_space = space;
        self
    }

    /// Sets a custom main-button icon. Custom icons do not rotate; the
    /// built-in glyph does.
    pub fn floating_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.floating_icon = Some(icon.into());
        self
    }

    /// Sets the custom icon's size as a fraction of the button diameter.
    pub fn floating_icon_size(mut self, fraction: f32) -> Self {
        self.floating_icon_size = fraction;
        self
    }

    /// Sets the fallback glyph's color.
    pub fn floating_icon_color(mut self, color: Color) -> Self {
        self.floating_icon_color = color;
        self
    }

    /// Sets the press-feedback color for the main button and the items.
    pub fn ripple_color(mut self, color: Color) -> Self {
        self.ripple_color = color;
        self
    }

    /// Clears keyboard focus when the main button is pressed.
    pub fn dismiss_keyboard_on_press(mut self, dismiss: bool) -> Self {
        self.dismiss_keyboard_on_press = dismiss;
        self
    }

    /// Replaces the expanded strip's shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }
}

/// Documented default values, kept as named constants so the styles and
/// geometry stay in sync with the public documentation.
pub mod defaults {
    use iced::{Color, Shadow, Vector};

    /// Main button diameter as a fraction of the measured layer width.
    pub const SIZE_FRACTION: f32 = 0.13;

    /// Diameter used before the layer has ever been measured.
    pub const PLACEHOLDER_SIZE: f32 = 56.0;

    /// Expanded extent as a fraction of the layer width (horizontal).
    pub const HORIZONTAL_EXTENT_FRACTION: f32 = 0.85;

    /// Expanded extent as a fraction of the layer height (vertical).
    pub const VERTICAL_EXTENT_FRACTION: f32 = 0.40;

    /// Offset from the bottom and side edges.
    pub const EDGE_SPACING: f32 = 10.0;

    /// Custom main-icon size as a fraction of the button diameter.
    pub const ICON_FRACTION: f32 = 0.5;

    /// Opacity applied to a tint-feedback press on an action item.
    pub const PRESSED_OPACITY: f32 = 0.8;

    /// Upper bound of the overlay scale mapping.
    pub const OVERLAY_SCALE_MAX: f32 = 60.0;

    /// Glyph rotation at full expansion, in degrees.
    pub const ROTATION_DEGREES: f32 = 45.0;

    /// Expanded strip background.
    pub const TINT: Color = Color::from_rgba(24.0 / 255.0, 24.0 / 255.0, 24.0 / 255.0, 0.5);

    /// Dimming overlay color.
    pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

    /// Press-feedback color.
    pub const RIPPLE: Color = Color::from_rgba(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 0.1);

    /// Fallback glyph color.
    pub const GLYPH: Color = Color::from_rgba(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

    /// Expanded strip shadow.
    pub const STRIP_SHADOW: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
        offset: Vector { x: 7.0, y: 7.0 },
        blur_radius: 17.0,
    };
}

const _: () = {
    assert!(defaults::SIZE_FRACTION > 0.0 && defaults::SIZE_FRACTION < 1.0);
    assert!(defaults::HORIZONTAL_EXTENT_FRACTION > defaults::SIZE_FRACTION);
    assert!(defaults::VERTICAL_EXTENT_FRACTION > 0.0 && defaults::VERTICAL_EXTENT_FRACTION < 1.0);
    assert!(defaults::PLACEHOLDER_SIZE > 0.0);
    assert!(defaults::ICON_FRACTION > 0.0 && defaults::ICON_FRACTION <= 1.0);
    assert!(defaults::PRESSED_OPACITY > 0.0 && defaults::PRESSED_OPACITY < 1.0);
    assert!(defaults::OVERLAY_SCALE_MAX > 1.0);
    assert!(defaults::ROTATION_DEGREES > 0.0 && defaults::ROTATION_DEGREES <= 90.0);
};
