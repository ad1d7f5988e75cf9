// SPDX-License-Identifier: MPL-2.0
//! Sizing math for the floating action layer.
//!
//! Everything here is a pure function of the options and the last measured
//! layer rectangle. Before the first measurement every quantity falls back
//! to a multiple of the resting size, so no range is ever degenerate.

use iced::Rectangle;

use crate::animation::Range;
use crate::fab::options::{defaults, Options};

/// Diameter of the main button at rest.
///
/// An explicit `size` option wins; otherwise the diameter derives from the
/// measured layer width, or the placeholder before any measurement.
pub(crate) fn resting_size(options: &Options, layer: Option<Rectangle>) -> f32 {
    if let Some(size) = options.size {
        return size;
    }

    match layer {
        Some(bounds) => {
            let derived = bounds.width * defaults::SIZE_FRACTION;
            if derived.is_finite() && derived > 0.0 {
                derived
            } else {
                defaults::PLACEHOLDER_SIZE
            }
        }
        None => defaults::PLACEHOLDER_SIZE,
    }
}

/// Measured extent the strip grows toward, along its orientation axis.
///
/// `None` until the layer has produced a usable measurement.
pub(crate) fn full_extent(options: &Options, layer: Option<Rectangle>) -> Option<f32> {
    let bounds = layer?;
    let extent = if options.is_vertical {
        bounds.height * defaults::VERTICAL_EXTENT_FRACTION
    } else {
        bounds.width * defaults::HORIZONTAL_EXTENT_FRACTION
    };

    (extent.is_finite() && extent > 0.0).then_some(extent)
}

/// Expansion target for an opening transition.
pub(crate) fn extent_target(size: f32, extent: Option<f32>) -> f32 {
    extent.unwrap_or(size * 4.0)
}

/// Rotation of the fallback glyph as a function of the expansion value,
/// in degrees.
pub(crate) fn rotation_range(size: f32, extent: Option<f32>) -> Range {
    let upper = extent.map_or(size * 2.0, |extent| extent / 2.0);
    Range::new((size, upper), (0.0, defaults::ROTATION_DEGREES))
}

/// Scale of the action items as a function of the expansion value.
pub(crate) fn item_scale_range(size: f32, extent: Option<f32>) -> Range {
    let lower = extent.map_or(size * 2.0, |extent| extent / 1.5);
    let upper = extent.unwrap_or(size * 4.0);
    Range::new((lower, upper), (0.0, 1.0))
}

/// Scale of the dimming overlay as a function of the expansion value.
pub(crate) fn overlay_scale_range(size: f32, extent: Option<f32>) -> Range {
    let upper = extent.unwrap_or(size * 2.0);
    Range::new((size, upper), (0.0, defaults::OVERLAY_SCALE_MAX))
}
