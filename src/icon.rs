// SPDX-License-Identifier: MPL-2.0
//! Icon sources for the main button and the action items.
//!
//! Sources given as paths are classified by extension when the view is
//! built. A source that cannot be rendered is logged and skipped so the
//! button falls back to its built-in glyph instead of breaking the view.

use std::path::{Path, PathBuf};

use iced::widget::image::{self, Image};
use iced::widget::svg::{self, Svg};
use iced::widget::text;
use iced::{Color, ContentFit, Element, Length};

use crate::error::{Error, Result};

/// File extensions rendered through the raster image pipeline.
pub const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// An icon source for the main button or an action item.
#[derive(Debug, Clone)]
pub enum Icon {
    /// A single character rendered as text.
    Glyph(char),
    /// Raster image data already loaded into a handle.
    Image(image::Handle),
    /// Vector image data already loaded into a handle.
    Svg(svg::Handle),
    /// A file on disk, validated when the view is built.
    Path(PathBuf),
}

impl From<char> for Icon {
    fn from(glyph: char) -> Self {
        Self::Glyph(glyph)
    }
}

impl From<image::Handle> for Icon {
    fn from(handle: image::Handle) -> Self {
        Self::Image(handle)
    }
}

impl From<svg::Handle> for Icon {
    fn from(handle: svg::Handle) -> Self {
        Self::Svg(handle)
    }
}

impl From<PathBuf> for Icon {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Icon {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// An icon source checked against the filesystem and ready to render.
enum Resolved {
    Glyph(char),
    Image(image::Handle),
    Svg(svg::Handle),
}

impl Icon {
    fn resolved(&self) -> Result<Resolved> {
        match self {
            Self::Glyph(glyph) => Ok(Resolved::Glyph(*glyph)),
            Self::Image(handle) => Ok(Resolved::Image(handle.clone())),
            Self::Svg(handle) => Ok(Resolved::Svg(handle.clone())),
            Self::Path(path) => {
                let metadata = std::fs::metadata(path)
                    .map_err(|e| Error::Icon(format!("{}: {e}", path.display())))?;
                if !metadata.is_file() {
                    return Err(Error::Icon(format!("{}: not a file", path.display())));
                }

                let extension = path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(str::to_lowercase)
                    .unwrap_or_default();

                match extension.as_str() {
                    "svg" => Ok(Resolved::Svg(svg::Handle::from_path(path))),
                    ext if RASTER_EXTENSIONS.contains(&ext) => {
                        Ok(Resolved::Image(image::Handle::from_path(path)))
                    }
                    _ => Err(Error::Icon(format!(
                        "{}: unsupported extension",
                        path.display()
                    ))),
                }
            }
        }
    }
}

/// Resolve an optional icon source into a renderable element.
///
/// `side` of `None` lets the icon fill its container. `opacity` fades the
/// rendered element; `glyph_color` only applies to character glyphs, which
/// carry no color of their own. Returns `None` when no source was given or
/// the source is invalid; invalid sources warn so the caller can
/// substitute its fallback.
pub(crate) fn resolve<'a, Message: 'a>(
    source: Option<&Icon>,
    side: Option<f32>,
    opacity: f32,
    glyph_color: Color,
) -> Option<Element<'a, Message>> {
    let resolved = match source?.resolved() {
        Ok(resolved) => resolved,
        Err(error) => {
            log::warn!("Ignoring invalid icon: {error}");
            return None;
        }
    };

    let length = side.map_or(Length::Fill, Length::Fixed);

    Some(match resolved {
        Resolved::Glyph(glyph) => {
            let mut label = text(glyph.to_string()).color(Color {
                a: glyph_color.a * opacity,
                ..glyph_color
            });
            if let Some(side) = side {
                label = label.size(side);
            }
            label.into()
        }
        Resolved::Image(handle) => Image::new(handle)
            .content_fit(ContentFit::Contain)
            .opacity(opacity)
            .width(length)
            .height(length)
            .into(),
        Resolved::Svg(handle) => Svg::new(handle)
            .content_fit(ContentFit::Contain)
            .opacity(opacity)
            .width(length)
            .height(length)
            .into(),
    })
}
