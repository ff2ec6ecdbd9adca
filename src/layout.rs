// ABOUTME: Layout definitions for the deckgen application
// ABOUTME: Named layouts, their image placement, and the built-in layout catalog

use crate::errors::DeckError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Where a layout puts the slide image relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImagePosition {
    Left,
    Right,
    Top,
    Bottom,
    OverlayCenter,
    OverlayTop,
    OverlayBottom,
}

impl ImagePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
            ImagePosition::Top => "top",
            ImagePosition::Bottom => "bottom",
            ImagePosition::OverlayCenter => "overlay-center",
            ImagePosition::OverlayTop => "overlay-top",
            ImagePosition::OverlayBottom => "overlay-bottom",
        }
    }

    pub fn is_overlay(&self) -> bool {
        self.as_str().starts_with("overlay")
    }

    /// Whether the image region comes before the text in reading order.
    pub fn image_first(&self) -> bool {
        !matches!(self, ImagePosition::Right | ImagePosition::Bottom)
    }
}

impl fmt::Display for ImagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagePosition {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(ImagePosition::Left),
            "right" => Ok(ImagePosition::Right),
            "top" => Ok(ImagePosition::Top),
            "bottom" => Ok(ImagePosition::Bottom),
            "overlay-center" => Ok(ImagePosition::OverlayCenter),
            "overlay-top" => Ok(ImagePosition::OverlayTop),
            "overlay-bottom" => Ok(ImagePosition::OverlayBottom),
            other => Err(DeckError::ValidationError(format!(
                "Unknown image position: {}",
                other
            ))),
        }
    }
}

/// A named geometric template for a slide.
///
/// The class descriptors are hints for an interactive preview; the exporter
/// only looks at `name` (through the geometry table) and `image_position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: Cow<'static, str>,
    pub image_position: ImagePosition,
    pub class_name: Cow<'static, str>,
    pub image_class_name: Cow<'static, str>,
    pub text_class_name: Cow<'static, str>,
}

impl Layout {
    const fn builtin(
        name: &'static str,
        image_position: ImagePosition,
        class_name: &'static str,
        image_class_name: &'static str,
        text_class_name: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            image_position,
            class_name: Cow::Borrowed(class_name),
            image_class_name: Cow::Borrowed(image_class_name),
            text_class_name: Cow::Borrowed(text_class_name),
        }
    }

    /// Look up a built-in layout by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Layout> {
        LAYOUTS.iter().find(|l| l.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Layout {
    fn default() -> Self {
        LAYOUTS[0].clone()
    }
}

pub static LAYOUTS: &[Layout] = &[
    Layout::builtin(
        "Image Right",
        ImagePosition::Right,
        "flex flex-row",
        "w-1/2 h-full",
        "w-1/2 h-full",
    ),
    Layout::builtin(
        "Image Left",
        ImagePosition::Left,
        "flex flex-row",
        "w-1/2 h-full",
        "w-1/2 h-full",
    ),
    Layout::builtin(
        "Image Top",
        ImagePosition::Top,
        "flex flex-col",
        "w-full h-1/2",
        "w-full h-1/2",
    ),
    Layout::builtin(
        "Image Bottom",
        ImagePosition::Bottom,
        "flex flex-col",
        "w-full h-1/2",
        "w-full h-1/2",
    ),
    Layout::builtin(
        "Text Wide Left",
        ImagePosition::Right,
        "flex flex-row",
        "w-1/3 h-full",
        "w-2/3 h-full",
    ),
    Layout::builtin(
        "Text Wide Right",
        ImagePosition::Left,
        "flex flex-row",
        "w-1/3 h-full",
        "w-2/3 h-full",
    ),
    Layout::builtin(
        "Image Wide Left",
        ImagePosition::Left,
        "flex flex-row",
        "w-2/3 h-full",
        "w-1/3 h-full",
    ),
    Layout::builtin(
        "Image Wide Right",
        ImagePosition::Right,
        "flex flex-row",
        "w-2/3 h-full",
        "w-1/3 h-full",
    ),
    Layout::builtin(
        "Image Top Tall",
        ImagePosition::Top,
        "flex flex-col",
        "w-full h-2/3",
        "w-full h-1/3",
    ),
    Layout::builtin(
        "Image Bottom Tall",
        ImagePosition::Bottom,
        "flex flex-col",
        "w-full h-2/3",
        "w-full h-1/3",
    ),
    Layout::builtin(
        "Text Overlay",
        ImagePosition::OverlayCenter,
        "relative",
        "absolute inset-0",
        "relative z-10 h-full flex items-center justify-center text-center",
    ),
    Layout::builtin(
        "Overlay Top",
        ImagePosition::OverlayTop,
        "relative",
        "absolute inset-0",
        "absolute top-0 left-0 right-0 h-1/2",
    ),
    Layout::builtin(
        "Overlay Bottom",
        ImagePosition::OverlayBottom,
        "relative",
        "absolute inset-0",
        "absolute bottom-0 left-0 right-0 h-1/2",
    ),
];
