// ABOUTME: Layout geometry table for the deckgen application
// ABOUTME: Relative regions (in percent of the frame) for every named layout

use crate::layout::ImagePosition;
use crate::style::HexColor;
use log::warn;

/// Name of the dedicated text-only geometry entry.
pub const FULL_WIDTH: &str = "full-width";

/// Geometry used when a layout name has no table entry, keyed by where the
/// layout wants its image.
pub fn fallback_layout(position: ImagePosition) -> &'static str {
    match position {
        ImagePosition::Left => "Image Left",
        ImagePosition::Right => "Image Right",
        ImagePosition::Top => "Image Top",
        ImagePosition::Bottom => "Image Bottom",
        ImagePosition::OverlayCenter => "Text Overlay",
        ImagePosition::OverlayTop => "Overlay Top",
        ImagePosition::OverlayBottom => "Overlay Bottom",
    }
}

/// A rectangle in percent of the slide frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const FULL_FRAME: Rect = Rect::pct(0, 0, 100, 100);

    pub const fn pct(x: u16, y: u16, w: u16, h: u16) -> Self {
        Rect { x, y, w, h }
    }

    /// Scale to absolute units for a frame of `cx` by `cy`.
    pub fn scale(&self, cx: u64, cy: u64) -> (u64, u64, u64, u64) {
        (
            cx * self.x as u64 / 100,
            cy * self.y as u64 / 100,
            cx * self.w as u64 / 100,
            cy * self.h as u64 / 100,
        )
    }
}

/// Translucent panel drawn between the image and the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayBox {
    pub rect: Rect,
    pub fill: HexColor,
    /// 0 = opaque, 100 = fully transparent.
    pub transparency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub name: &'static str,
    pub title: Rect,
    pub content: Rect,
    pub image: Option<Rect>,
    pub overlay: Option<OverlayBox>,
    /// Overlay layouts force light text regardless of theme.
    pub title_color: Option<HexColor>,
    pub content_color: Option<HexColor>,
}

const OVERLAY_TITLE: Option<HexColor> = Some(HexColor::WHITE);
const OVERLAY_CONTENT: Option<HexColor> = Some(HexColor::rgb(0xF1, 0xF5, 0xF9));

const fn side(name: &'static str, image: Rect, title: Rect, content: Rect) -> LayoutGeometry {
    LayoutGeometry {
        name,
        title,
        content,
        image: Some(image),
        overlay: None,
        title_color: None,
        content_color: None,
    }
}

const fn overlay(
    name: &'static str,
    panel: Rect,
    transparency: u8,
    title: Rect,
    content: Rect,
) -> LayoutGeometry {
    LayoutGeometry {
        name,
        title,
        content,
        image: Some(Rect::FULL_FRAME),
        overlay: Some(OverlayBox {
            rect: panel,
            fill: HexColor::BLACK,
            transparency,
        }),
        title_color: OVERLAY_TITLE,
        content_color: OVERLAY_CONTENT,
    }
}

pub static GEOMETRY: &[LayoutGeometry] = &[
    side(
        "Image Right",
        Rect::pct(52, 15, 45, 70),
        Rect::pct(5, 15, 45, 15),
        Rect::pct(5, 35, 45, 50),
    ),
    side(
        "Image Left",
        Rect::pct(5, 15, 45, 70),
        Rect::pct(52, 15, 45, 15),
        Rect::pct(52, 35, 45, 50),
    ),
    side(
        "Image Top",
        Rect::pct(5, 10, 90, 45),
        Rect::pct(5, 60, 90, 10),
        Rect::pct(5, 70, 90, 25),
    ),
    side(
        "Image Bottom",
        Rect::pct(5, 50, 90, 45),
        Rect::pct(5, 10, 90, 10),
        Rect::pct(5, 20, 90, 25),
    ),
    // text 2/3, image 1/3
    side(
        "Text Wide Left",
        Rect::pct(68, 15, 27, 70),
        Rect::pct(5, 15, 60, 15),
        Rect::pct(5, 35, 60, 50),
    ),
    side(
        "Text Wide Right",
        Rect::pct(5, 15, 27, 70),
        Rect::pct(35, 15, 60, 15),
        Rect::pct(35, 35, 60, 50),
    ),
    // image 2/3, text 1/3
    side(
        "Image Wide Left",
        Rect::pct(5, 15, 60, 70),
        Rect::pct(68, 15, 27, 15),
        Rect::pct(68, 35, 27, 50),
    ),
    side(
        "Image Wide Right",
        Rect::pct(35, 15, 60, 70),
        Rect::pct(5, 15, 27, 15),
        Rect::pct(5, 35, 27, 50),
    ),
    side(
        "Image Top Tall",
        Rect::pct(5, 10, 90, 60),
        Rect::pct(5, 75, 90, 8),
        Rect::pct(5, 83, 90, 15),
    ),
    side(
        "Image Bottom Tall",
        Rect::pct(5, 35, 90, 60),
        Rect::pct(5, 10, 90, 8),
        Rect::pct(5, 18, 90, 15),
    ),
    overlay(
        "Text Overlay",
        Rect::FULL_FRAME,
        50,
        Rect::pct(5, 25, 90, 20),
        Rect::pct(5, 45, 90, 45),
    ),
    overlay(
        "Overlay Top",
        Rect::pct(0, 0, 100, 50),
        30,
        Rect::pct(5, 5, 90, 15),
        Rect::pct(5, 20, 90, 25),
    ),
    overlay(
        "Overlay Bottom",
        Rect::pct(0, 50, 100, 50),
        30,
        Rect::pct(5, 55, 90, 15),
        Rect::pct(5, 70, 90, 25),
    ),
    LayoutGeometry {
        name: FULL_WIDTH,
        title: Rect::pct(5, 10, 90, 15),
        content: Rect::pct(5, 30, 90, 60),
        image: None,
        overlay: None,
        title_color: None,
        content_color: None,
    },
];

/// Exact lookup by layout name.
pub fn lookup(name: &str) -> Option<&'static LayoutGeometry> {
    GEOMETRY.iter().find(|g| g.name == name)
}

/// The text-only geometry.
pub fn full_width() -> &'static LayoutGeometry {
    lookup(FULL_WIDTH).unwrap_or(&GEOMETRY[GEOMETRY.len() - 1])
}

/// Lookup by layout name, falling back to the built-in geometry for the
/// layout's image position.
pub fn geometry_for(name: &str, position: ImagePosition) -> &'static LayoutGeometry {
    if let Some(geometry) = lookup(name) {
        return geometry;
    }
    let fallback = fallback_layout(position);
    warn!(
        "No geometry for layout '{}'. Using '{}' instead.",
        name, fallback
    );
    // Every fallback name is present in GEOMETRY above
    lookup(fallback).unwrap_or(&GEOMETRY[0])
}
