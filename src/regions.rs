// ABOUTME: Layout resolution for the deckgen application
// ABOUTME: Turns (theme, layout, slide, image flag) into positioned, styled regions

use crate::deck::Slide;
use crate::geometry::{self, LayoutGeometry, Rect};
use crate::layout::Layout;
use crate::style::HexColor;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Image,
    Overlay {
        fill: HexColor,
        transparency: u8,
    },
    Title {
        color: HexColor,
    },
    Content {
        text_color: HexColor,
        bullet_color: HexColor,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub rect: Rect,
}

/// Every region of one slide, in paint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSet {
    /// Geometry entry the regions were taken from.
    pub geometry: &'static str,
    pub background: HexColor,
    pub regions: Vec<Region>,
}

impl RegionSet {
    pub fn image(&self) -> Option<Rect> {
        self.find(|k| matches!(k, RegionKind::Image))
    }

    pub fn overlay(&self) -> Option<Rect> {
        self.find(|k| matches!(k, RegionKind::Overlay { .. }))
    }

    pub fn title(&self) -> Option<Rect> {
        self.find(|k| matches!(k, RegionKind::Title { .. }))
    }

    pub fn content(&self) -> Option<Rect> {
        self.find(|k| matches!(k, RegionKind::Content { .. }))
    }

    pub fn is_text_only(&self) -> bool {
        self.image().is_none()
    }

    fn find(&self, pred: impl Fn(&RegionKind) -> bool) -> Option<Rect> {
        self.regions.iter().find(|r| pred(&r.kind)).map(|r| r.rect)
    }
}

/// Resolve the regions to draw for `slide`.
///
/// Precedence, first match wins:
/// 1. no image or images disabled: the full-width text geometry, whatever the layout;
/// 2. overlay layouts: full-frame image, translucent panel, then light text;
/// 3. otherwise: image and text side by side, ordered by the layout's image position.
///
/// Cases 2 and 3 differ only in the geometry table entry they read.
pub fn resolve_regions(
    theme: &Theme,
    layout: &Layout,
    slide: &Slide,
    include_images: bool,
) -> RegionSet {
    let palette = theme.palette();

    let show_image = include_images && slide.has_image();
    let geometry: &LayoutGeometry = if show_image {
        geometry::geometry_for(&layout.name, layout.image_position)
    } else {
        geometry::full_width()
    };

    let title = Region {
        kind: RegionKind::Title {
            color: geometry.title_color.unwrap_or(palette.title),
        },
        rect: geometry.title,
    };
    let content = Region {
        kind: RegionKind::Content {
            text_color: geometry.content_color.unwrap_or(palette.text),
            bullet_color: geometry
                .title_color
                .map(|_| HexColor::WHITE)
                .unwrap_or(palette.bullet),
        },
        rect: geometry.content,
    };

    let mut regions = Vec::with_capacity(4);
    let image = geometry.image.filter(|_| show_image).map(|rect| Region {
        kind: RegionKind::Image,
        rect,
    });

    match image {
        Some(image) if layout.image_position.image_first() || geometry.overlay.is_some() => {
            regions.push(image);
            if let Some(panel) = geometry.overlay {
                regions.push(Region {
                    kind: RegionKind::Overlay {
                        fill: panel.fill,
                        transparency: panel.transparency,
                    },
                    rect: panel.rect,
                });
            }
            regions.push(title);
            regions.push(content);
        }
        Some(image) => {
            regions.push(title);
            regions.push(content);
            regions.push(image);
        }
        None => {
            regions.push(title);
            regions.push(content);
        }
    }

    RegionSet {
        geometry: geometry.name,
        background: palette.background,
        regions,
    }
}
