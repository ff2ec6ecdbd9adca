// ABOUTME: HTML preview module for the deckgen application
// ABOUTME: Renders a deck as static HTML from the same regions the PPTX export uses

use crate::asset::ImageAsset;
use crate::deck::{Deck, Slide};
use crate::errors::{DeckError, Result};
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::regions::{resolve_regions, RegionKind};
use crate::theme::Theme;
use crate::utils;
use log::info;
use quick_xml::escape::escape;
use std::fs;
use std::path::Path;

const PREVIEW_CSS: &str = r#"body { margin: 0; background: #0f172a; font-family: Calibri, Arial, sans-serif; }
.slide { position: relative; width: 1280px; height: 720px; margin: 24px auto; overflow: hidden; }
.region { position: absolute; box-sizing: border-box; }
.region img { width: 100%; height: 100%; object-fit: cover; }
.title { font-size: 48px; font-weight: bold; margin: 0; }
.content { list-style: none; margin: 0; padding: 0; font-size: 24px; }
.content li { margin-bottom: 12px; }
.content li::before { content: "\25CF"; color: var(--bullet); margin-right: 16px; }
.notes { display: none; }"#;

fn position_style(rect: &Rect) -> String {
    format!(
        "left: {}%; top: {}%; width: {}%; height: {}%;",
        rect.x, rect.y, rect.w, rect.h
    )
}

fn slide_html(slide: &Slide, theme: &Theme, layout: &Layout, include_images: bool) -> String {
    let regions = resolve_regions(theme, layout, slide, include_images);
    let mut html = format!(
        "<section class=\"slide\" data-geometry=\"{}\" style=\"background: #{};\">\n",
        regions.geometry, regions.background
    );

    for region in &regions.regions {
        let position = position_style(&region.rect);
        match region.kind {
            RegionKind::Image => {
                if let Some(src) = ImageAsset::browser_src(&slide.image_asset) {
                    html.push_str(&format!(
                        "  <div class=\"region image\" style=\"{}\"><img src=\"{}\" alt=\"{}\"></div>\n",
                        position,
                        escape(src),
                        escape(slide.image_prompt.as_str())
                    ));
                }
            }
            RegionKind::Overlay { fill, transparency } => {
                let opacity = f64::from(100 - transparency.min(100)) / 100.0;
                html.push_str(&format!(
                    "  <div class=\"region overlay\" style=\"{} background: #{}; opacity: {:.2};\"></div>\n",
                    position, fill, opacity
                ));
            }
            RegionKind::Title { color } => {
                html.push_str(&format!(
                    "  <div class=\"region\" style=\"{}\"><h2 class=\"title\" style=\"color: #{};\">{}</h2></div>\n",
                    position,
                    color,
                    escape(slide.title.as_str())
                ));
            }
            RegionKind::Content {
                text_color,
                bullet_color,
            } => {
                html.push_str(&format!(
                    "  <div class=\"region\" style=\"{}\"><ul class=\"content\" style=\"color: #{}; --bullet: #{};\">",
                    position, text_color, bullet_color
                ));
                for point in &slide.content {
                    html.push_str(&format!("<li>{}</li>", escape(point.as_str())));
                }
                html.push_str("</ul></div>\n");
            }
        }
    }

    if !slide.speaker_notes.is_empty() {
        html.push_str(&format!(
            "  <aside class=\"notes\">{}</aside>\n",
            escape(slide.speaker_notes.as_str())
        ));
    }
    html.push_str("</section>\n");
    html
}

/// Generate a standalone HTML preview of `deck`.
pub fn generate_preview_html(
    deck: &Deck,
    theme: &Theme,
    layout: &Layout,
    include_images: bool,
) -> String {
    info!("Generating HTML preview for {} slides", deck.len());

    let title = deck
        .get(0)
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Presentation");

    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(&format!("<title>{}</title>\n", escape(title)));
    html_doc.push_str(&format!("<style>{}</style>\n", PREVIEW_CSS));
    html_doc.push_str("</head>\n<body>\n");

    for slide in deck.iter() {
        html_doc.push_str(&slide_html(slide, theme, layout, include_images));
    }

    html_doc.push_str("</body>\n</html>");
    html_doc
}

/// Write an HTML preview to disk
pub fn write_preview_html(html: &str, output_file: &Path) -> Result<()> {
    utils::ensure_parent_directory_exists(output_file)?;
    fs::write(output_file, html).map_err(DeckError::FileReadError)?;
    info!("HTML preview written to {:?}", output_file);
    Ok(())
}
