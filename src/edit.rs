// ABOUTME: Deck editing operations for the deckgen application
// ABOUTME: Structural and AI-assisted edits, each returning a new deck snapshot

use crate::ai::{ImageGenerator, SlideContext, TextTransformRequest, TextTransformer};
use crate::deck::{Deck, Slide};
use crate::errors::{DeckError, Result};
use log::{info, warn};

/// Text appended by `add_bullet`.
pub const NEW_BULLET: &str = "New bullet point";

/// An editable text field of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideField {
    Title,
    Bullet(usize),
    SpeakerNotes,
}

/// Target of an AI text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformTarget {
    Title,
    Bullet(usize),
}

fn check_bullet(slide: &Slide, slide_index: usize, bullet: usize) -> Result<()> {
    if bullet >= slide.content.len() {
        return Err(DeckError::BulletIndexOutOfRange {
            slide: slide_index,
            index: bullet,
            len: slide.content.len(),
        });
    }
    Ok(())
}

impl Deck {
    pub fn set_field(&self, index: usize, field: SlideField, value: &str) -> Result<Deck> {
        self.update_slide(index, |slide| {
            match field {
                SlideField::Title => slide.title = value.to_string(),
                SlideField::SpeakerNotes => slide.speaker_notes = value.to_string(),
                SlideField::Bullet(i) => {
                    check_bullet(slide, index, i)?;
                    slide.content[i] = value.to_string();
                }
            }
            Ok(())
        })
    }

    /// Append a fresh placeholder bullet.
    ///
    /// The placeholder is always `NEW_BULLET`; the deck keeps no history, so
    /// removing a bullet that still reads `NEW_BULLET` and adding one yields
    /// the same text again.
    pub fn add_bullet(&self, index: usize) -> Result<Deck> {
        self.update_slide(index, |slide| {
            slide.content.push(NEW_BULLET.to_string());
            Ok(())
        })
    }

    pub fn remove_bullet(&self, index: usize, bullet: usize) -> Result<Deck> {
        self.update_slide(index, |slide| {
            check_bullet(slide, index, bullet)?;
            slide.content.remove(bullet);
            Ok(())
        })
    }

    /// Move bullet `from` to position `to`, keeping the others in order.
    pub fn reorder_bullet(&self, index: usize, from: usize, to: usize) -> Result<Deck> {
        self.update_slide(index, |slide| {
            check_bullet(slide, index, from)?;
            check_bullet(slide, index, to)?;
            let moved = slide.content.remove(from);
            slide.content.insert(to, moved);
            Ok(())
        })
    }

    /// Mark slide `index` as loading and describe the image request to run.
    pub fn begin_image_regeneration(
        &self,
        index: usize,
        image_style: &str,
    ) -> Result<(Deck, ImageRegeneration)> {
        let slide = self.slide(index)?;
        let prompt = if slide.image_prompt.trim().is_empty() {
            // Fall back to the slide text when no prompt was generated
            std::iter::once(slide.title.as_str())
                .chain(slide.content.iter().map(String::as_str))
                .filter(|s| !s.trim().is_empty())
                .collect::<Vec<_>>()
                .join(". ")
        } else {
            slide.image_prompt.clone()
        };

        let deck = self.update_slide(index, |slide| {
            slide.image_loading = true;
            Ok(())
        })?;
        let request = ImageRegeneration {
            slide_index: index,
            prompt,
            style: image_style.to_string(),
        };
        Ok((deck, request))
    }

    /// Apply the outcome of an image request to this snapshot.
    ///
    /// The loading flag always clears. On failure the existing image is kept.
    /// Overlapping requests for one slide are not ordered: whichever finishes
    /// last wins.
    pub fn complete_image_regeneration(
        &self,
        index: usize,
        outcome: Result<String>,
    ) -> Result<Deck> {
        self.update_slide(index, |slide| {
            match outcome {
                Ok(asset) if !asset.trim().is_empty() => {
                    info!("Regenerated image for slide {}", index + 1);
                    slide.image_asset = asset;
                }
                Ok(_) => warn!("Image regeneration for slide {} returned nothing", index + 1),
                Err(e) => warn!("Failed to regenerate image for slide {}: {}", index + 1, e),
            }
            slide.image_loading = false;
            Ok(())
        })
    }

    /// Build the request for an AI rewrite of one piece of slide text.
    pub fn text_transform_request(
        &self,
        index: usize,
        target: TransformTarget,
        action: &str,
    ) -> Result<TextTransformRequest> {
        let slide = self.slide(index)?;
        let (text, bullets) = match target {
            TransformTarget::Title => (slide.title.clone(), slide.content.clone()),
            TransformTarget::Bullet(i) => {
                check_bullet(slide, index, i)?;
                let siblings = slide
                    .content
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, b)| b.clone())
                    .collect();
                (slide.content[i].clone(), siblings)
            }
        };
        Ok(TextTransformRequest {
            text,
            action: action.to_string(),
            context: SlideContext {
                title: slide.title.clone(),
                bullets,
            },
        })
    }

    /// Replace the target text with a transformer's output.
    pub fn apply_text_transform(
        &self,
        index: usize,
        target: TransformTarget,
        output: &str,
    ) -> Result<Deck> {
        let text = clean_transform_output(output);
        if text.is_empty() {
            return Err(DeckError::TextTransform(
                "The transform produced no text".to_string(),
            ));
        }
        let field = match target {
            TransformTarget::Title => SlideField::Title,
            TransformTarget::Bullet(i) => SlideField::Bullet(i),
        };
        self.set_field(index, field, &text)
    }
}

/// Trim whitespace and any quotes wrapped around the whole reply.
fn clean_transform_output(output: &str) -> String {
    let trimmed = output.trim();
    let unquoted = ['"', '\'', '`', '\u{201C}']
        .iter()
        .find_map(|&open| {
            let close = if open == '\u{201C}' { '\u{201D}' } else { open };
            trimmed
                .strip_prefix(open)
                .and_then(|s| s.strip_suffix(close))
        })
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

/// A pending image request for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRegeneration {
    pub slide_index: usize,
    pub prompt: String,
    pub style: String,
}

impl ImageRegeneration {
    pub async fn run(&self, images: &dyn ImageGenerator) -> Result<String> {
        images.generate_image(&self.prompt, &self.style).await
    }
}

/// Regenerate one slide's image end to end.
///
/// Callers that need to show the loading state should use
/// `begin_image_regeneration` / `complete_image_regeneration` directly.
pub async fn regenerate_image(
    deck: &Deck,
    index: usize,
    images: &dyn ImageGenerator,
    image_style: &str,
) -> Result<Deck> {
    let (loading, request) = deck.begin_image_regeneration(index, image_style)?;
    let outcome = request.run(images).await;
    loading.complete_image_regeneration(index, outcome)
}

/// Rewrite a title or bullet with the text transformer.
///
/// On failure the error is returned and `deck` remains the current snapshot.
pub async fn apply_ai_text_transform(
    deck: &Deck,
    index: usize,
    target: TransformTarget,
    action: &str,
    transformer: &dyn TextTransformer,
) -> Result<Deck> {
    let request = deck.text_transform_request(index, target, action)?;
    info!("Applying '{}' to slide {}", action, index + 1);
    let output = transformer
        .transform_text(&request)
        .await
        .map_err(|e| match e {
            DeckError::TextTransform(_) => e,
            other => DeckError::TextTransform(other.to_string()),
        })?;
    deck.apply_text_transform(index, target, &output)
}
