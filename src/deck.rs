// ABOUTME: Deck data model for the deckgen application
// ABOUTME: Slides and copy-on-write deck snapshots that share unchanged slides

use crate::errors::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One deck page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    /// Bullet points, in display order.
    pub content: Vec<String>,
    /// Empty when imagery is disabled.
    #[serde(default)]
    pub image_prompt: String,
    /// URL or data URI. Empty means the slide has no image.
    #[serde(default)]
    pub image_asset: String,
    #[serde(default)]
    pub speaker_notes: String,
    /// Only set while an image regeneration for this slide is outstanding.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub image_loading: bool,
}

impl Slide {
    pub fn has_image(&self) -> bool {
        !self.image_asset.is_empty()
    }
}

/// An ordered, immutable snapshot of slides.
///
/// Edits never touch an existing snapshot: they return a new `Deck` that
/// shares every unchanged slide with its predecessor and holds a fresh copy of
/// the edited one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    slides: Vec<Arc<Slide>>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides: slides.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index).map(|s| s.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().map(|s| s.as_ref())
    }

    /// Like `get`, but out-of-range is an error.
    pub fn slide(&self, index: usize) -> Result<&Slide> {
        self.get(index).ok_or(DeckError::SlideIndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Whether two snapshots hold the very same slide allocation at `index`.
    pub fn shares_slide(&self, other: &Deck, index: usize) -> bool {
        match (self.slides.get(index), other.slides.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Produce a new snapshot with slide `index` replaced by the result of `edit`.
    ///
    /// If `edit` fails, no snapshot is produced and `self` is untouched.
    pub(crate) fn update_slide<F>(&self, index: usize, edit: F) -> Result<Deck>
    where
        F: FnOnce(&mut Slide) -> Result<()>,
    {
        let current = self
            .slides
            .get(index)
            .ok_or(DeckError::SlideIndexOutOfRange {
                index,
                len: self.len(),
            })?;

        let mut slide = Slide::clone(current);
        edit(&mut slide)?;

        let mut slides = self.slides.clone();
        slides[index] = Arc::new(slide);
        Ok(Deck { slides })
    }
}

impl FromIterator<Slide> for Deck {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        Deck::new(iter.into_iter().collect())
    }
}
