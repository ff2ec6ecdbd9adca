// ABOUTME: Library module for the deckgen program.
// ABOUTME: Contains deck generation, editing, layout resolution and PPTX export.

// Reexport modules
pub mod ai;
pub mod asset;
pub mod config;
pub mod deck;
pub mod edit;
pub mod errors;
pub mod gemini;
pub mod generate;
pub mod geometry;
pub mod layout;
pub mod pptx;
pub mod preview;
pub mod regions;
pub mod style;
pub mod theme;
pub mod utils;

// Reexport common types and functions
pub use ai::{ContentGenerator, ImageGenerator, SlideContext, TextTransformRequest, TextTransformer};
pub use config::Config;
pub use deck::{Deck, Slide};
pub use edit::{apply_ai_text_transform, regenerate_image, SlideField, TransformTarget};
pub use errors::{DeckError, Result};
pub use gemini::GeminiClient;
pub use generate::{
    generate_deck, DetailLevel, GenerationConfig, GenerationOutcome, PresentationStyle,
    ProgressSink, SilentProgress,
};
pub use layout::{ImagePosition, Layout, LAYOUTS};
pub use pptx::{export_deck, write_pptx, PptxConfig, DEFAULT_OUTPUT_FILE};
pub use preview::generate_preview_html;
pub use regions::{resolve_regions, Region, RegionKind, RegionSet};
pub use style::{resolve_color, HexColor, StyleAxis};
pub use theme::{Theme, THEMES};

#[cfg(test)]
mod tests;
