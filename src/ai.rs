// ABOUTME: AI capability interfaces for the deckgen application
// ABOUTME: Content, image and text-transform seams injected into generation and editing

use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Produces the structured slide outline as raw JSON text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(&self, prompt: &str, schema: &Value) -> Result<String>;
}

/// Produces one image for a prompt, returned as a URL or data URI.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str, style: &str) -> Result<String>;
}

/// Rewrites a single piece of slide text according to an instruction.
#[async_trait]
pub trait TextTransformer: Send + Sync {
    async fn transform_text(&self, request: &TextTransformRequest) -> Result<String>;
}

/// Surrounding slide text handed to the transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideContext {
    pub title: String,
    /// The slide's other bullets; the bullet being rewritten is left out.
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTransformRequest {
    pub text: String,
    pub action: String,
    pub context: SlideContext,
}

pub const TITLE_ACTIONS: &[&str] = &[
    "Suggest 3 alternatives",
    "Make it shorter",
    "Make it more engaging",
];

pub const BULLET_ACTIONS: &[&str] = &[
    "Rephrase this point",
    "Expand on this point",
    "Make this point more concise",
    "Simplify the language",
];
