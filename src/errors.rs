// ABOUTME: Error types for the deckgen application
// ABOUTME: Provides structured error handling for generation, editing and export

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Please enter a topic for your presentation.")]
    EmptyTopic,

    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("Failed to generate presentation content: {0}")]
    ContentGeneration(String),

    #[error("Image generation error: {0}")]
    ImageGeneration(String),

    #[error("Text transform error: {0}")]
    TextTransform(String),

    #[error("Slide index {index} is out of range (deck has {len} slides)")]
    SlideIndexOutOfRange { index: usize, len: usize },

    #[error("Bullet index {index} is out of range on slide {slide} ({len} bullets)")]
    BulletIndexOutOfRange { slide: usize, index: usize, len: usize },

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
