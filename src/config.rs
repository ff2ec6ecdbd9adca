// ABOUTME: Configuration module for the deckgen application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::generate::{DetailLevel, GenerationConfig, PresentationStyle};
use crate::pptx::{PptxConfig, DEFAULT_OUTPUT_FILE};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CONTENT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Global configuration for the application
pub struct Config {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub content_model: String,
    pub image_model: String,
    pub text_model: String,
    pub request_timeout_ms: u64,
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            content_model: DEFAULT_CONTENT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_CONTENT_MODEL.to_string(),
            request_timeout_ms: 60000, // 60 seconds
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        let request_timeout_ms = env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout_ms);

        Self {
            api_key,
            api_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.api_base_url),
            content_model: env::var("CONTENT_MODEL").unwrap_or(defaults.content_model),
            image_model: env::var("IMAGE_MODEL").unwrap_or(defaults.image_model),
            text_model: env::var("TEXT_MODEL").unwrap_or(defaults.text_model),
            request_timeout_ms,
            output_file: env::var("OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_file),
        }
    }

    /// Get a generation configuration with defaults
    #[allow(clippy::too_many_arguments)]
    pub fn get_generation_config(
        &self,
        slide_count: Option<usize>,
        detail_level: Option<DetailLevel>,
        presentation_style: Option<PresentationStyle>,
        target_audience: Option<String>,
        brand_name: Option<String>,
        key_takeaway: Option<String>,
        additional_keywords: Option<String>,
        tone: Option<String>,
        image_style: Option<String>,
        include_images: Option<bool>,
    ) -> GenerationConfig {
        let defaults = GenerationConfig::default();
        GenerationConfig {
            slide_count: slide_count.unwrap_or(defaults.slide_count),
            detail_level: detail_level.unwrap_or(defaults.detail_level),
            presentation_style: presentation_style.unwrap_or(defaults.presentation_style),
            target_audience: target_audience.unwrap_or(defaults.target_audience),
            brand_name: brand_name.unwrap_or(defaults.brand_name),
            key_takeaway: key_takeaway.unwrap_or(defaults.key_takeaway),
            additional_keywords: additional_keywords.unwrap_or(defaults.additional_keywords),
            tone: tone.unwrap_or(defaults.tone),
            image_style: image_style.unwrap_or(defaults.image_style),
            include_images: include_images.unwrap_or(defaults.include_images),
        }
    }

    /// Get a PPTX configuration with defaults
    pub fn get_pptx_config(&self, title: Option<String>, aspect_ratio: Option<String>) -> PptxConfig {
        PptxConfig {
            title: title.unwrap_or_else(|| "Presentation".to_string()),
            aspect_ratio: aspect_ratio.unwrap_or_else(|| "16:9".to_string()),
        }
    }
}
