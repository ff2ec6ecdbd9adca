// ABOUTME: Deck generation pipeline for the deckgen application
// ABOUTME: Builds the content request, fans out image requests, and assembles the deck

use crate::ai::{ContentGenerator, ImageGenerator};
use crate::deck::{Deck, Slide};
use crate::errors::{DeckError, Result};
use futures::future::join_all;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub const MIN_SLIDES: usize = 3;
pub const MAX_SLIDES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    Basic,
    Standard,
    Detailed,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Basic => "Basic",
            DetailLevel::Standard => "Standard",
            DetailLevel::Detailed => "Detailed",
        }
    }

    pub fn all() -> Vec<DetailLevel> {
        vec![DetailLevel::Basic, DetailLevel::Standard, DetailLevel::Detailed]
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = DeckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DetailLevel::all()
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeckError::InvalidConfig(format!("Unknown detail level: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStyle {
    Professional,
    Conversational,
    Academic,
    Business,
    Casual,
    Technical,
}

impl PresentationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationStyle::Professional => "Professional",
            PresentationStyle::Conversational => "Conversational",
            PresentationStyle::Academic => "Academic",
            PresentationStyle::Business => "Business",
            PresentationStyle::Casual => "Casual",
            PresentationStyle::Technical => "Technical",
        }
    }

    pub fn all() -> Vec<PresentationStyle> {
        vec![
            PresentationStyle::Professional,
            PresentationStyle::Conversational,
            PresentationStyle::Academic,
            PresentationStyle::Business,
            PresentationStyle::Casual,
            PresentationStyle::Technical,
        ]
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationStyle {
    type Err = DeckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PresentationStyle::all()
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DeckError::InvalidConfig(format!("Unknown presentation style: {}", s))
            })
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub slide_count: usize,
    pub detail_level: DetailLevel,
    pub presentation_style: PresentationStyle,
    pub target_audience: String,
    pub brand_name: String,
    pub key_takeaway: String,
    pub additional_keywords: String,
    pub tone: String,
    pub image_style: String,
    pub include_images: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            slide_count: 7,
            detail_level: DetailLevel::Standard,
            presentation_style: PresentationStyle::Professional,
            target_audience: String::new(),
            brand_name: String::new(),
            key_takeaway: String::new(),
            additional_keywords: String::new(),
            tone: "informative".to_string(),
            image_style: "photorealistic".to_string(),
            include_images: true,
        }
    }
}

impl GenerationConfig {
    /// A deck needs a title slide, at least one content slide and a closing slide.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SLIDES..=MAX_SLIDES).contains(&self.slide_count) {
            return Err(DeckError::InvalidConfig(format!(
                "slide count must be between {} and {}, got {}",
                MIN_SLIDES, MAX_SLIDES, self.slide_count
            )));
        }
        Ok(())
    }
}

/// Receives human-readable status updates while a deck is generated.
pub trait ProgressSink: Send + Sync {
    fn update(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn update(&self, message: &str) {
        self(message)
    }
}

/// Discards progress updates.
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn update(&self, _message: &str) {}
}

/// A generated deck plus how long the whole pipeline took.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub deck: Deck,
    pub elapsed: Duration,
}

/// Build the instruction sent to the content generator.
pub fn build_prompt(topic: &str, config: &GenerationConfig) -> String {
    let mut prompt = format!(
        "You are an expert presentation author. Write the outline of a {count}-slide presentation on the topic: \"{topic}\".\n\
         Structure it exactly as follows:\n\
         1. Slide 1 is a compelling title slide.\n\
         2. Slides 2 to {last_content} are {content_count} distinct content slides that explore the topic in a logical order.\n\
         3. Slide {count} closes the presentation with a summary, \"Thank You\" or \"Q&A\" slide.\n\
         \n\
         Guidelines:\n\
         - Detail level: write with a '{detail}' level of detail.\n\
         - Presentation style: keep the style '{style}'.",
        count = config.slide_count,
        topic = topic.trim(),
        last_content = config.slide_count.saturating_sub(1),
        content_count = config.slide_count.saturating_sub(2),
        detail = config.detail_level,
        style = config.presentation_style,
    );

    let optional = [
        (
            &config.target_audience,
            "Target audience: tailor the content for '{}'.",
        ),
        (
            &config.brand_name,
            "Brand name: weave in the brand '{}' where it fits naturally.",
        ),
        (
            &config.key_takeaway,
            "Key takeaway: build towards '{}' and reinforce it on the final slide.",
        ),
        (
            &config.additional_keywords,
            "Keywords: include the following keywords: '{}'.",
        ),
        (&config.tone, "Tone: keep the overall tone '{}'."),
    ];
    for (value, template) in optional {
        let value = value.trim();
        if !value.is_empty() {
            prompt.push_str("\n- ");
            prompt.push_str(&template.replacen("{}", value, 1));
        }
    }

    prompt.push_str(
        "\n\nFor every slide provide:\n\
         1. A short, engaging title.\n\
         2. An array of 3-4 concise bullet points matching the requested detail level and style.\n\
         3. Speaker notes that expand on the bullet points as a conversational script for the presenter.",
    );
    if config.include_images {
        prompt.push_str(&format!(
            "\n4. A descriptive prompt for an AI image generator that produces a visual for the slide. The visual style is: {}.",
            config.image_style.trim()
        ));
    }
    prompt.push_str(
        "\n\nReturn ONLY the raw JSON array described by the response schema, with no other text.",
    );
    prompt
}

/// The structured-output schema for the content generator.
pub fn response_schema(include_images: bool) -> Value {
    let mut properties = json!({
        "title": {
            "type": "STRING",
            "description": "A short, engaging title for the slide."
        },
        "content": {
            "type": "ARRAY",
            "items": { "type": "STRING" },
            "description": "3-4 concise bullet points for the slide."
        },
        "speakerNotes": {
            "type": "STRING",
            "description": "Speaker notes expanding on the bullet points."
        }
    });
    let mut required = vec!["title", "content", "speakerNotes"];

    if include_images {
        properties["imagePrompt"] = json!({
            "type": "STRING",
            "description": "A descriptive prompt for an AI image generator."
        });
        required.push("imagePrompt");
    }

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": properties,
            "required": required
        }
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedSlide {
    title: String,
    content: Vec<String>,
    speaker_notes: String,
    #[serde(default)]
    image_prompt: Option<String>,
}

/// Parse and validate the content generator's response.
///
/// Any deviation from the schema, or a slide count other than `expected`, is
/// a `ContentGeneration` error; no partial result is returned.
pub fn parse_slides(raw: &str, include_images: bool, expected: usize) -> Result<Vec<Slide>> {
    let generated: Vec<GeneratedSlide> = serde_json::from_str(raw.trim()).map_err(|e| {
        DeckError::ContentGeneration(format!(
            "The response might be malformed and could not be parsed: {}",
            e
        ))
    })?;

    if generated.is_empty() {
        return Err(DeckError::ContentGeneration(
            "The response contained no slides".to_string(),
        ));
    }
    if generated.len() != expected {
        return Err(DeckError::ContentGeneration(format!(
            "Expected {} slides but the response contained {}",
            expected,
            generated.len()
        )));
    }

    generated
        .into_iter()
        .enumerate()
        .map(|(i, g)| {
            let image_prompt = match (include_images, g.image_prompt) {
                (true, Some(prompt)) => prompt,
                (true, None) => {
                    return Err(DeckError::ContentGeneration(format!(
                        "Slide {} is missing an imagePrompt",
                        i + 1
                    )))
                }
                (false, _) => String::new(),
            };
            Ok(Slide {
                title: g.title,
                content: g.content,
                image_prompt,
                image_asset: String::new(),
                speaker_notes: g.speaker_notes,
                image_loading: false,
            })
        })
        .collect()
}

/// Deterministic stand-in for an image that failed to generate.
pub fn placeholder_image(prompt: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/1280/720",
        urlencoding::encode(prompt)
    )
}

/// Request one image, degrading to the placeholder on any failure.
pub(crate) async fn image_or_placeholder(
    images: &dyn ImageGenerator,
    prompt: &str,
    style: &str,
) -> String {
    match images.generate_image(prompt, style).await {
        Ok(asset) if !asset.trim().is_empty() => asset,
        Ok(_) => {
            warn!("Image generator returned nothing for '{}'; using placeholder", prompt);
            placeholder_image(prompt)
        }
        Err(e) => {
            warn!("Failed to generate image for '{}': {}; using placeholder", prompt, e);
            placeholder_image(prompt)
        }
    }
}

/// Run the whole generation pipeline for `topic`.
pub async fn generate_deck(
    topic: &str,
    config: &GenerationConfig,
    content: &dyn ContentGenerator,
    images: &dyn ImageGenerator,
    progress: &dyn ProgressSink,
) -> Result<GenerationOutcome> {
    if topic.trim().is_empty() {
        return Err(DeckError::EmptyTopic);
    }
    config.validate()?;

    let start_time = Instant::now();
    info!(
        "Generating {}-slide deck for topic: {:?}",
        config.slide_count, topic
    );

    progress.update("Crafting presentation outline...");
    let prompt = build_prompt(topic, config);
    let schema = response_schema(config.include_images);
    debug!("Content prompt:\n{}", prompt);

    let raw = content
        .generate_content(&prompt, &schema)
        .await
        .map_err(|e| match e {
            DeckError::ContentGeneration(_) => e,
            other => DeckError::ContentGeneration(other.to_string()),
        })?;
    let mut slides = parse_slides(&raw, config.include_images, config.slide_count)?;
    info!("Received outline with {} slides", slides.len());

    if config.include_images {
        progress.update("Designing slide visuals...");
        let total = slides.len();
        let finished = AtomicUsize::new(0);
        let style = config.image_style.as_str();

        let assets = join_all(slides.iter().map(|slide| {
            let finished = &finished;
            async move {
                let asset = image_or_placeholder(images, &slide.image_prompt, style).await;
                let done = finished.fetch_add(1, Ordering::SeqCst) + 1;
                progress.update(&format!("Designing slide visuals... ({}/{})", done, total));
                asset
            }
        }))
        .await;

        for (slide, asset) in slides.iter_mut().zip(assets) {
            slide.image_asset = asset;
        }
    }

    progress.update("Assembling your presentation...");
    let deck = Deck::new(slides);
    let elapsed = start_time.elapsed();
    info!(
        "Generated {} slides in {:.2} seconds",
        deck.len(),
        elapsed.as_secs_f64()
    );

    Ok(GenerationOutcome { deck, elapsed })
}
