use super::*;
use crate::asset::ImageAsset;
use crate::edit::NEW_BULLET;
use crate::generate::{build_prompt, parse_slides, placeholder_image, response_schema};
use crate::geometry::{self, Rect};
use crate::style::{BACKGROUND_COLORS, TEXT_COLORS};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageBuffer, ImageFormat, Rgb};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;
use zip::ZipArchive;

fn sample_slide(title: &str, bullets: &[&str]) -> Slide {
    Slide {
        title: title.to_string(),
        content: bullets.iter().map(|b| b.to_string()).collect(),
        image_prompt: format!("A picture of {}", title),
        image_asset: String::new(),
        speaker_notes: format!("Talk about {}", title),
        image_loading: false,
    }
}

fn sample_deck() -> Deck {
    Deck::new(vec![
        sample_slide("Welcome", &["Hello", "Agenda"]),
        sample_slide("Details", &["First", "Second", "Third", "Fourth"]),
        sample_slide("Thanks", &["Questions?"]),
    ])
}

fn png_data_uri() -> String {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(4, 4, |_, _| Rgb([255u8, 0, 0]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("Failed to encode PNG");
    format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
}

fn theme(name: &str) -> &'static Theme {
    Theme::by_name(name).expect("Missing built-in theme")
}

fn layout(name: &str) -> &'static Layout {
    Layout::by_name(name).expect("Missing built-in layout")
}

fn kinds(regions: &RegionSet) -> Vec<&'static str> {
    regions
        .regions
        .iter()
        .map(|r| match r.kind {
            RegionKind::Image => "image",
            RegionKind::Overlay { .. } => "overlay",
            RegionKind::Title { .. } => "title",
            RegionKind::Content { .. } => "content",
        })
        .collect()
}

fn outline_json(count: usize, with_prompts: bool) -> String {
    let slides: Vec<Value> = (1..=count)
        .map(|n| {
            let mut slide = json!({
                "title": format!("Slide {}", n),
                "content": [format!("Point {}a", n), format!("Point {}b", n)],
                "speakerNotes": format!("Notes {}", n),
            });
            if with_prompts {
                slide["imagePrompt"] = json!(format!("Prompt {}", n));
            }
            slide
        })
        .collect();
    Value::Array(slides).to_string()
}

fn read_part(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("Export is not a zip archive");
    let mut part = archive.by_name(name).ok()?;
    let mut content = String::new();
    part.read_to_string(&mut content).expect("Part is not UTF-8");
    Some(content)
}

struct FakeContent {
    response: Option<String>,
    calls: AtomicUsize,
}

impl FakeContent {
    fn replying(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn offline() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContentGenerator for FakeContent {
    async fn generate_content(&self, _prompt: &str, _schema: &Value) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| DeckError::ConfigError("offline".to_string()))
    }
}

struct FakeImages {
    calls: AtomicUsize,
    fail_on: Option<String>,
}

impl FakeImages {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: None,
        }
    }

    fn failing_on(prompt: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: Some(prompt.to_string()),
        }
    }
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_image(&self, prompt: &str, style: &str) -> Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on.as_deref() == Some(prompt) {
            return Err(DeckError::ImageGeneration("quota exceeded".to_string()));
        }
        Ok(format!("https://images.test/{}/{}.png", style, n))
    }
}

struct FakeTransformer {
    reply: Option<String>,
    requests: Mutex<Vec<TextTransformRequest>>,
}

impl FakeTransformer {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextTransformer for FakeTransformer {
    async fn transform_text(&self, request: &TextTransformRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| DeckError::UnknownError("model unavailable".to_string()))
    }
}

#[test]
fn test_resolve_color_first_match_wins() {
    let default = HexColor::rgb(1, 2, 3);
    assert_eq!(
        resolve_color("text-white text-black", TEXT_COLORS, default),
        HexColor::WHITE
    );
    assert_eq!(
        resolve_color("font-bold text-black text-white", TEXT_COLORS, default),
        HexColor::BLACK
    );
    assert_eq!(
        resolve_color("from-indigo-900 from-slate-900", BACKGROUND_COLORS, default),
        HexColor::rgb(0x31, 0x2E, 0x81)
    );
}

#[test]
fn test_resolve_color_defaults_per_axis() {
    assert_eq!(StyleAxis::Background.resolve("bg-unknown"), HexColor::rgb(0x1A, 0x20, 0x2C));
    assert_eq!(StyleAxis::Text.resolve(""), HexColor::rgb(0x6C, 0x75, 0x7D));
    assert_eq!(StyleAxis::Title.resolve("text-nope"), HexColor::rgb(0x33, 0x33, 0x33));
    assert_eq!(StyleAxis::Bullet.resolve("   "), HexColor::rgb(0x00, 0x7B, 0xFF));
}

#[test]
fn test_hex_color_display_and_parse() {
    let color = HexColor::rgb(0x0F, 0x17, 0x2A);
    assert_eq!(color.to_string(), "0F172A");
    assert_eq!(HexColor::from_hex("#0f172a"), Some(color));
    assert_eq!(HexColor::from_hex("12345"), None);
}

#[test]
fn test_gradient_theme_uses_start_color() {
    let palette = theme("Midnight").palette();
    assert_eq!(palette.background, HexColor::rgb(0x0F, 0x17, 0x2A));
    assert_eq!(palette.title, HexColor::rgb(0x81, 0x8C, 0xF8));
}

#[test]
fn test_every_layout_has_geometry() {
    for layout in LAYOUTS {
        let geometry = geometry::lookup(&layout.name)
            .unwrap_or_else(|| panic!("No geometry for layout {}", layout.name));
        assert!(geometry.image.is_some(), "{} has no image region", layout.name);
        assert_eq!(
            geometry.overlay.is_some(),
            layout.image_position.is_overlay(),
            "Overlay panel mismatch for {}",
            layout.name
        );
    }
    assert!(geometry::full_width().image.is_none());
}

#[test]
fn test_image_position_from_str() {
    assert_eq!(
        "Overlay-Center".parse::<ImagePosition>().unwrap(),
        ImagePosition::OverlayCenter
    );
    assert!(matches!(
        "diagonal".parse::<ImagePosition>(),
        Err(DeckError::ValidationError(_))
    ));
}

#[test]
fn test_theme_and_layout_lookup_ignore_case() {
    assert_eq!(theme("midnight").name, "Midnight");
    assert_eq!(layout("text overlay").image_position, ImagePosition::OverlayCenter);
    assert!(Theme::by_name("Plaid").is_none());
}

#[test]
fn test_regions_overlay_order() {
    let mut slide = sample_slide("Overlay", &["One", "Two"]);
    slide.image_asset = "https://images.test/a.png".to_string();

    let regions = resolve_regions(theme("Minimal Light"), layout("Text Overlay"), &slide, true);
    assert_eq!(regions.geometry, "Text Overlay");
    assert_eq!(kinds(&regions), vec!["image", "overlay", "title", "content"]);
    assert_eq!(regions.image(), Some(Rect::FULL_FRAME));

    // Overlay text is light whatever the theme says
    match regions.regions[2].kind {
        RegionKind::Title { color } => assert_eq!(color, HexColor::WHITE),
        other => panic!("Expected title, got {:?}", other),
    }
    match regions.regions[3].kind {
        RegionKind::Content {
            text_color,
            bullet_color,
        } => {
            assert_eq!(text_color, HexColor::rgb(0xF1, 0xF5, 0xF9));
            assert_eq!(bullet_color, HexColor::WHITE);
        }
        other => panic!("Expected content, got {:?}", other),
    }
}

#[test]
fn test_regions_text_only_when_images_disabled() {
    let mut slide = sample_slide("Plain", &["One"]);
    slide.image_asset = "https://images.test/a.png".to_string();
    let midnight = theme("Midnight");

    let regions = resolve_regions(midnight, layout("Text Overlay"), &slide, false);
    assert_eq!(regions.geometry, geometry::FULL_WIDTH);
    assert!(regions.is_text_only());
    assert!(regions.overlay().is_none());
    assert_eq!(kinds(&regions), vec!["title", "content"]);
    match regions.regions[0].kind {
        RegionKind::Title { color } => assert_eq!(color, midnight.palette().title),
        other => panic!("Expected title, got {:?}", other),
    }
}

#[test]
fn test_regions_text_only_when_slide_has_no_image() {
    let slide = sample_slide("No picture", &["One"]);
    for layout in LAYOUTS {
        let regions = resolve_regions(theme("Aurora"), layout, &slide, true);
        assert_eq!(regions.geometry, geometry::FULL_WIDTH, "Layout {}", layout.name);
        assert!(regions.is_text_only());
    }
}

#[test]
fn test_regions_side_by_side_order() {
    let mut slide = sample_slide("Side", &["One"]);
    slide.image_asset = "https://images.test/a.png".to_string();
    let midnight = theme("Midnight");

    let right = resolve_regions(midnight, layout("Image Right"), &slide, true);
    assert_eq!(kinds(&right), vec!["title", "content", "image"]);
    assert_eq!(right.image(), Some(Rect::pct(52, 15, 45, 70)));

    let left = resolve_regions(midnight, layout("Image Left"), &slide, true);
    assert_eq!(kinds(&left), vec!["image", "title", "content"]);
    assert_eq!(left.title(), Some(Rect::pct(52, 15, 45, 15)));

    let bullet = match left.regions[2].kind {
        RegionKind::Content { bullet_color, .. } => bullet_color,
        other => panic!("Expected content, got {:?}", other),
    };
    assert_eq!(bullet, midnight.palette().bullet);
}

#[test]
fn test_regions_unknown_layout_falls_back() {
    let mut slide = sample_slide("Fallback", &["One"]);
    slide.image_asset = "https://images.test/a.png".to_string();
    let custom = Layout {
        name: Cow::Borrowed("Diagonal Split"),
        image_position: ImagePosition::Right,
        class_name: Cow::Borrowed(""),
        image_class_name: Cow::Borrowed(""),
        text_class_name: Cow::Borrowed(""),
    };

    let regions = resolve_regions(theme("Midnight"), &custom, &slide, true);
    assert_eq!(regions.geometry, "Image Right");
}

#[test]
fn test_regions_unknown_layout_uses_image_position() {
    let mut slide = sample_slide("Custom", &["One"]);
    slide.image_asset = "https://images.test/a.png".to_string();
    let custom = |name: &'static str, image_position| Layout {
        name: Cow::Borrowed(name),
        image_position,
        class_name: Cow::Borrowed(""),
        image_class_name: Cow::Borrowed(""),
        text_class_name: Cow::Borrowed(""),
    };

    let hero = custom("Hero Overlay", ImagePosition::OverlayBottom);
    let regions = resolve_regions(theme("Midnight"), &hero, &slide, true);
    assert_eq!(regions.geometry, "Overlay Bottom");
    assert!(regions.overlay().is_some());
    assert_eq!(kinds(&regions), vec!["image", "overlay", "title", "content"]);

    let split = custom("Split Left", ImagePosition::Left);
    let regions = resolve_regions(theme("Midnight"), &split, &slide, true);
    assert_eq!(regions.geometry, "Image Left");
    assert_eq!(regions.image(), Some(Rect::pct(5, 15, 45, 70)));
    assert_eq!(kinds(&regions), vec!["image", "title", "content"]);
}

#[test]
fn test_regions_are_deterministic() {
    let mut slide = sample_slide("Same", &["One", "Two"]);
    slide.image_asset = png_data_uri();
    for layout in LAYOUTS {
        let first = resolve_regions(theme("Ocean"), layout, &slide, true);
        let second = resolve_regions(theme("Ocean"), layout, &slide, true);
        assert_eq!(first, second, "Layout {}", layout.name);
    }
}

#[test]
fn test_reorder_preserves_bullets() {
    let deck = sample_deck();
    let moved = deck.reorder_bullet(1, 0, 3).unwrap();

    assert_eq!(
        moved.get(1).unwrap().content,
        vec!["Second", "Third", "Fourth", "First"]
    );

    let mut before = deck.get(1).unwrap().content.clone();
    let mut after = moved.get(1).unwrap().content.clone();
    before.sort();
    after.sort();
    assert_eq!(before, after);

    let restored = moved.reorder_bullet(1, 3, 0).unwrap();
    assert_eq!(restored.get(1).unwrap().content, deck.get(1).unwrap().content);
}

#[test]
fn test_reorder_adjacent_bullets_round_trip() {
    let deck = sample_deck();
    let swapped = deck.reorder_bullet(1, 1, 2).unwrap();
    assert_eq!(
        swapped.get(1).unwrap().content,
        vec!["First", "Third", "Second", "Fourth"]
    );

    let restored = swapped.reorder_bullet(1, 2, 1).unwrap();
    assert_eq!(restored.get(1).unwrap().content, deck.get(1).unwrap().content);
}

#[test]
fn test_remove_then_add_bullet() {
    let deck = sample_deck();
    let edited = deck
        .remove_bullet(0, 0)
        .and_then(|d| d.add_bullet(0))
        .unwrap();
    assert_eq!(edited.get(0).unwrap().content, vec!["Agenda", NEW_BULLET]);
}

#[test]
fn test_removed_placeholder_bullet_comes_back_on_add() {
    let deck = sample_deck().add_bullet(0).unwrap();
    assert_eq!(
        deck.get(0).unwrap().content,
        vec!["Hello", "Agenda", NEW_BULLET]
    );

    // The deck keeps no history, so adding after removing the placeholder
    // yields the same placeholder text again
    let edited = deck
        .remove_bullet(0, 2)
        .and_then(|d| d.add_bullet(0))
        .unwrap();
    assert_eq!(edited, deck);
}

#[test]
fn test_set_field() {
    let deck = sample_deck();
    let edited = deck
        .set_field(2, SlideField::Title, "Thank You")
        .and_then(|d| d.set_field(2, SlideField::Bullet(0), "Any questions?"))
        .and_then(|d| d.set_field(2, SlideField::SpeakerNotes, "Wrap up"))
        .unwrap();

    let slide = edited.get(2).unwrap();
    assert_eq!(slide.title, "Thank You");
    assert_eq!(slide.content, vec!["Any questions?"]);
    assert_eq!(slide.speaker_notes, "Wrap up");
}

#[test]
fn test_edit_out_of_range() {
    let deck = sample_deck();
    assert!(matches!(
        deck.add_bullet(3),
        Err(DeckError::SlideIndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        deck.remove_bullet(2, 1),
        Err(DeckError::BulletIndexOutOfRange {
            slide: 2,
            index: 1,
            len: 1
        })
    ));
    assert!(deck.reorder_bullet(1, 0, 4).is_err());
    assert!(deck.set_field(0, SlideField::Bullet(9), "x").is_err());
    // A failed edit leaves the snapshot alone
    assert_eq!(deck, sample_deck());
}

#[test]
fn test_edits_copy_on_write() {
    let deck = sample_deck();
    let edited = deck.set_field(1, SlideField::Title, "Changed").unwrap();

    assert_eq!(deck.get(1).unwrap().title, "Details");
    assert_eq!(edited.get(1).unwrap().title, "Changed");
    assert!(edited.shares_slide(&deck, 0));
    assert!(!edited.shares_slide(&deck, 1));
    assert!(edited.shares_slide(&deck, 2));
}

#[test]
fn test_deck_json_shape() {
    let deck = sample_deck();
    let value = serde_json::to_value(&deck).unwrap();

    let first = &value.as_array().expect("Deck should serialize as an array")[0];
    assert_eq!(first["imagePrompt"], "A picture of Welcome");
    assert_eq!(first["speakerNotes"], "Talk about Welcome");
    assert!(first.get("imageLoading").is_none());
}

#[test]
fn test_save_and_load_deck() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("deck.json");

    let deck = sample_deck();
    utils::save_deck(&deck, &path).unwrap();
    let loaded = utils::load_deck(&path).unwrap();
    assert_eq!(loaded, deck);

    let missing = utils::load_deck(&temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(DeckError::PathNotFoundError(_))));
}

#[test]
fn test_build_prompt_optional_fields() {
    let mut config = GenerationConfig {
        slide_count: 5,
        target_audience: "CTOs".to_string(),
        ..GenerationConfig::default()
    };
    let prompt = build_prompt("Edge computing", &config);
    assert!(prompt.contains("5-slide presentation"));
    assert!(prompt.contains("\"Edge computing\""));
    assert!(prompt.contains("Target audience: tailor the content for 'CTOs'"));
    assert!(!prompt.contains("Brand name"));
    assert!(!prompt.contains("Key takeaway"));
    assert!(prompt.contains("AI image generator"));

    config.include_images = false;
    config.tone = "  ".to_string();
    let prompt = build_prompt("Edge computing", &config);
    assert!(!prompt.contains("AI image generator"));
    assert!(!prompt.contains("Tone:"));
}

#[test]
fn test_build_prompt_small_slide_count() {
    for slide_count in 0..=2 {
        let config = GenerationConfig {
            slide_count,
            ..GenerationConfig::default()
        };
        let prompt = build_prompt("Edge computing", &config);
        assert!(prompt.contains(&format!("{}-slide presentation", slide_count)));
    }
}

#[test]
fn test_response_schema_image_prompt() {
    let with_images = response_schema(true);
    let required = with_images["items"]["required"].as_array().unwrap();
    assert!(required.contains(&json!("imagePrompt")));

    let without = response_schema(false);
    assert!(without["items"]["properties"].get("imagePrompt").is_none());
    let required = without["items"]["required"].as_array().unwrap();
    assert!(!required.contains(&json!("imagePrompt")));
}

#[test]
fn test_parse_slides_errors() {
    assert!(matches!(
        parse_slides("not json", true, 3),
        Err(DeckError::ContentGeneration(_))
    ));
    assert!(matches!(
        parse_slides("[]", true, 3),
        Err(DeckError::ContentGeneration(_))
    ));
    assert!(matches!(
        parse_slides(&outline_json(4, true), true, 5),
        Err(DeckError::ContentGeneration(_))
    ));
    assert!(matches!(
        parse_slides(&outline_json(3, false), true, 3),
        Err(DeckError::ContentGeneration(_))
    ));

    let slides = parse_slides(&outline_json(3, true), false, 3).unwrap();
    assert!(slides.iter().all(|s| s.image_prompt.is_empty()));
    assert_eq!(slides[1].speaker_notes, "Notes 2");
}

#[test]
fn test_generation_config_validation() {
    let config = Config::new();
    let default = config.get_generation_config(
        None, None, None, None, None, None, None, None, None, None,
    );
    assert_eq!(default, GenerationConfig::default());
    assert!(default.validate().is_ok());

    let too_many = config.get_generation_config(
        Some(16),
        Some(DetailLevel::Basic),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    );
    assert!(matches!(too_many.validate(), Err(DeckError::InvalidConfig(_))));
    assert_eq!("detailed".parse::<DetailLevel>().unwrap(), DetailLevel::Detailed);
    assert!("rambling".parse::<PresentationStyle>().is_err());
}

#[tokio::test]
async fn test_generate_deck_with_images() {
    let content = FakeContent::replying(&outline_json(5, true));
    let images = FakeImages::new();
    let messages = Mutex::new(Vec::new());
    let progress = |message: &str| messages.lock().unwrap().push(message.to_string());

    let config = GenerationConfig {
        slide_count: 5,
        ..GenerationConfig::default()
    };
    let outcome = generate_deck("Edge computing", &config, &content, &images, &progress)
        .await
        .unwrap();

    assert_eq!(outcome.deck.len(), 5);
    assert_eq!(images.calls.load(Ordering::SeqCst), 5);
    assert!(outcome
        .deck
        .iter()
        .all(|s| s.image_asset.starts_with("https://images.test/photorealistic/")));
    assert_eq!(outcome.deck.get(0).unwrap().title, "Slide 1");

    let messages = messages.lock().unwrap();
    assert_eq!(messages.first().map(String::as_str), Some("Crafting presentation outline..."));
    assert!(messages.contains(&"Designing slide visuals... (5/5)".to_string()));
    assert_eq!(messages.last().map(String::as_str), Some("Assembling your presentation..."));
}

#[tokio::test]
async fn test_generate_deck_without_images() {
    let content = FakeContent::replying(&outline_json(5, false));
    let images = FakeImages::new();
    let config = GenerationConfig {
        slide_count: 5,
        include_images: false,
        ..GenerationConfig::default()
    };

    let outcome = generate_deck("Edge computing", &config, &content, &images, &SilentProgress)
        .await
        .unwrap();

    assert_eq!(outcome.deck.len(), 5);
    assert!(outcome.deck.iter().all(|s| s.image_asset.is_empty()));
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_deck_malformed_response() {
    let content = FakeContent::replying("Sorry, I cannot help with that.");
    let images = FakeImages::new();

    let result = generate_deck(
        "Edge computing",
        &GenerationConfig::default(),
        &content,
        &images,
        &SilentProgress,
    )
    .await;

    assert!(matches!(result, Err(DeckError::ContentGeneration(_))));
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_deck_content_failure_is_content_error() {
    let content = FakeContent::offline();
    let images = FakeImages::new();

    let result = generate_deck(
        "Edge computing",
        &GenerationConfig::default(),
        &content,
        &images,
        &SilentProgress,
    )
    .await;

    assert!(matches!(result, Err(DeckError::ContentGeneration(_))));
}

#[tokio::test]
async fn test_generate_deck_image_failure_uses_placeholder() {
    let content = FakeContent::replying(&outline_json(4, true));
    let images = FakeImages::failing_on("Prompt 3");
    let config = GenerationConfig {
        slide_count: 4,
        ..GenerationConfig::default()
    };

    let outcome = generate_deck("Edge computing", &config, &content, &images, &SilentProgress)
        .await
        .unwrap();

    assert_eq!(outcome.deck.len(), 4);
    assert_eq!(outcome.deck.get(2).unwrap().image_asset, placeholder_image("Prompt 3"));
    assert!(outcome
        .deck
        .get(2)
        .unwrap()
        .image_asset
        .starts_with("https://picsum.photos/seed/Prompt%203/"));
    for i in [0, 1, 3] {
        assert!(outcome
            .deck
            .get(i)
            .unwrap()
            .image_asset
            .starts_with("https://images.test/"));
    }
}

#[tokio::test]
async fn test_generate_deck_rejects_bad_input() {
    let content = FakeContent::replying(&outline_json(7, true));
    let images = FakeImages::new();

    let empty = generate_deck("   ", &GenerationConfig::default(), &content, &images, &SilentProgress).await;
    assert!(matches!(empty, Err(DeckError::EmptyTopic)));

    let config = GenerationConfig {
        slide_count: 2,
        ..GenerationConfig::default()
    };
    let too_few = generate_deck("Edge computing", &config, &content, &images, &SilentProgress).await;
    assert!(matches!(too_few, Err(DeckError::InvalidConfig(_))));
    assert_eq!(content.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_regenerate_image_success() {
    let deck = sample_deck();
    let images = FakeImages::new();

    let updated = regenerate_image(&deck, 1, &images, "watercolor").await.unwrap();
    let slide = updated.get(1).unwrap();
    assert_eq!(slide.image_asset, "https://images.test/watercolor/1.png");
    assert!(!slide.image_loading);
    assert!(deck.get(1).unwrap().image_asset.is_empty());
    assert!(updated.shares_slide(&deck, 0));
}

#[tokio::test]
async fn test_regenerate_image_failure_keeps_old_image() {
    let deck = sample_deck();
    let (loading, request) = deck.begin_image_regeneration(0, "sketch").unwrap();
    assert!(loading.get(0).unwrap().image_loading);
    assert_eq!(request.prompt, "A picture of Welcome");

    let with_image = loading
        .complete_image_regeneration(0, Ok("https://images.test/old.png".to_string()))
        .unwrap();
    let images = FakeImages::failing_on("A picture of Welcome");
    let updated = regenerate_image(&with_image, 0, &images, "sketch").await.unwrap();

    let slide = updated.get(0).unwrap();
    assert_eq!(slide.image_asset, "https://images.test/old.png");
    assert!(!slide.image_loading);
}

#[test]
fn test_regeneration_prompt_falls_back_to_slide_text() {
    let deck = sample_deck();
    let deck = Deck::new(
        deck.iter()
            .map(|s| Slide {
                image_prompt: String::new(),
                ..s.clone()
            })
            .collect(),
    );
    let (_, request) = deck.begin_image_regeneration(0, "sketch").unwrap();
    assert_eq!(request.prompt, "Welcome. Hello. Agenda");
    assert_eq!(request.style, "sketch");
}

#[test]
fn test_overlapping_regenerations_last_write_wins() {
    let deck = sample_deck();
    let (loading, _) = deck.begin_image_regeneration(1, "sketch").unwrap();
    let (still_loading, _) = loading.begin_image_regeneration(1, "sketch").unwrap();

    let first = still_loading
        .complete_image_regeneration(1, Ok("https://images.test/first.png".to_string()))
        .unwrap();
    let second = first
        .complete_image_regeneration(1, Ok("https://images.test/second.png".to_string()))
        .unwrap();
    assert_eq!(second.get(1).unwrap().image_asset, "https://images.test/second.png");
}

#[tokio::test]
async fn test_apply_ai_text_transform_bullet() {
    let deck = sample_deck();
    let transformer = FakeTransformer::replying("  \"A sharper second point\"  ");

    let updated = apply_ai_text_transform(
        &deck,
        1,
        TransformTarget::Bullet(1),
        "Make this point more concise",
        &transformer,
    )
    .await
    .unwrap();

    assert_eq!(updated.get(1).unwrap().content[1], "A sharper second point");
    assert_eq!(deck.get(1).unwrap().content[1], "Second");

    let requests = transformer.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "Second");
    assert_eq!(requests[0].context.title, "Details");
    assert_eq!(requests[0].context.bullets, vec!["First", "Third", "Fourth"]);
}

#[tokio::test]
async fn test_apply_ai_text_transform_failure() {
    let deck = sample_deck();
    let transformer = FakeTransformer::failing();

    let result = apply_ai_text_transform(
        &deck,
        0,
        TransformTarget::Title,
        "Make it shorter",
        &transformer,
    )
    .await;
    assert!(matches!(result, Err(DeckError::TextTransform(_))));

    let blank = FakeTransformer::replying("   ");
    let result =
        apply_ai_text_transform(&deck, 0, TransformTarget::Title, "Make it shorter", &blank).await;
    assert!(matches!(result, Err(DeckError::TextTransform(_))));
    assert_eq!(deck.get(0).unwrap().title, "Welcome");
}

#[test]
fn test_image_asset_parse() {
    assert_eq!(ImageAsset::parse("  "), ImageAsset::Empty);

    let embedded = ImageAsset::parse(&png_data_uri());
    assert!(matches!(
        embedded,
        ImageAsset::Embedded {
            format: ImageFormat::Png,
            ..
        }
    ));
    assert_eq!(embedded.extension(), Some("png"));

    assert!(matches!(
        ImageAsset::parse("https://images.test/a.png"),
        ImageAsset::Remote(_)
    ));
    assert!(matches!(
        ImageAsset::parse("ftp://images.test/a.png"),
        ImageAsset::Unsupported(_)
    ));
    assert!(matches!(
        ImageAsset::parse("data:image/png;base64,%%%"),
        ImageAsset::Unsupported(_)
    ));
}

#[test]
fn test_image_asset_trusts_bytes_over_mime() {
    let uri = png_data_uri().replacen("image/png", "image/jpeg", 1);
    assert!(matches!(
        ImageAsset::parse(&uri),
        ImageAsset::Embedded {
            format: ImageFormat::Png,
            ..
        }
    ));
}

#[test]
fn test_export_overlay_draw_order() {
    let mut slide = sample_slide("Overlay & Friends", &["One", "Two"]);
    slide.image_asset = png_data_uri();
    let deck = Deck::new(vec![slide]);

    let bytes = export_deck(
        &deck,
        theme("Midnight"),
        layout("Text Overlay"),
        true,
        &PptxConfig::default(),
    )
    .unwrap();

    let xml = read_part(&bytes, "ppt/slides/slide1.xml").expect("Missing slide1.xml");
    let image = xml.find(r#"name="Image""#).expect("No image shape");
    let overlay = xml.find(r#"name="Overlay""#).expect("No overlay shape");
    let title = xml.find(r#"name="Title""#).expect("No title shape");
    let content = xml.find(r#"name="Content""#).expect("No content shape");
    assert!(image < overlay && overlay < title && title < content);
    assert!(xml.contains("Overlay &amp; Friends"));
    assert!(xml.contains(r#"<a:alpha val="50000"/>"#));

    assert!(read_part(&bytes, "ppt/media/image1.png").is_some());
    let rels = read_part(&bytes, "ppt/slides/_rels/slide1.xml.rels").unwrap();
    assert!(rels.contains("../media/image1.png"));
}

#[test]
fn test_export_slide_count_and_notes() {
    let deck = sample_deck();
    let bytes = export_deck(
        &deck,
        theme("Paper"),
        layout("Image Left"),
        true,
        &PptxConfig::default(),
    )
    .unwrap();

    for n in 1..=3 {
        assert!(read_part(&bytes, &format!("ppt/slides/slide{}.xml", n)).is_some());
    }
    assert!(read_part(&bytes, "ppt/slides/slide4.xml").is_none());

    let presentation = read_part(&bytes, "ppt/presentation.xml").unwrap();
    assert_eq!(presentation.matches("<p:sldId ").count(), 3);
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

    let notes = read_part(&bytes, "ppt/notesSlides/notesSlide2.xml").unwrap();
    assert!(notes.contains("Talk about Details"));

    let slide = read_part(&bytes, "ppt/slides/slide2.xml").unwrap();
    assert_eq!(slide.matches("<a:buChar").count(), 4);
    assert!(!slide.contains(r#"name="Image""#));
}

#[test]
fn test_export_notes_lines_and_control_characters() {
    let mut slide = sample_slide("Tab\tbed\u{0B} title", &["Bell\u{07} point"]);
    slide.speaker_notes = "Line one\r\nLine two\n".to_string();
    let deck = Deck::new(vec![slide]);

    let bytes = export_deck(
        &deck,
        theme("Midnight"),
        layout("Image Right"),
        true,
        &PptxConfig::default(),
    )
    .unwrap();

    let notes = read_part(&bytes, "ppt/notesSlides/notesSlide1.xml").unwrap();
    assert_eq!(notes.matches("<a:p>").count(), 3);
    assert!(notes.contains("<a:t>Line one</a:t>"));
    assert!(notes.contains("<a:t></a:t>"));

    let xml = read_part(&bytes, "ppt/slides/slide1.xml").unwrap();
    assert!(xml.contains("Tab\tbed title"));
    assert!(xml.contains("Bell point"));
    assert!(!xml.contains('\u{0B}'));
    assert!(!xml.contains('\u{07}'));
}

#[test]
fn test_export_remote_image_is_linked() {
    let mut slide = sample_slide("Remote", &["One"]);
    slide.image_asset = placeholder_image("a mountain");
    let deck = Deck::new(vec![slide]);

    let bytes = export_deck(
        &deck,
        theme("Sky"),
        layout("Image Right"),
        true,
        &PptxConfig::default(),
    )
    .unwrap();

    let rels = read_part(&bytes, "ppt/slides/_rels/slide1.xml.rels").unwrap();
    assert!(rels.contains(r#"TargetMode="External""#));
    let xml = read_part(&bytes, "ppt/slides/slide1.xml").unwrap();
    assert!(xml.contains(r#"r:link="rId3""#));
}

#[test]
fn test_export_without_images_skips_media() {
    let mut slide = sample_slide("Text only", &["One"]);
    slide.image_asset = png_data_uri();
    let deck = Deck::new(vec![slide]);

    let config = PptxConfig {
        title: "Text".to_string(),
        aspect_ratio: "4:3".to_string(),
    };
    let bytes = export_deck(&deck, theme("Noir"), layout("Text Overlay"), false, &config).unwrap();

    assert!(read_part(&bytes, "ppt/media/image1.png").is_none());
    let xml = read_part(&bytes, "ppt/slides/slide1.xml").unwrap();
    assert!(!xml.contains(r#"name="Image""#));
    assert!(!xml.contains(r#"name="Overlay""#));
    let presentation = read_part(&bytes, "ppt/presentation.xml").unwrap();
    assert!(presentation.contains(r#"cy="6858000""#));
}

#[test]
fn test_export_empty_deck_fails() {
    let result = export_deck(
        &Deck::default(),
        theme("Midnight"),
        layout("Image Right"),
        true,
        &PptxConfig::default(),
    );
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
}

#[test]
fn test_write_pptx_creates_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out").join(DEFAULT_OUTPUT_FILE);

    let bytes = export_deck(
        &sample_deck(),
        theme("Forest"),
        layout("Image Top"),
        true,
        &PptxConfig::default(),
    )
    .unwrap();
    write_pptx(&bytes, &output).unwrap();
    assert!(output.exists());
}

#[test]
fn test_generate_preview_html() {
    let mut slide = sample_slide("<Intro>", &["Fast", "Cheap"]);
    slide.image_asset = "https://images.test/a.png".to_string();
    let deck = Deck::new(vec![slide, sample_slide("Plain", &["Only text"])]);

    let html = generate_preview_html(&deck, theme("Midnight"), layout("Overlay Bottom"), true);
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-geometry="Overlay Bottom""#));
    assert!(html.contains(r#"data-geometry="full-width""#));
    assert!(html.contains("&lt;Intro&gt;"));
    assert!(html.contains("<li>Cheap</li>"));
    assert!(html.contains(r#"src="https://images.test/a.png""#));
}

#[test]
fn test_text_transform_prompt_includes_context() {
    let request = sample_deck()
        .text_transform_request(0, TransformTarget::Title, "Make it shorter")
        .unwrap();
    let prompt = gemini::text_transform_prompt(&request);
    assert!(prompt.contains("Slide title: Welcome"));
    assert!(prompt.contains("- Agenda"));
    assert!(prompt.contains("Instruction: Make it shorter"));
}

#[test]
fn test_gemini_client_requires_api_key() {
    let config = Config::new();
    assert!(matches!(
        GeminiClient::from_config(&config),
        Err(DeckError::ConfigError(_))
    ));
}

#[tokio::test]
async fn test_gemini_transport_error_keeps_its_type() {
    let config = Config {
        api_key: Some("test-key".to_string()),
        api_base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_ms: 2000,
        ..Config::new()
    };
    let client = GeminiClient::from_config(&config).unwrap();

    let result = client.generate_image("a lighthouse", "watercolor").await;
    assert!(matches!(result, Err(DeckError::FetchError(_))), "{:?}", result);
}
