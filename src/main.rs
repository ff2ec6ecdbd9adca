// ABOUTME: Main entry point for the deckgen program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use deckgen::{DeckError, DetailLevel, Layout, PresentationStyle, Theme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deck from a topic and export it as PPTX
    Generate(GenerateArgs),

    /// Export a previously saved deck (JSON) as PPTX
    Export(ExportArgs),

    /// List the built-in themes
    Themes,

    /// List the built-in layouts
    Layouts,
}

#[derive(Args)]
struct DesignArgs {
    /// Theme name
    #[arg(long, default_value = "Midnight")]
    theme: String,

    /// Layout name
    #[arg(long, default_value = "Image Right")]
    layout: String,

    /// Export text only, ignoring slide images
    #[arg(long)]
    no_images: bool,

    /// Path to output PPTX file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write an HTML preview to this path
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Slide aspect ratio: 16:9 or 4:3
    #[arg(long)]
    aspect_ratio: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Presentation topic
    #[arg(short, long)]
    topic: String,

    /// Number of slides (3-15)
    #[arg(long)]
    slides: Option<usize>,

    /// Detail level: basic, standard or detailed
    #[arg(long)]
    detail: Option<DetailLevel>,

    /// Presentation style, e.g. professional, academic, casual
    #[arg(long)]
    style: Option<PresentationStyle>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Brand name to weave into the content
    #[arg(long)]
    brand: Option<String>,

    /// Key takeaway the deck should build towards
    #[arg(long)]
    takeaway: Option<String>,

    /// Additional keywords
    #[arg(long)]
    keywords: Option<String>,

    /// Overall tone
    #[arg(long)]
    tone: Option<String>,

    /// Visual style for generated images
    #[arg(long)]
    image_style: Option<String>,

    /// Save the generated deck as JSON for later editing or export
    #[arg(long)]
    save_deck: Option<PathBuf>,

    #[command(flatten)]
    design: DesignArgs,
}

#[derive(Args)]
struct ExportArgs {
    /// Path to a deck JSON file
    #[arg(short, long)]
    deck: PathBuf,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    #[command(flatten)]
    design: DesignArgs,
}

fn find_theme(name: &str) -> deckgen::Result<&'static Theme> {
    Theme::by_name(name).ok_or_else(|| {
        let names: Vec<&str> = deckgen::THEMES.iter().map(|t| t.name.as_ref()).collect();
        DeckError::ValidationError(format!(
            "Unknown theme '{}'. Available: {}",
            name,
            names.join(", ")
        ))
    })
}

fn find_layout(name: &str) -> deckgen::Result<&'static Layout> {
    Layout::by_name(name).ok_or_else(|| {
        let names: Vec<&str> = deckgen::LAYOUTS.iter().map(|l| l.name.as_ref()).collect();
        DeckError::ValidationError(format!(
            "Unknown layout '{}'. Available: {}",
            name,
            names.join(", ")
        ))
    })
}

fn write_outputs(
    deck: &deckgen::Deck,
    design: &DesignArgs,
    title: Option<String>,
    config: &deckgen::Config,
) -> deckgen::Result<()> {
    let theme = find_theme(&design.theme)?;
    let layout = find_layout(&design.layout)?;
    let include_images = !design.no_images;

    let pptx_config = config.get_pptx_config(title, design.aspect_ratio.clone());
    let bytes = deckgen::export_deck(deck, theme, layout, include_images, &pptx_config)?;
    let output = design
        .output
        .clone()
        .unwrap_or_else(|| config.output_file.clone());
    deckgen::write_pptx(&bytes, &output)?;
    println!("PPTX generated successfully: {:?}", output);

    if let Some(preview_path) = &design.preview {
        let html = deckgen::generate_preview_html(deck, theme, layout, include_images);
        deckgen::preview::write_preview_html(&html, preview_path)?;
        println!("HTML preview written: {:?}", preview_path);
    }
    Ok(())
}

async fn run_generate(args: &GenerateArgs, config: &deckgen::Config) -> deckgen::Result<()> {
    if args.topic.trim().is_empty() {
        return Err(DeckError::EmptyTopic);
    }
    // Fail on bad design names before spending any generation calls
    find_theme(&args.design.theme)?;
    find_layout(&args.design.layout)?;

    let generation = config.get_generation_config(
        args.slides,
        args.detail,
        args.style,
        args.audience.clone(),
        args.brand.clone(),
        args.takeaway.clone(),
        args.keywords.clone(),
        args.tone.clone(),
        args.image_style.clone(),
        Some(!args.design.no_images),
    );
    generation.validate()?;

    let client = deckgen::GeminiClient::from_config(config)?;
    let progress = |message: &str| println!("{}", message);
    let outcome =
        deckgen::generate_deck(&args.topic, &generation, &client, &client, &progress).await?;
    println!(
        "Generated {} slides in {:.1} seconds",
        outcome.deck.len(),
        outcome.elapsed.as_secs_f64()
    );

    if let Some(path) = &args.save_deck {
        deckgen::utils::save_deck(&outcome.deck, path)?;
        println!("Deck saved: {:?}", path);
    }

    write_outputs(
        &outcome.deck,
        &args.design,
        Some(args.topic.trim().to_string()),
        config,
    )
}

fn run_export(args: &ExportArgs, config: &deckgen::Config) -> deckgen::Result<()> {
    let deck = deckgen::utils::load_deck(&args.deck)?;
    let title = args
        .title
        .clone()
        .or_else(|| deck.get(0).map(|s| s.title.clone()));
    write_outputs(&deck, &args.design, title, config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = deckgen::Config::from_env();

    let result = match &cli.command {
        Some(Commands::Generate(args)) => {
            println!("Executing generate command...");
            run_generate(args, &config).await
        }
        Some(Commands::Export(args)) => {
            println!("Executing export command...");
            run_export(args, &config)
        }
        Some(Commands::Themes) => {
            for theme in deckgen::THEMES {
                let palette = theme.palette();
                println!(
                    "{:<14} background #{} title #{} text #{} bullet #{}",
                    theme.name, palette.background, palette.title, palette.text, palette.bullet
                );
            }
            Ok(())
        }
        Some(Commands::Layouts) => {
            for layout in deckgen::LAYOUTS {
                println!("{:<18} image {}", layout.name, layout.image_position);
            }
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
