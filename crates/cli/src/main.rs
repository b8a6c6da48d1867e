//! CLI tool for converting markdown pitch decks into PowerPoint presentations.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_core::parse_markdown;
use deck_pptx::{assemble, AssembleOptions, PptxWriter};
use std::fs;
use std::path::PathBuf;

/// Convert a markdown pitch deck to a PowerPoint presentation.
#[derive(Parser, Debug)]
#[command(name = "md2deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markdown file
    input: PathBuf,

    /// Output PowerPoint file (.pptx)
    #[arg(short, long)]
    output: PathBuf,

    /// Directory containing slide images (1.png, 2.png, etc.)
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Override the deck title
    #[arg(long)]
    title: Option<String>,

    /// Deck subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if !args.input.exists() {
        bail!("Input file '{}' not found", args.input.display());
    }

    let markdown = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let slides = parse_markdown(&markdown);
    log::debug!("Parsed {} slides from {}", slides.len(), args.input.display());
    if args.verbose {
        eprintln!("Parsed {} slides from {}", slides.len(), args.input.display());
    }

    let options = AssembleOptions {
        title: args.title,
        subtitle: args.subtitle,
        images_dir: args.images_dir,
    };
    let deck = assemble(&slides, &options)
        .with_context(|| format!("No deck could be built from {}", args.input.display()))?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }

    let writer = PptxWriter::new();
    writer
        .save(&deck, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Created PowerPoint presentation: {}", args.output.display());
    println!(
        "Total slides: {} (1 title + {} content)",
        deck.total_slides(),
        deck.slides.len()
    );

    Ok(())
}
