//! CLI tool that generates the Santaan AI EMR marketing deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{build_deck, Deck, OUTPUT_DIR, OUTPUT_FILENAME};
use deck_pptx::PptxWriter;
use std::path::{Path, PathBuf};

/// Generate the Santaan AI EMR marketing PowerPoint presentation.
#[derive(Parser, Debug)]
#[command(name = "generate-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    println!("🎯 Generating Santaan AI EMR PowerPoint Presentation...");

    match generate(&args.output) {
        Ok((deck, output_path)) => {
            println!("✅ PowerPoint presentation created successfully!");
            println!("📁 File saved as: {}", output_path.display());
            println!("📊 Total slides: {}", deck.slide_count());
        }
        Err(e) => {
            eprintln!("❌ Error creating presentation: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Build the deck and save it under `output_dir`, creating the directory
/// if needed. Returns the deck and the path written.
fn generate(output_dir: &Path) -> Result<(Deck, PathBuf)> {
    let deck = build_deck();
    log::debug!("Built deck with {} slides", deck.slide_count());

    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let output_path = output_dir.join(OUTPUT_FILENAME);
    PptxWriter::new()
        .save(&deck, &output_path)
        .with_context(|| format!("Failed to save presentation to {}", output_path.display()))?;

    Ok((deck, output_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("presentation");

        let (deck, path) = generate(&output_dir).unwrap();

        assert_eq!(deck.slide_count(), 12);
        assert_eq!(path, output_dir.join(OUTPUT_FILENAME));
        assert!(path.is_file());
    }

    #[test]
    fn test_generate_is_idempotent_over_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("presentation");

        generate(&output_dir).unwrap();
        // Second run overwrites the file; existing directory is not an error.
        let (_, path) = generate(&output_dir).unwrap();
        assert!(path.is_file());
    }
}
