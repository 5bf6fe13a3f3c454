//! PixVox CLI - Sprite tools
//!
//! Renders sprite manifests to PNG, counts the colors of an image and stamps
//! sprites onto boards.

use clap::{Parser, Subcommand};
use pixvox_core::Color;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// PixVox - pixel and voxel sprite tools
#[derive(Parser)]
#[command(name = "pixvox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sprite a manifest describes and write it as PNG
    Render {
        /// Sprite manifest (JSON); source paths are relative to it
        manifest: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Count the colors of an image
    Census {
        /// Input image
        image: PathBuf,

        /// Only show the most frequent colors
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Draw a sprite onto a solid board and write the board as PNG
    Stamp {
        /// Sprite manifest (JSON)
        manifest: PathBuf,

        /// Board size as WIDTHxHEIGHT
        #[arg(short, long, value_parser = commands::parse_size, default_value = "32x32")]
        board: (usize, usize),

        /// Board background color (#rrggbb or #rrggbbaa)
        #[arg(long, default_value = "#000000")]
        background: Color,

        /// Sprite offset on the board as X,Y (may be negative)
        #[arg(
            long,
            value_parser = commands::parse_offset,
            default_value = "0,0",
            allow_hyphen_values = true
        )]
        at: (i64, i64),

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { manifest, output } => {
            commands::render::run(&manifest, &output)?;
        }

        Commands::Census { image, top } => {
            commands::census::run(&image, top)?;
        }

        Commands::Stamp {
            manifest,
            board,
            background,
            at,
            output,
        } => {
            commands::stamp::run(&manifest, board, background, at, &output)?;
        }
    }

    Ok(())
}
