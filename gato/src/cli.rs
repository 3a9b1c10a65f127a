// ABOUTME: CLI argument definitions for the gato application
// ABOUTME: Defines the mutually exclusive display modes using clap derive macros

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Value of `--emojify` that reads text from standard input
pub const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "gato")]
#[command(about = "Display images in the terminal.", long_about = None)]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["image", "gif", "emojify"])
))]
pub struct Cli {
    /// The path to the image to display
    #[arg(long, value_name = "PATH_TO_IMAGE")]
    pub image: Option<PathBuf>,

    /// The path to the animated gif to display
    #[arg(long, value_name = "PATH_TO_ANIMATED_GIF")]
    pub gif: Option<PathBuf>,

    /// Text to emojify ("-" reads lines from stdin)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub emojify: Option<String>,

    /// The path to the emoji files to use [default: <data dir>/gato/emoji]
    #[arg(long, value_name = "PATH_TO_EMOJIS")]
    pub path: Option<PathBuf>,

    /// Load settings from this file instead of the standard locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored messages
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,
}

/// What the user asked gato to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Image(PathBuf),
    Gif(PathBuf),
    Emojify(TextSource),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Stdin,
    Text(String),
}

impl Cli {
    pub fn mode(&self) -> Option<Mode> {
        if let Some(ref gif) = self.gif {
            return Some(Mode::Gif(gif.clone()));
        }
        if let Some(ref image) = self.image {
            return Some(Mode::Image(image.clone()));
        }
        self.emojify.as_deref().map(|text| {
            if text == STDIN_MARKER {
                Mode::Emojify(TextSource::Stdin)
            } else {
                Mode::Emojify(TextSource::Text(text.to_string()))
            }
        })
    }
}
