// ABOUTME: Custom error types for gato with user-friendly messages
// ABOUTME: Covers configuration, decoding, and terminal geometry failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatoError {
    #[error("Could not determine a data directory for emoji glyphs")]
    NoDataDir,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Animated gif {0} contains no frames")]
    NoFrames(PathBuf),

    #[error("Terminal geometry unavailable: {0}")]
    TerminalGeometry(String),
}

impl GatoError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            GatoError::NoDataDir => {
                Some("Pass --path or set GATO_EMOJI_DIR to point at your emoji directory")
            }
            GatoError::InvalidConfig(_) => {
                Some("Check ~/.config/gato/config.toml or the file passed with --config")
            }
            GatoError::TerminalGeometry(_) => Some(
                "Animated gifs need a terminal that reports its size in pixels, such as kitty",
            ),
            _ => None,
        }
    }
}
