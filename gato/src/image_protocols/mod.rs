// ABOUTME: Image protocol implementations for terminal inline image display
// ABOUTME: Defines the emitter seam plus terminal geometry, conversion, and animation helpers

use std::io::{self, Write};
use std::path::Path;

/// How the terminal should read the image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    /// Regular file, left in place after display
    File,
    /// Temporary file, deleted by the terminal once read
    TemporaryFile,
}

/// Cell rows and columns sent with an image request. Zero lets the terminal
/// pick from the image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub rows: u32,
    pub columns: u32,
}

impl Placement {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }
}

pub trait ImageProtocol {
    /// Write the escape sequence that asks the terminal to draw the image at `path`
    fn write_image(
        &self,
        out: &mut dyn Write,
        path: &Path,
        placement: Placement,
        transmission: Transmission,
    ) -> io::Result<()>;
}

pub mod animation;
pub mod conversion;
pub mod kitty;
pub mod terminal;

pub use animation::{Animation, Frame};
pub use kitty::KittyProtocol;
pub use terminal::ScreenInfo;
