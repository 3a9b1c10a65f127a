// ABOUTME: Animated gif playback over the Kitty protocol
// ABOUTME: Redraws PNG frames in place between saved and restored cursor positions

use super::terminal::{restore_cursor_position, save_cursor_position};
use super::{ImageProtocol, Placement, Transmission};
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempPath;

/// One decoded frame stored as a PNG on disk
#[derive(Debug)]
pub struct Frame {
    path: TempPath,
    delay: Duration,
    height: u32,
}

impl Frame {
    pub fn new(path: TempPath, delay: Duration, height: u32) -> Self {
        Self {
            path,
            delay,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug)]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Pixel height of the tallest frame
    pub fn tallest(&self) -> u32 {
        self.frames.iter().map(Frame::height).max().unwrap_or(0)
    }

    /// Draw every frame once, each at the current cursor position
    pub async fn play_cycle<W: Write>(
        &self,
        out: &mut W,
        protocol: &dyn ImageProtocol,
    ) -> Result<()> {
        for frame in &self.frames {
            save_cursor_position(out)?;
            protocol.write_image(
                out,
                frame.path(),
                Placement::default(),
                Transmission::File,
            )?;
            restore_cursor_position(out)?;
            tokio::time::sleep(frame.delay).await;
        }
        Ok(())
    }
}
