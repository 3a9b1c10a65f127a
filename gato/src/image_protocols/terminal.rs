// ABOUTME: Terminal geometry queries and cursor movement helpers
// ABOUTME: Wraps crossterm so animations can reserve rows and redraw in place

use crate::error::GatoError;
use crossterm::{cursor, queue, terminal::window_size};
use std::io::{self, Write};

/// Size of the terminal in cells and pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub columns: u16,
    pub rows: u16,
    pub width: u16,
    pub height: u16,
}

impl ScreenInfo {
    /// Query the controlling terminal
    pub fn detect() -> Result<Self, GatoError> {
        let size = window_size().map_err(|e| GatoError::TerminalGeometry(e.to_string()))?;
        let info = Self {
            columns: size.columns,
            rows: size.rows,
            width: size.width,
            height: size.height,
        };
        log::debug!("Terminal geometry: {:?}", info);
        info.validate()?;
        Ok(info)
    }

    fn validate(&self) -> Result<(), GatoError> {
        if self.rows == 0 || self.height == 0 {
            return Err(GatoError::TerminalGeometry(format!(
                "terminal reported {} rows over {} pixels",
                self.rows, self.height
            )));
        }
        Ok(())
    }

    /// Pixel height of a single cell, never less than one
    pub fn cell_height(&self) -> u32 {
        (u32::from(self.height) / u32::from(self.rows.max(1))).max(1)
    }

    /// Rows to reserve so an image `pixel_height` tall fits below the cursor
    pub fn rows_for_height(&self, pixel_height: u32) -> u32 {
        pixel_height / self.cell_height() + 1
    }
}

/// Print `rows` blank lines and move back up so the image draws into them
pub fn reserve_rows(out: &mut impl Write, rows: u32) -> io::Result<()> {
    out.write_all("\n".repeat(rows as usize).as_bytes())?;
    move_cursor_up(out, rows)
}

pub fn move_cursor_up(out: &mut impl Write, rows: u32) -> io::Result<()> {
    if rows > 0 {
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveUp(rows))?;
    }
    out.flush()
}

pub fn save_cursor_position(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::SavePosition)?;
    out.flush()
}

pub fn restore_cursor_position(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::RestorePosition)?;
    out.flush()
}
