// ABOUTME: Single-pass scanner that swaps `:name:` tokens for inline glyph images
// ABOUTME: Unresolved or unterminated tokens are written back as their literal text

use super::glyphs::GlyphDirectory;
use crate::constants::emoji::{ABANDON_CHARS, TOKEN_DELIMITER};
use crate::image_protocols::{ImageProtocol, Placement, Transmission};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Copying text through
    Normal,
    /// Saw an opening colon, buffering a candidate name
    Collecting,
}

/// Replaces `:name:` tokens in text with glyph images from a [`GlyphDirectory`].
///
/// Each call to [`Emojifier::emojify`] scans one line and always terminates
/// the output with a single `\n`. Text is written to the sink as soon as it is
/// decided; the sink is flushed before every image request so the glyph lands
/// after the text that precedes it.
///
/// Two behaviors are kept for compatibility with existing output:
/// a doubled colon (`::`) writes one literal colon and keeps collecting, so
/// `::smile:` renders `:` followed by the glyph; and glyphs are drawn with a
/// fixed placement of one row by two columns unless configured otherwise.
pub struct Emojifier<P> {
    glyphs: GlyphDirectory,
    protocol: P,
    placement: Placement,
}

impl<P: ImageProtocol> Emojifier<P> {
    pub fn new(glyphs: GlyphDirectory, protocol: P, placement: Placement) -> Self {
        Self {
            glyphs,
            protocol,
            placement,
        }
    }

    /// Scan `text` once, writing literal text and glyph images to `out`
    pub fn emojify<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut state = ScanState::Normal;
        let mut token = String::new();

        for c in text.chars() {
            match state {
                ScanState::Normal if c == TOKEN_DELIMITER => state = ScanState::Collecting,
                ScanState::Normal => write_char(out, c)?,
                ScanState::Collecting if c == TOKEN_DELIMITER => {
                    if token.is_empty() {
                        // `::` emits the first colon; the second one opens
                        write_char(out, TOKEN_DELIMITER)?;
                        continue;
                    }

                    match self.glyphs.resolve(&token)? {
                        Some(path) => {
                            out.flush()?;
                            self.protocol.write_image(
                                out,
                                &path,
                                self.placement,
                                Transmission::File,
                            )?;
                        }
                        None => write_literal(out, &token, Some(c))?,
                    }
                    token.clear();
                    state = ScanState::Normal;
                }
                ScanState::Collecting if ABANDON_CHARS.contains(&c) => {
                    write_literal(out, &token, Some(c))?;
                    token.clear();
                    state = ScanState::Normal;
                }
                ScanState::Collecting => token.push(c),
            }
        }

        if state == ScanState::Collecting {
            write_literal(out, &token, None)?;
        }
        out.write_all(b"\n")
    }
}

/// Write an unresolved token back out as `:<token><closing>`
fn write_literal<W: Write>(out: &mut W, token: &str, closing: Option<char>) -> io::Result<()> {
    write_char(out, TOKEN_DELIMITER)?;
    out.write_all(token.as_bytes())?;
    match closing {
        Some(c) => write_char(out, c),
        None => Ok(()),
    }
}

fn write_char<W: Write>(out: &mut W, c: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    out.write_all(c.encode_utf8(&mut buf).as_bytes())
}
