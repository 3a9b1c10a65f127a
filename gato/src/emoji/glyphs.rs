// ABOUTME: Glyph directory lookup for emoji tokens
// ABOUTME: Maps a token name to `<dir>/<name>.png` when that file exists

use crate::constants::emoji::GLYPH_EXTENSION;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphDirectory {
    root: PathBuf,
}

impl GlyphDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate file for `name`. The name is joined as-is.
    pub fn glyph_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, GLYPH_EXTENSION))
    }

    /// Look up the glyph for `name`, re-checking the filesystem on every call.
    ///
    /// Only regular files (or symlinks to them) resolve. Names the OS cannot
    /// resolve to an entry count as missing; other I/O failures are returned.
    pub fn resolve(&self, name: &str) -> io::Result<Option<PathBuf>> {
        let path = self.glyph_path(name);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Some(path)),
            Ok(_) => {
                log::debug!("Glyph {} is not a regular file", path.display());
                Ok(None)
            }
            Err(e) if is_missing(&e) => {
                log::debug!("No glyph for '{}' in {}", name, self.root.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotFound
            | ErrorKind::NotADirectory
            | ErrorKind::InvalidInput
            | ErrorKind::InvalidFilename
    )
}
