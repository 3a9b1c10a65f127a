// ABOUTME: Inline emoji support for text output
// ABOUTME: Resolves `:name:` tokens against a glyph directory and draws them in place

pub mod glyphs;
pub mod scanner;

pub use glyphs::GlyphDirectory;
pub use scanner::Emojifier;
