// ABOUTME: Centralized constants for the gato application
// ABOUTME: Contains file names, emoji scanner characters, Kitty escape sequences, and timing defaults

/// Application identity and on-disk layout
pub mod app {
    /// Directory name used under the platform config and data directories
    pub const APP_NAME: &str = "gato";

    /// Config file name inside the XDG config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Project-local config file name, looked up in the current directory
    pub const LOCAL_CONFIG_FILE_NAME: &str = "gato.toml";

    /// Sub-directory of the data directory that holds emoji glyphs
    pub const EMOJI_SUBDIR: &str = "emoji";

    /// Environment variable overriding the glyph directory
    pub const EMOJI_DIR_ENV: &str = "GATO_EMOJI_DIR";
}

/// Emoji scanner vocabulary
pub mod emoji {
    /// Opens and closes a `:name:` token
    pub const TOKEN_DELIMITER: char = ':';

    /// Extension appended to a token name to find its glyph file
    pub const GLYPH_EXTENSION: &str = "png";

    /// Default cell rows an emoji is drawn into
    pub const DEFAULT_ROWS: u32 = 1;

    /// Default cell columns an emoji is drawn into
    pub const DEFAULT_COLUMNS: u32 = 2;

    /// Characters that abandon an in-progress token
    pub static ABANDON_CHARS: phf::Set<char> = phf::phf_set! {
        ' ', '\t', '\n', '(', ')', '!', '@', '#', '$', '%', '^', '&', '*', '~',
        '`', '\'', '"', '?', '/', '\\', ';', '<', '.',
    };
}

/// Kitty graphics protocol framing
pub mod kitty {
    /// APC introducer followed by the graphics command byte
    pub const APC_START: &str = "\x1b_G";

    /// String terminator closing the APC
    pub const STRING_TERMINATOR: &str = "\x1b\\";

    /// `f=` value for PNG payloads
    pub const FORMAT_PNG: u32 = 100;
}

/// Animated gif playback
pub mod animation {
    use std::time::Duration;

    /// Delay used for frames that carry no delay of their own
    pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);
}
