// ABOUTME: Kitty terminal graphics protocol implementation
// ABOUTME: Transmits PNG files by base64-encoded path rather than by pixel data

use super::{ImageProtocol, Placement, Transmission};
use crate::constants::kitty::{APC_START, FORMAT_PNG, STRING_TERMINATOR};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct KittyProtocol;

impl KittyProtocol {
    /// Build the full request for `path` without writing it
    pub fn encode_request(
        &self,
        path: &Path,
        placement: Placement,
        transmission: Transmission,
    ) -> String {
        let medium = match transmission {
            Transmission::File => 'f',
            Transmission::TemporaryFile => 't',
        };
        let payload = STANDARD.encode(path.as_os_str().as_encoded_bytes());

        format!(
            "{}f={},t={},r={},c={},a=T;{}{}",
            APC_START,
            FORMAT_PNG,
            medium,
            placement.rows,
            placement.columns,
            payload,
            STRING_TERMINATOR
        )
    }
}

impl ImageProtocol for KittyProtocol {
    fn write_image(
        &self,
        out: &mut dyn Write,
        path: &Path,
        placement: Placement,
        transmission: Transmission,
    ) -> io::Result<()> {
        log::debug!("Displaying {} via kitty ({:?})", path.display(), placement);
        out.write_all(self.encode_request(path, placement, transmission).as_bytes())?;
        out.flush()
    }
}
