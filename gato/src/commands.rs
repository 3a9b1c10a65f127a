// ABOUTME: Command implementations behind each display mode
// ABOUTME: Shows still images, loops animated gifs until Ctrl-C, and emojifies text

use crate::emoji::Emojifier;
use crate::image_protocols::conversion::{convert_to_png, extract_frames};
use crate::image_protocols::terminal::reserve_rows;
use crate::image_protocols::{
    Animation, ImageProtocol, Placement, ScreenInfo, Transmission,
};
use anyhow::{Context, Result};
use std::future::{poll_fn, Future};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::pin::Pin;
use std::task::Poll;

/// Convert `path` to PNG and hand it to the terminal as a temporary file
pub fn show_image<W: Write>(out: &mut W, protocol: &dyn ImageProtocol, path: &Path) -> Result<()> {
    let png = convert_to_png(path)?;
    protocol.write_image(
        out,
        &png,
        Placement::default(),
        Transmission::TemporaryFile,
    )?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Loop an animated gif in place until interrupted with Ctrl-C
pub async fn play_gif<W: Write>(
    out: &mut W,
    protocol: &dyn ImageProtocol,
    path: &Path,
) -> Result<()> {
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let Some(animation) = extract_frames_until(path, interrupt.as_mut()).await? else {
        log::debug!("Interrupted while extracting frames");
        return Ok(());
    };
    let screen = ScreenInfo::detect()?;
    let rows = screen.rows_for_height(animation.tallest());
    log::debug!(
        "Reserving {} rows for {} frames",
        rows,
        animation.frames().len()
    );

    reserve_rows(out, rows)?;

    tokio::select! {
        result = animate(&animation, out, protocol) => result?,
        signal = &mut interrupt => {
            signal.context("Failed to listen for Ctrl-C")?;
            log::debug!("Interrupted, stopping animation");
        }
    }

    // Leave the cursor below the image before the frames are removed
    out.write_all("\n".repeat(rows as usize).as_bytes())?;
    out.flush()?;
    drop(animation);
    Ok(())
}

/// Extract frames on a blocking thread, giving up if `interrupt` resolves first.
///
/// `interrupt` is polled before extraction starts so a Ctrl-C listener is
/// already installed by the time any frame file exists. On interrupt the
/// extraction is still awaited so its frames are removed.
pub async fn extract_frames_until<F>(path: &Path, mut interrupt: Pin<&mut F>) -> Result<Option<Animation>>
where
    F: Future<Output = io::Result<()>>,
{
    if let Poll::Ready(signal) = poll_fn(|cx| Poll::Ready(interrupt.as_mut().poll(cx))).await {
        signal.context("Failed to listen for Ctrl-C")?;
        return Ok(None);
    }

    let owned = path.to_path_buf();
    let mut extraction = tokio::task::spawn_blocking(move || extract_frames(&owned));

    tokio::select! {
        biased;
        signal = interrupt.as_mut() => {
            signal.context("Failed to listen for Ctrl-C")?;
            drop(extraction.await);
            Ok(None)
        }
        joined = &mut extraction => {
            let animation = joined.context("Frame extraction task failed")??;
            Ok(Some(animation))
        }
    }
}

async fn animate<W: Write>(
    animation: &Animation,
    out: &mut W,
    protocol: &dyn ImageProtocol,
) -> Result<()> {
    loop {
        animation.play_cycle(out, protocol).await?;
    }
}

/// Emojify each line of `input`.
///
/// Only the trailing `\n` is stripped, since the scanner appends its own;
/// any other byte, `\r` included, passes through. Invalid UTF-8 is replaced
/// with U+FFFD rather than ending the stream.
pub fn emojify_lines<P, R, W>(emojifier: &Emojifier<P>, mut input: R, out: &mut W) -> Result<()>
where
    P: ImageProtocol,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        emojifier.emojify(out, &String::from_utf8_lossy(line))?;
    }
    out.flush()?;
    Ok(())
}

/// Emojify a single piece of text given on the command line
pub fn emojify_text<P, W>(emojifier: &Emojifier<P>, text: &str, out: &mut W) -> Result<()>
where
    P: ImageProtocol,
    W: Write,
{
    emojifier.emojify(out, text)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::GlyphDirectory;
    use crate::image_protocols::KittyProtocol;
    use base64::{Engine, engine::general_purpose::STANDARD};
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn kitty_emojifier(dir: &Path) -> Emojifier<KittyProtocol> {
        Emojifier::new(GlyphDirectory::new(dir), KittyProtocol, Placement::new(1, 2))
    }

    #[test]
    fn test_emojify_lines_one_output_line_per_input_line() {
        let dir = TempDir::new().unwrap();
        let emojifier = kitty_emojifier(dir.path());
        let input = Cursor::new("first :x\nsecond line\nthird");

        let mut out = Vec::new();
        emojify_lines(&emojifier, input, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "first :x\nsecond line\nthird\n"
        );
    }

    #[test]
    fn test_emojify_lines_keeps_carriage_returns() {
        let dir = TempDir::new().unwrap();
        let emojifier = kitty_emojifier(dir.path());

        let mut out = Vec::new();
        emojify_lines(&emojifier, Cursor::new("a\r\n"), &mut out).unwrap();
        assert_eq!(out, b"a\r\n");

        let mut out = Vec::new();
        emojify_lines(&emojifier, Cursor::new("a\r\nb\rc\n"), &mut out).unwrap();
        assert_eq!(out, b"a\r\nb\rc\n");
    }

    #[test]
    fn test_emojify_lines_survives_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let emojifier = kitty_emojifier(dir.path());
        let input = Cursor::new(b"bad \xff byte\nnext line\n".to_vec());

        let mut out = Vec::new();
        emojify_lines(&emojifier, input, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bad \u{FFFD} byte\nnext line\n"
        );
    }

    fn write_test_gif(path: &Path) {
        use image::codecs::gif::GifEncoder;
        use image::{Delay, Frame, RgbaImage};

        let mut encoder = GifEncoder::new(fs::File::create(path).unwrap());
        let frames = (0..2).map(|_| {
            let buffer = RgbaImage::from_pixel(3, 3, image::Rgba([9, 9, 9, 255]));
            Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(20, 1))
        });
        encoder.encode_frames(frames).unwrap();
    }

    #[tokio::test]
    async fn test_extract_frames_until_finishes_without_interrupt() {
        let dir = TempDir::new().unwrap();
        let gif = dir.path().join("anim.gif");
        write_test_gif(&gif);

        let interrupt = std::future::pending::<io::Result<()>>();
        tokio::pin!(interrupt);
        let animation = extract_frames_until(&gif, interrupt.as_mut())
            .await
            .unwrap()
            .expect("Should extract frames when not interrupted");
        assert_eq!(animation.frames().len(), 2);
    }

    #[tokio::test]
    async fn test_extract_frames_until_stops_on_interrupt() {
        let dir = TempDir::new().unwrap();
        let gif = dir.path().join("anim.gif");
        write_test_gif(&gif);

        let interrupt = std::future::ready(Ok(()));
        tokio::pin!(interrupt);
        let animation = extract_frames_until(&gif, interrupt.as_mut()).await.unwrap();
        assert!(animation.is_none());
    }

    #[tokio::test]
    async fn test_extract_frames_until_reports_listener_failure() {
        let dir = TempDir::new().unwrap();
        let gif = dir.path().join("anim.gif");
        write_test_gif(&gif);

        let interrupt = std::future::ready(Err(io::Error::other("no signal support")));
        tokio::pin!(interrupt);
        assert!(extract_frames_until(&gif, interrupt.as_mut()).await.is_err());
    }

    #[test]
    fn test_emojify_lines_empty_input() {
        let dir = TempDir::new().unwrap();
        let emojifier = kitty_emojifier(dir.path());

        let mut out = Vec::new();
        emojify_lines(&emojifier, Cursor::new(""), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_emojify_text_keeps_embedded_newlines() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cat.png"), b"png").unwrap();
        let emojifier = kitty_emojifier(dir.path());

        let mut out = Vec::new();
        emojify_text(&emojifier, "a :cat:\nb :dog\nc", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("a \x1b_Gf=100,t=f,r=1,c=2,a=T;"));
        assert!(text.ends_with("\x1b\\\nb :dog\nc\n"));
    }

    #[test]
    fn test_show_image_transmits_temporary_png() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("still.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 0, 255]))
            .save(&source)
            .unwrap();

        let mut out = Vec::new();
        show_image(&mut out, &KittyProtocol, &source).unwrap();
        let text = String::from_utf8(out).unwrap();

        let prefix = "\x1b_Gf=100,t=t,r=0,c=0,a=T;";
        assert!(text.starts_with(prefix));
        assert!(text.ends_with("\x1b\\\n"));

        let payload = &text[prefix.len()..text.len() - "\x1b\\\n".len()];
        let converted = PathBuf::from(String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap());
        assert!(converted.is_file());
        assert_ne!(converted, source);
        fs::remove_file(converted).unwrap();
    }

    #[test]
    fn test_show_image_missing_file() {
        let mut out = Vec::new();
        assert!(show_image(&mut out, &KittyProtocol, Path::new("/nonexistent.png")).is_err());
        assert!(out.is_empty());
    }
}
