// ABOUTME: Image format conversion pipeline for terminal compatibility
// ABOUTME: Re-encodes still images and animated gif frames as PNG temp files

use super::animation::{Animation, Frame};
use crate::constants::animation::DEFAULT_FRAME_DELAY;
use crate::error::GatoError;
use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, ImageFormat};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{Builder, TempPath};

/// Decode any supported image and write it out as a PNG the terminal owns.
///
/// The file is kept on disk: it is meant to be sent with
/// [`Transmission::TemporaryFile`](super::Transmission::TemporaryFile) so the
/// terminal removes it after reading.
pub fn convert_to_png(path: &Path) -> Result<PathBuf> {
    let img = image::open(path).map_err(|source| GatoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let target = png_temp_path()?;
    write_png(&img, &target)?;
    let kept = target
        .keep()
        .context("Failed to keep converted image on disk")?;

    log::debug!("Converted {} to {}", path.display(), kept.display());
    Ok(kept)
}

/// Split an animated gif into PNG frames, removed again when the
/// returned [`Animation`] is dropped
pub fn extract_frames(path: &Path) -> Result<Animation> {
    let decode_err = |source| GatoError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let file =
        File::open(path).with_context(|| format!("Failed to open gif: {}", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file)).map_err(decode_err)?;
    let decoded = decoder.into_frames().collect_frames().map_err(decode_err)?;

    if decoded.is_empty() {
        return Err(GatoError::NoFrames(path.to_path_buf()).into());
    }

    let mut frames = Vec::with_capacity(decoded.len());
    for decoded_frame in decoded {
        let (numer, denom) = decoded_frame.delay().numer_denom_ms();
        let delay = frame_delay(numer, denom);

        let buffer = decoded_frame.into_buffer();
        let height = buffer.height();

        let target = png_temp_path()?;
        write_png(&DynamicImage::ImageRgba8(buffer), &target)?;
        frames.push(Frame::new(target, delay, height));
    }

    log::debug!(
        "Extracted {} frames from {}",
        frames.len(),
        path.display()
    );
    Ok(Animation::new(frames))
}

fn frame_delay(numer: u32, denom: u32) -> Duration {
    let millis = numer / denom.max(1);
    if millis == 0 {
        DEFAULT_FRAME_DELAY
    } else {
        Duration::from_millis(u64::from(millis))
    }
}

fn png_temp_path() -> Result<TempPath> {
    let file = Builder::new()
        .prefix("gato-")
        .suffix(".png")
        .tempfile()
        .context("Failed to create temporary PNG file")?;
    Ok(file.into_temp_path())
}

fn write_png(img: &DynamicImage, target: &Path) -> Result<()> {
    img.save_with_format(target, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::{GifEncoder, Repeat};
    use image::{Delay, RgbaImage};
    use tempfile::TempDir;

    fn write_test_gif(path: &Path, heights: &[u32], delay_ms: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).unwrap();
        let frames = heights.iter().map(|&height| {
            let buffer = RgbaImage::from_pixel(4, height, image::Rgba([255, 0, 0, 255]));
            image::Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
        });
        encoder.encode_frames(frames).unwrap();
    }

    #[test]
    fn test_frame_delay_defaults() {
        assert_eq!(frame_delay(0, 1), DEFAULT_FRAME_DELAY);
        assert_eq!(frame_delay(50, 1), Duration::from_millis(50));
        assert_eq!(frame_delay(100, 0), Duration::from_millis(100));
    }

    #[test]
    fn test_extract_frames() {
        let dir = TempDir::new().unwrap();
        let gif = dir.path().join("anim.gif");
        write_test_gif(&gif, &[6, 6, 6], 40);

        let animation = extract_frames(&gif).unwrap();
        assert_eq!(animation.frames().len(), 3);
        assert_eq!(animation.tallest(), 6);
        for frame in animation.frames() {
            assert!(frame.path().is_file());
            assert_eq!(frame.delay(), Duration::from_millis(40));
        }
    }

    #[test]
    fn test_frames_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let gif = dir.path().join("anim.gif");
        write_test_gif(&gif, &[3, 3], 10);

        let animation = extract_frames(&gif).unwrap();
        let paths: Vec<PathBuf> = animation
            .frames()
            .iter()
            .map(|f| f.path().to_path_buf())
            .collect();
        drop(animation);

        assert!(paths.iter().all(|p| !p.exists()));
    }

    #[test]
    fn test_convert_to_png() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("still.bmp");
        RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 255, 255]))
            .save_with_format(&source, ImageFormat::Bmp)
            .unwrap();

        let png = convert_to_png(&source).unwrap();
        assert_eq!(image::ImageFormat::from_path(&png).unwrap(), ImageFormat::Png);
        assert!(png.is_file());
        std::fs::remove_file(png).unwrap();
    }

    #[test]
    fn test_convert_missing_file() {
        let err = convert_to_png(Path::new("/nonexistent/cat.png")).unwrap_err();
        assert!(err.downcast_ref::<GatoError>().is_some());
    }
}
