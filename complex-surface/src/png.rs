//! PNG output for RGBA8 pixel buffers.

use anyhow::{ensure, Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const RGB8_CHANNELS: usize = 3;
const RGBA8_CHANNELS: usize = 4;

/// Expand a tightly packed RGB8 buffer to RGBA8, making every pixel equal
/// to `key` fully transparent.
pub fn key_out_rgb8(rgb: &[u8], key: [u8; 3]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / RGB8_CHANNELS * RGBA8_CHANNELS);
    for px in rgb.chunks_exact(RGB8_CHANNELS) {
        let alpha = if px == key { 0 } else { 255 };
        rgba.extend_from_slice(&[px[0], px[1], px[2], alpha]);
    }
    rgba
}

/// Write a tightly packed RGBA8 buffer, replacing any existing file.
pub fn write_png_rgba8(path: &Path, data: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(RGBA8_CHANNELS))
        .ok_or_else(|| anyhow::anyhow!("image dimensions overflow when computing buffer size"))?;

    ensure!(
        data.len() == expected,
        "PNG writer requires tight RGBA8 buffer: expected {} bytes, got {}",
        expected,
        data.len()
    );

    let file = File::create(path)
        .with_context(|| format!("failed to create output PNG at {}", path.display()))?;

    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Default,
        FilterType::Adaptive,
    );
    encoder
        .write_image(data, width, height, ExtendedColorType::Rgba8)
        .with_context(|| format!("failed to encode PNG at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_colour_becomes_transparent() {
        let rgb = [0, 0, 0, 10, 20, 30];
        let rgba = key_out_rgb8(&rgb, [0, 0, 0]);
        assert_eq!(rgba, vec![0, 0, 0, 0, 10, 20, 30, 255]);
    }

    #[test]
    fn rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.png");
        let err = write_png_rgba8(&path, &[0; 12], 2, 2).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
        assert!(!path.exists());
    }

    #[test]
    fn writes_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        write_png_rgba8(&path, &[255; 16], 2, 2).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }
}
