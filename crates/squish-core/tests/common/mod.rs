#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use squish_core::compress::Encoder;
use squish_core::error::{Result, SquishError};
use squish_core::quality::Quality;
use squish_core::view::{DualViewport, Pane, Vec2};

/// Dual viewport with both panes loaded and sized.
pub fn loaded_dual(original: Vec2, compressed: Vec2, viewport: Vec2) -> DualViewport {
    let mut dual = DualViewport::default();
    dual.set_viewport_size(Pane::Original, viewport);
    dual.set_viewport_size(Pane::Compressed, viewport);
    dual.load_original(original);
    dual.set_compressed_content(compressed);
    dual
}

/// In-process encoder: output shrinks linearly as the quality number grows.
pub struct FakeEncoder;

impl FakeEncoder {
    pub fn expected_size(quality: Quality) -> u64 {
        (32 - quality.get() as u64) * 100
    }
}

impl Encoder for FakeEncoder {
    fn name(&self) -> &str {
        "fake"
    }

    fn encode(&self, input: &Path, output: &Path, quality: Quality) -> Result<()> {
        if !input.exists() {
            return Err(SquishError::EncodingFailed {
                status: Some(1),
                stderr: format!("{}: No such file or directory", input.display()),
            });
        }
        std::fs::write(output, vec![0u8; Self::expected_size(quality) as usize])?;
        Ok(())
    }
}

/// Write a file of exactly `len` bytes.
pub fn write_bytes(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![7u8; len]).expect("write input");
    path
}

/// Write a noisy RGB PNG so that encoder quality makes a visible difference.
pub fn write_sample_png(dir: &Path, name: &str) -> PathBuf {
    let mut img = RgbImage::new(96, 64);
    let mut state: u32 = 0x1234_5678;
    for (x, y, px) in img.enumerate_pixels_mut() {
        // xorshift noise on top of a gradient
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let noise = (state & 0x3f) as u8;
        *px = Rgb([
            (x as u8).wrapping_mul(2).wrapping_add(noise),
            (y as u8).wrapping_mul(3).wrapping_add(noise / 2),
            noise.wrapping_mul(3),
        ]);
    }
    let path = dir.join(name);
    img.save(&path).expect("save sample png");
    path
}
