//! File I/O helpers for the demo binaries and tests.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA [`RawImage`].
//! - `save_raw_image`: write a [`RawImage`] to disk via the `image` crate.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The pipeline itself never performs file I/O; these helpers keep the codec
//! boundary outside the core.
use super::RawImage;
use crate::error::{Error, Result};
use image::{GrayImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RawImage> {
    let img = image::open(path)?.into_rgba8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    RawImage::from_vec(w, h, 4, img.into_raw())
}

/// Save a [`RawImage`] to disk. Supports 4-channel (RGBA) and single-channel
/// (grayscale) layouts; anything else must be rendered first.
pub fn save_raw_image(image: &RawImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    match image.channels {
        4 => {
            let buf: RgbaImage =
                RgbaImage::from_raw(image.w as u32, image.h as u32, image.data.clone())
                    .ok_or_else(|| Error::Codec("failed to create RGBA buffer".to_string()))?;
            buf.save(path)?;
        }
        1 => {
            let buf: GrayImage =
                GrayImage::from_raw(image.w as u32, image.h as u32, image.data.clone())
                    .ok_or_else(|| Error::Codec("failed to create grayscale buffer".to_string()))?;
            buf.save(path)?;
        }
        other => {
            return Err(Error::Codec(format!(
                "cannot encode image with {} channels",
                other
            )));
        }
    }
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Codec(format!("failed to serialize JSON: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
