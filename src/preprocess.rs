//! Luminance extraction and normalization.
//!
//! Converts a multi-channel 8-bit bitmap into a single-channel float buffer
//! normalized to [0.0, 1.0]. Images with three or more channels are reduced
//! with Rec. 601 luma weights over the first three channels; additional
//! channels (e.g. alpha) are ignored. One- and two-channel images copy
//! channel 0 directly.
use crate::error::{Error, Result};
use crate::image::{LumaBuffer, RawImage};
use log::debug;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Maximum representable 8-bit sample value, used for normalization.
const SAMPLE_MAX: f32 = 255.0;

/// Convert `image` into a normalized luminance buffer of identical
/// dimensions. Fails with [`Error::InvalidDimensions`] on zero-sized input.
pub fn luminance(image: &RawImage) -> Result<LumaBuffer> {
    if image.w == 0 || image.h == 0 || image.channels == 0 {
        return Err(Error::InvalidDimensions(format!(
            "cannot preprocess a {}x{} image with {} channels",
            image.w, image.h, image.channels
        )));
    }

    let mut out = LumaBuffer::new(image.w, image.h);
    if image.channels >= 3 {
        for (dst, px) in out.data.iter_mut().zip(image.data.chunks_exact(image.channels)) {
            let y = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
            // The f32 weight sum lands a hair above 1.0; keep the invariant tight.
            *dst = (y / SAMPLE_MAX).min(1.0);
        }
    } else {
        for (dst, px) in out.data.iter_mut().zip(image.data.chunks_exact(image.channels)) {
            *dst = px[0] as f32 / SAMPLE_MAX;
        }
    }
    debug!(
        "luminance {}x{} from {} channels",
        image.w, image.h, image.channels
    );
    Ok(out)
}
