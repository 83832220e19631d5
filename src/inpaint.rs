//! Neighbor-median inpainting of flagged pixels.
//!
//! Each flagged pixel is replaced by the median of the unflagged pixels in
//! its 3×3 neighborhood, reading original values only — replacements made
//! earlier in the pass are never consulted, so the transform is
//! order-independent. Flagged neighbors are discarded to avoid smearing
//! noise into the repair.
use crate::error::{Error, Result};
use crate::image::LumaBuffer;
use crate::mask::NoiseMask;
use log::debug;

/// Outcome of an inpainting pass.
#[derive(Debug)]
pub struct InpaintReport {
    /// Repaired buffer, same dimensions as the input.
    pub buffer: LumaBuffer,
    /// Flagged pixels left at their original value because every neighbor
    /// was also flagged (possible inside large streaks).
    pub fallback_pixels: usize,
}

/// Replace flagged pixels in `buffer` using their unflagged 3×3 neighbors.
///
/// Unflagged pixels pass through unchanged; an all-clear mask returns the
/// input exactly. The median of an n-element neighborhood is the sorted
/// element at `n / 2`, matching the detector's 9-element rule.
pub fn inpaint(buffer: &LumaBuffer, mask: &NoiseMask) -> Result<InpaintReport> {
    if buffer.w != mask.w || buffer.h != mask.h {
        return Err(Error::InvalidDimensions(format!(
            "buffer {}x{} does not match mask {}x{}",
            buffer.w, buffer.h, mask.w, mask.h
        )));
    }

    let mut out = buffer.clone();
    let mut fallback_pixels = 0usize;
    if buffer.w < 3 || buffer.h < 3 {
        // No interior, nothing to repair.
        return Ok(InpaintReport {
            buffer: out,
            fallback_pixels,
        });
    }
    // Flagged pixels are interior-only (borders are never flagged), so the
    // full 3×3 window is always in bounds.
    for y in 1..buffer.h - 1 {
        for x in 1..buffer.w - 1 {
            if !mask.get(x, y) {
                continue;
            }
            let mut neighbors = [0.0f32; 9];
            let mut n = 0usize;
            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    if !mask.get(nx, ny) {
                        neighbors[n] = buffer.get(nx, ny);
                        n += 1;
                    }
                }
            }
            if n == 0 {
                fallback_pixels += 1;
                continue;
            }
            let clean = &mut neighbors[..n];
            clean.sort_unstable_by(f32::total_cmp);
            out.set(x, y, clean[n / 2]);
        }
    }

    if fallback_pixels > 0 {
        debug!(
            "inpaint left {} flagged pixels unchanged (no clean neighbors)",
            fallback_pixels
        );
    }
    Ok(InpaintReport {
        buffer: out,
        fallback_pixels,
    })
}
