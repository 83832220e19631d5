//! Spike detection via 3×3 local-median comparison.
//!
//! Cosmic rays register as sharp single- or few-pixel spikes far brighter
//! than their surroundings. For every interior pixel the detector sorts the
//! nine values of its 3×3 neighborhood (the pixel itself included) and takes
//! the fifth smallest as the local median; the pixel is flagged iff
//! `value > median + threshold`.
//!
//! The pass is pure and order-independent: every comparison reads the
//! original buffer, never the mask or partially computed results, so row
//! order (and row-parallel execution) cannot change the outcome. Border
//! pixels have no full 3×3 window and are never flagged.
use crate::image::LumaBuffer;
use crate::mask::NoiseMask;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum image height before the parallel path is worth spawning.
#[cfg(feature = "parallel")]
const MIN_ROWS_FOR_PARALLEL: usize = 64;

/// Scan `buffer` and flag pixels inconsistent with their 3×3 neighborhood.
///
/// Deterministic: identical input and threshold always yield an identical
/// mask. Images narrower or shorter than 3 pixels have no interior and come
/// back all-clear.
pub fn detect_spikes(buffer: &LumaBuffer, threshold: f32) -> NoiseMask {
    let mut mask = NoiseMask::new(buffer.w, buffer.h);
    if buffer.w >= 3 && buffer.h >= 3 {
        scan_interior(buffer, threshold, &mut mask);
    }
    debug!(
        "detect_spikes {}x{} threshold={} flagged={}",
        buffer.w,
        buffer.h,
        threshold,
        mask.count_set()
    );
    mask
}

fn scan_interior(buffer: &LumaBuffer, threshold: f32, mask: &mut NoiseMask) {
    #[cfg(feature = "parallel")]
    if buffer.h >= MIN_ROWS_FOR_PARALLEL {
        mask.data
            .par_chunks_mut(buffer.w)
            .enumerate()
            .skip(1)
            .take(buffer.h - 2)
            .for_each(|(y, out)| scan_row(buffer, threshold, y, out));
        return;
    }

    for y in 1..buffer.h - 1 {
        scan_row(buffer, threshold, y, mask.row_mut(y));
    }
}

fn scan_row(buffer: &LumaBuffer, threshold: f32, y: usize, out: &mut [bool]) {
    let rows = [buffer.row(y - 1), buffer.row(y), buffer.row(y + 1)];
    let mut window = [0.0f32; 9];
    for x in 1..buffer.w - 1 {
        for (k, row) in rows.iter().enumerate() {
            window[3 * k..3 * k + 3].copy_from_slice(&row[x - 1..=x + 1]);
        }
        window.sort_unstable_by(f32::total_cmp);
        let median = window[4];
        if rows[1][x] > median + threshold {
            out[x] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spike_3x3() -> LumaBuffer {
        LumaBuffer::from_vec(3, 3, vec![0.1, 0.1, 0.1, 0.1, 0.9, 0.1, 0.1, 0.1, 0.1]).unwrap()
    }

    #[test]
    fn flags_center_spike_only() {
        let mask = detect_spikes(&spike_3x3(), 0.15);
        assert_eq!(
            mask.data,
            vec![false, false, false, false, true, false, false, false, false]
        );
    }

    #[test]
    fn conservative_threshold_keeps_spike() {
        // 0.9 > 0.1 + 0.5 still holds, so even the most conservative
        // threshold flags a strong spike.
        let mask = detect_spikes(&spike_3x3(), 0.5);
        assert!(mask.get(1, 1));

        // A mild bump stays unflagged at the same threshold.
        let mild =
            LumaBuffer::from_vec(3, 3, vec![0.1, 0.1, 0.1, 0.1, 0.3, 0.1, 0.1, 0.1, 0.1]).unwrap();
        let mask = detect_spikes(&mild, 0.5);
        assert_eq!(mask.count_set(), 0);
    }

    #[test]
    fn detection_is_deterministic() {
        let mut buffer = LumaBuffer::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                // Deterministic pseudo-texture with a few spikes sprinkled in.
                let v = ((x * 7 + y * 13) % 29) as f32 / 29.0 * 0.3;
                buffer.set(x, y, if (x * y) % 97 == 5 { 0.95 } else { v });
            }
        }
        let a = detect_spikes(&buffer, 0.2);
        let b = detect_spikes(&buffer, 0.2);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn border_is_never_flagged() {
        let mut buffer = LumaBuffer::new(5, 5);
        // Bright everywhere; only interior pixels may legally be flagged.
        for v in buffer.data.iter_mut() {
            *v = 1.0;
        }
        buffer.set(0, 0, 0.0);
        let mask = detect_spikes(&buffer, 0.05);
        for y in 0..5 {
            for x in 0..5 {
                if x == 0 || y == 0 || x == 4 || y == 4 {
                    assert!(!mask.get(x, y), "border pixel ({x}, {y}) flagged");
                }
            }
        }
    }

    #[test]
    fn tiny_images_have_no_interior() {
        let buffer = LumaBuffer::from_vec(2, 2, vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        let mask = detect_spikes(&buffer, 0.05);
        assert_eq!(mask.count_set(), 0);
    }
}
