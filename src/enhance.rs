//! 2× bilinear upscaling followed by Laplacian sharpening.
//!
//! Both stages clamp their output into [0.0, 1.0]. The sharpening
//! convolution uses clamp-replicate borders: samples outside the image read
//! the nearest edge pixel, the same policy the rest of this codebase applies
//! to 3×3 windows.
use crate::image::LumaBuffer;

type Kernel3 = [[f32; 3]; 3];

/// Sharpening kernel. The taps sum to 1, so flat regions are preserved.
const LAPLACIAN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Upscale 2× and sharpen.
pub fn enhance(src: &LumaBuffer) -> LumaBuffer {
    sharpen(&upscale2x(src))
}

/// Bilinear 2× upscale: output is exactly `(2w, 2h)`. Each output pixel maps
/// back to source coordinates `(ox/2, oy/2)` and blends the four surrounding
/// samples; samples past the right/bottom edge clamp to the edge pixel.
pub fn upscale2x(src: &LumaBuffer) -> LumaBuffer {
    let mut out = LumaBuffer::new(src.w * 2, src.h * 2);
    if src.w == 0 || src.h == 0 {
        return out;
    }
    for oy in 0..out.h {
        let sy = oy as f32 / 2.0;
        let y0 = sy as usize;
        let y1 = (y0 + 1).min(src.h - 1);
        let fy = sy - y0 as f32;
        let top_row = src.row(y0);
        let bottom_row = src.row(y1);
        let dst = out.row_mut(oy);
        for (ox, dst_px) in dst.iter_mut().enumerate() {
            let sx = ox as f32 / 2.0;
            let x0 = sx as usize;
            let x1 = (x0 + 1).min(src.w - 1);
            let fx = sx - x0 as f32;
            let top = top_row[x0] * (1.0 - fx) + top_row[x1] * fx;
            let bottom = bottom_row[x0] * (1.0 - fx) + bottom_row[x1] * fx;
            *dst_px = (top * (1.0 - fy) + bottom * fy).clamp(0.0, 1.0);
        }
    }
    out
}

/// Convolve with the fixed 3×3 Laplacian sharpening kernel, clamping the
/// result into [0.0, 1.0]. Borders are clamp-replicated.
pub fn sharpen(src: &LumaBuffer) -> LumaBuffer {
    let mut out = LumaBuffer::new(src.w, src.h);
    if src.w == 0 || src.h == 0 {
        return out;
    }
    for y in 0..src.h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(src.h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(src.w - 1)];
            let mut acc = 0.0f32;
            for (ky, row) in rows.iter().enumerate() {
                let taps = &LAPLACIAN_KERNEL[ky];
                acc += row[x_idx[0]] * taps[0] + row[x_idx[1]] * taps[1] + row[x_idx[2]] * taps[2];
            }
            *dst_px = acc.clamp(0.0, 1.0);
        }
    }
    out
}
