use despike::RawImage;

/// Generates a flat opaque gray RGBA field at the given brightness.
pub fn flat_field_rgba(width: usize, height: usize, level: u8) -> RawImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RawImage::new(width, height, 4);
    for px in img.data.chunks_exact_mut(4) {
        px[0] = level;
        px[1] = level;
        px[2] = level;
        px[3] = 255;
    }
    img
}

/// Generates a smooth diagonal gradient, dark at the top-left corner and
/// brightening toward the bottom-right. Adjacent pixels differ by well under
/// any sensible detection threshold, so a correct detector flags nothing.
pub fn gradient_field_rgba(width: usize, height: usize) -> RawImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let scale = (width + height) as f32;
    let mut img = RawImage::new(width, height, 4);
    for y in 0..height {
        for x in 0..width {
            let v = ((x as f32 + y as f32) / scale * 255.0) as u8;
            let base = (y * width + x) * 4;
            img.data[base] = v;
            img.data[base + 1] = v;
            img.data[base + 2] = v;
            img.data[base + 3] = 255;
        }
    }
    img
}
