use dda_core::Image;

/// Bilinear interpolation for subpixel sampling.
///
/// Coordinates outside the image are clamped to the nearest edge pixel. The
/// image must not be empty.
pub fn bilinear_sample(img: &Image, x: f64, y: f64) -> f64 {
    let (w, h) = img.dimensions();
    let max_x = (w - 1) as f64;
    let max_y = (h - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor();
    let y0 = y.floor();
    let dx = x - x0;
    let dy = y - y0;

    let x0_idx = x0 as u32;
    let y0_idx = y0 as u32;
    let x1_idx = (x0_idx + 1).min(w - 1);
    let y1_idx = (y0_idx + 1).min(h - 1);

    let p00 = img.get_pixel(x0_idx, y0_idx)[0] as f64;
    let p10 = img.get_pixel(x1_idx, y0_idx)[0] as f64;
    let p01 = img.get_pixel(x0_idx, y1_idx)[0] as f64;
    let p11 = img.get_pixel(x1_idx, y1_idx)[0] as f64;

    let top = p00 * (1.0 - dx) + p10 * dx;
    let bottom = p01 * (1.0 - dx) + p11 * dx;

    top * (1.0 - dy) + bottom * dy
}

/// Whether a rectangle of half-extents `rx`, `ry` centred on `(x, y)` lies
/// fully inside a `width` x `height` image
pub fn footprint_inside(width: u32, height: u32, x: f64, y: f64, rx: f64, ry: f64) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    x - rx >= 0.0 && y - ry >= 0.0 && x + rx <= (width - 1) as f64 && y + ry <= (height - 1) as f64
}

/// Rotate then scale a sample offset
#[inline]
pub(crate) fn transform_offset(dx: f64, dy: f64, cos: f64, sin: f64, scale: f64) -> (f64, f64) {
    (scale * (cos * dx - sin * dy), scale * (sin * dx + cos * dy))
}
