use image::{Rgba, RgbaImage};

/// Replacement for near-black pixels: fully transparent white.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// A pixel is near-black when R, G and B are all strictly below `threshold`.
///
/// Alpha does not take part in the test.
#[inline]
pub fn is_near_black(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r < threshold && g < threshold && b < threshold
}

/// Build a new image where every near-black pixel becomes [`TRANSPARENT`].
///
/// Pixels are visited in row-major order and written back to the same
/// position, so dimensions and ordering match the input. Everything else is
/// copied unchanged, original alpha included.
pub fn make_near_black_transparent(img: &RgbaImage, threshold: u8) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut output = RgbaImage::new(width, height);

    for (src, dst) in img.pixels().zip(output.pixels_mut()) {
        *dst = if is_near_black(src, threshold) {
            TRANSPARENT
        } else {
            *src
        };
    }

    output
}

/// Count the pixels [`make_near_black_transparent`] would rewrite.
pub fn count_near_black(img: &RgbaImage, threshold: u8) -> usize {
    img.pixels().filter(|p| is_near_black(p, threshold)).count()
}
