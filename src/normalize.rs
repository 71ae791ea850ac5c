//! Pixel Normalization - Explicit Light/Dark Classification
//!
//! Classification uses a fixed, documented threshold. Decoder defaults
//! (dithering, implicit binarization) are never relied on.

use image::DynamicImage;

/// Minimum intensity for a pixel to classify as light.
///
/// Intensity is Rec. 709 luma (0.2126 R + 0.7152 G + 0.0722 B), scaled to
/// 0..=255. Mid-scale split: 127 is dark, 128 is light.
pub const LIGHT_THRESHOLD: u8 = 128;

/// Narrow view over a decoded image.
///
/// The normalizer consumes decoders only through this trait, so tests can
/// substitute synthetic pixel buffers for a real decode.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Whether the source carries a transparency channel.
    fn has_alpha(&self) -> bool;

    /// RGBA value at (x, y). Opaque sources report alpha 255.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

/// W×H light/dark classification, row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    light: Vec<bool>,
}

impl PixelMatrix {
    /// Build from a classification function, row-major.
    pub fn from_fn(width: u32, height: u32, mut is_light: impl FnMut(u32, u32) -> bool) -> Self {
        let mut light = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                light.push(is_light(x, y));
            }
        }
        Self { width, height, light }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_light(&self, x: u32, y: u32) -> bool {
        self.light[y as usize * self.width as usize + x as usize]
    }
}

/// Classify every pixel of `source` into a light/dark matrix.
///
/// Transparent sources are composited over a fully dark background first,
/// so a fully transparent pixel always classifies as dark.
pub fn normalize(source: &impl PixelSource) -> PixelMatrix {
    let compose_alpha = source.has_alpha();
    PixelMatrix::from_fn(source.width(), source.height(), |x, y| {
        let [r, g, b, a] = source.rgba(x, y);
        let mut level = luma(r, g, b);
        if compose_alpha {
            level = ((level as u32 * a as u32) / 255) as u8;
        }
        level >= LIGHT_THRESHOLD
    })
}

/// Rec. 709 luma in integer arithmetic; 255/255/255 maps to exactly 255.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((2126 * r as u32 + 7152 * g as u32 + 722 * b as u32) / 10_000) as u8
}

/// Adapter over the `image` crate; the only place decoder types appear.
pub struct DecodedImage {
    pixels: image::RgbaImage,
    has_alpha: bool,
}

impl DecodedImage {
    pub fn new(image: DynamicImage) -> Self {
        let has_alpha = image.color().has_alpha();
        Self {
            pixels: image.to_rgba8(),
            has_alpha,
        }
    }
}

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }
}
