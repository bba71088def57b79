//! Resampler backed by the `image` crate.
//!
//! | Step | Crate / function |
//! |---|---|
//! | Convert to premultiplied RGBA | `DynamicImage::to_rgba32f`, then colour × alpha |
//! | Resample | `image::imageops::resize` with the configured [`ResampleFilter`] |
//! | Back to RGBA8 | colour ÷ alpha, rounded; alpha 0 becomes `[0, 0, 0, 0]` |
//!
//! The destination starts empty, so "over" compositing reduces to filtering in
//! premultiplied space. Fully transparent source pixels then contribute
//! nothing to the colour of their visible neighbours.

use super::params::ResampleFilter;
use super::resampler::Resampler;
use image::{DynamicImage, Rgba, Rgba32FImage, RgbaImage, imageops};

/// Filter-based resampler. Defaults to Catmull-Rom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageResampler {
    filter: ResampleFilter,
}

impl ImageResampler {
    pub fn new(filter: ResampleFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }
}

impl Resampler for ImageResampler {
    fn resample(&self, source: &DynamicImage, width: u32, height: u32) -> RgbaImage {
        if width == 0 || height == 0 {
            return RgbaImage::new(width, height);
        }
        let mut premultiplied = source.to_rgba32f();
        premultiply(&mut premultiplied);
        let resized = imageops::resize(&premultiplied, width, height, self.filter.to_image_filter());
        unpremultiply(&resized)
    }
}

fn premultiply(img: &mut Rgba32FImage) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [r * a, g * a, b * a, a];
    }
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
