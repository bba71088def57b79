//! Resampling trait and shared types.
//!
//! The [`Resampler`] trait is the one seam between the fit arithmetic and the
//! pixel work: given a source image and an output size, return a freshly
//! allocated image of exactly that size.
//!
//! The production implementation is
//! [`ImageResampler`](super::image_resampler::ImageResampler), backed by
//! `image::imageops::resize`. Tests swap in a recording mock.

use image::{DynamicImage, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {origin}: {source}")]
    Decode {
        origin: String,
        source: image::ImageError,
    },
    #[error("Unsupported image format for {origin}: {reason}")]
    UnsupportedFormat { origin: String, reason: String },
    #[error("Invalid source dimensions {width}x{height}")]
    InvalidSourceDimensions { width: u32, height: u32 },
    #[error("Cannot encode an empty {width}x{height} image")]
    EmptyOutput { width: u32, height: u32 },
    #[error("Encode failed: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &DynamicImage) -> Self {
        Self::new(image.width(), image.height())
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for resampling implementations.
///
/// Implementations must map the full source rectangle onto the full
/// destination rectangle, must not mutate the source, and must return an
/// image of exactly `width × height` (zero-area included).
pub trait Resampler: Sync {
    fn resample(&self, source: &DynamicImage, width: u32, height: u32) -> RgbaImage;
}

impl<R: Resampler + ?Sized> Resampler for &R {
    fn resample(&self, source: &DynamicImage, width: u32, height: u32) -> RgbaImage {
        (**self).resample(source, width, height)
    }
}
