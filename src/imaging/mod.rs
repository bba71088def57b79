//! Thumbnail imaging — pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Fit to box** | [`calculate_fit_dimensions`] (truncating, aspect-preserving) |
//! | **Resample** | `image::imageops::resize` with Catmull-Rom by default |
//! | **Decode** | `ImageReader::with_guessed_format` (JPEG, PNG, GIF, TIFF, WebP) |
//! | **Encode** | JPEG (quality 1–100), PNG, GIF |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Normalized option types
//! - **Resampler**: [`Resampler`] trait + [`ImageResampler`]
//! - **Codec**: Decode/encode and scoped file saving
//! - **Operations**: [`Thumbnailer`] combining calculations + resampler + codec

mod calculations;
pub mod codec;
pub mod image_resampler;
pub mod operations;
mod params;
pub mod resampler;

pub use calculations::calculate_fit_dimensions;
pub use codec::{OutputFormat, load_image, load_image_from_memory, save_image, save_thumbnail};
pub use image_resampler::ImageResampler;
pub use operations::{Thumbnailer, generate, generate_and_save, generate_from_file, plan_thumbnail};
pub use params::{
    DEFAULT_HEIGHT, DEFAULT_QUALITY, DEFAULT_WIDTH, Quality, ResampleFilter, ThumbnailOptions,
};
pub use resampler::{Dimensions, ImagingError, Resampler};
