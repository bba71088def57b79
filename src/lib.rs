//! # thumbfit
//!
//! Aspect-preserving thumbnails. Give it a decoded image and a bounding box;
//! it computes the largest size that fits inside the box without distorting
//! the source, resamples with Catmull-Rom, and hands back a fresh RGBA buffer.
//! Thin helpers decode from files or memory and encode to JPEG, PNG or GIF.
//!
//! ```no_run
//! use std::path::Path;
//! use thumbfit::{ThumbnailOptions, generate_and_save};
//!
//! // 150x150 box, JPEG quality 85
//! let options = ThumbnailOptions::default();
//! generate_and_save(Path::new("photo.png"), Path::new("photo-thumb.jpg"), &options)?;
//! # Ok::<(), thumbfit::ImagingError>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Fit arithmetic, resampling, codecs, and the [`Thumbnailer`] |
//! | [`config`] | `thumbnail.toml` loading layered over stock defaults |
//!
//! # Design Decisions
//!
//! ## Truncate, Don't Round
//!
//! The non-binding axis is truncated toward zero. That keeps output sizes
//! identical to the reference behaviour, at the cost of zero-width or
//! zero-height thumbnails for extremely elongated sources. Those come back as
//! empty buffers rather than errors; a zero-sized *source* is an error
//! ([`ImagingError::InvalidSourceDimensions`]), and so is trying to encode an
//! empty buffer ([`ImagingError::EmptyOutput`]).
//!
//! ## Normalize at the Boundary
//!
//! [`ThumbnailOptions::new`] is the only way to build options, and it replaces
//! non-positive sizes with 150 and out-of-range quality with 85. Everything
//! downstream can assume a valid bounding box.
//!
//! ## Injected Resampling
//!
//! The filter sits behind the [`Resampler`] trait. [`ImageResampler`] covers
//! the `image` crate's filters; anything else (a SIMD resizer, a mock in tests)
//! plugs into [`Thumbnailer::with_resampler`] without touching the fit logic.
//!
//! ## No Partial Output
//!
//! Saving creates the destination only after decoding and resampling have
//! succeeded, and a guard removes it again if encoding or flushing fails.

pub mod config;
pub mod imaging;

pub use config::{ConfigError, ThumbnailerConfig};
pub use imaging::{
    Dimensions, ImageResampler, ImagingError, OutputFormat, Quality, ResampleFilter, Resampler,
    ThumbnailOptions, Thumbnailer, calculate_fit_dimensions, generate, generate_and_save,
    generate_from_file,
};

#[cfg(test)]
pub(crate) mod test_helpers;
