//! Parameter types for thumbnail generation.
//!
//! These types describe *what* to produce, not *how*. They are normalized on
//! construction so the rest of the crate never sees an out-of-range value.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 85). Out-of-range values fall back to the default.
//! - [`ThumbnailOptions`] — Bounding box (default 150×150) plus quality. Non-positive sizes fall back to the default.
//! - [`ResampleFilter`] — Interpolation kernel used when resampling (default Catmull-Rom).

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default bounding box width in pixels.
pub const DEFAULT_WIDTH: u32 = 150;
/// Default bounding box height in pixels.
pub const DEFAULT_HEIGHT: u32 = 150;
/// Default JPEG quality.
pub const DEFAULT_QUALITY: u8 = 85;

/// Quality setting for JPEG encoding (1-100).
///
/// Unlike a clamp, anything outside 1..=100 is replaced by the default:
/// `Quality::new(150)` is 85, not 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: i64) -> Self {
        match u8::try_from(value) {
            Ok(v @ 1..=100) => Self(v),
            _ => Self::default(),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

/// Validated thumbnail options.
///
/// The only way to build one is [`ThumbnailOptions::new`] (or
/// [`Default`]), which substitutes defaults for anything unusable. A value of
/// this type always has a non-zero bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailOptions {
    width: u32,
    height: u32,
    quality: Quality,
}

impl ThumbnailOptions {
    /// Build options from caller-supplied values.
    ///
    /// Width or height that is non-positive (or too large for `u32`) becomes
    /// 150; quality outside 1..=100 becomes 85.
    pub fn new(width: i64, height: i64, quality: i64) -> Self {
        Self {
            width: positive_or(width, DEFAULT_WIDTH),
            height: positive_or(height, DEFAULT_HEIGHT),
            quality: Quality::new(quality),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bounding box as `(width, height)`.
    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            quality: Quality::default(),
        }
    }
}

fn positive_or(value: i64, default: u32) -> u32 {
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

/// Resampling filter used when scaling to the thumbnail size.
///
/// Ordered from fastest/lowest-quality to slowest/highest-quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    /// Nearest-neighbor: fastest, blocky artifacts.
    Nearest,
    /// Bilinear interpolation.
    Triangle,
    /// Bicubic (Catmull-Rom): the reference thumbnail filter.
    #[default]
    CatmullRom,
    /// Gaussian: smooth, slightly soft.
    Gaussian,
    /// Lanczos with 3 lobes: sharpest, slowest.
    Lanczos3,
}

impl ResampleFilter {
    /// Convert to the `image` crate's `FilterType`.
    pub const fn to_image_filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Triangle => f.write_str("triangle"),
            Self::CatmullRom => f.write_str("catmull-rom"),
            Self::Gaussian => f.write_str("gaussian"),
            Self::Lanczos3 => f.write_str("lanczos3"),
        }
    }
}
