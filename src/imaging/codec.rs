//! Decoding and encoding glue around the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (sniffed) | `ImageReader::with_guessed_format` → `decode` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (alpha dropped) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (RGBA, lossless) |
//! | Encode → GIF | `image::codecs::gif::GifEncoder` (single frame, default quantizer) |
//!
//! Saving to a path goes through `OutputGuard`: once the destination file
//! has been created, any later failure removes it, so callers never see a
//! half-written thumbnail.

use super::params::Quality;
use super::resampler::ImagingError;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{
    DynamicImage, ExtendedColorType, Frame, ImageEncoder, ImageError, ImageReader, RgbImage,
    RgbaImage, buffer::ConvertBuffer,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::{debug, instrument};

type Result<T> = std::result::Result<T, ImagingError>;

/// Encoded output format for thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
    Gif,
}

impl OutputFormat {
    /// Resolve a format from a file extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Resolve a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, falling back to the
/// extension when the magic bytes are not recognised.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let img = reader
        .decode()
        .map_err(|e| decode_error(path.display().to_string(), e))?;
    debug!(width = img.width(), height = img.height(), "decoded source");
    Ok(img)
}

/// Decode an image held in memory, sniffing its format.
pub fn load_image_from_memory(bytes: &[u8]) -> Result<DynamicImage> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(|e| decode_error("in-memory buffer".to_string(), e))
}

fn decode_error(origin: String, err: ImageError) -> ImagingError {
    match err {
        ImageError::IoError(e) => ImagingError::Io(e),
        ImageError::Unsupported(e) => ImagingError::UnsupportedFormat {
            origin,
            reason: e.to_string(),
        },
        other => ImagingError::Decode {
            origin,
            source: other,
        },
    }
}

fn encode_error(err: ImageError) -> ImagingError {
    match err {
        ImageError::IoError(e) => ImagingError::Io(e),
        other => ImagingError::Encode(other),
    }
}

/// Encode as baseline JPEG. JPEG has no alpha channel, so alpha is discarded.
pub fn write_jpeg<W: Write>(img: &RgbaImage, writer: W, quality: Quality) -> Result<()> {
    let rgb: RgbImage = img.convert();
    JpegEncoder::new_with_quality(writer, quality.value())
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(encode_error)
}

/// Encode as 8-bit RGBA PNG.
pub fn write_png<W: Write>(img: &RgbaImage, writer: W) -> Result<()> {
    PngEncoder::new(writer)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(encode_error)
}

/// Encode as a single-frame GIF using the encoder's default palette settings.
pub fn write_gif<W: Write>(img: &RgbaImage, writer: W) -> Result<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder
        .encode_frame(Frame::new(img.clone()))
        .map_err(encode_error)
}

// Not every encoder refuses a zero-area frame (GIF writes one happily)
fn ensure_not_empty(img: &RgbaImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImagingError::EmptyOutput { width, height });
    }
    Ok(())
}

/// Encode in the given format. `quality` only affects JPEG.
///
/// A zero-width or zero-height image is rejected with
/// [`ImagingError::EmptyOutput`] whatever the format.
pub fn write_image<W: Write>(
    img: &RgbaImage,
    writer: W,
    format: OutputFormat,
    quality: Quality,
) -> Result<()> {
    ensure_not_empty(img)?;
    match format {
        OutputFormat::Jpeg => write_jpeg(img, writer, quality),
        OutputFormat::Png => write_png(img, writer),
        OutputFormat::Gif => write_gif(img, writer),
    }
}

/// Removes the destination file on drop unless committed.
struct OutputGuard<'a> {
    path: &'a Path,
    committed: bool,
}

impl<'a> OutputGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(self.path);
        }
    }
}

/// Encode and write `img` to `path`.
///
/// An empty image is rejected before the file is created. If creating the
/// file fails nothing is touched. Any failure after that (encode, write,
/// flush) removes the partially written file.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), ?format))]
pub fn save_image(
    img: &RgbaImage,
    path: &Path,
    format: OutputFormat,
    quality: Quality,
) -> Result<()> {
    ensure_not_empty(img)?;
    let file = File::create(path)?;
    let guard = OutputGuard::new(path);

    let mut writer = BufWriter::new(file);
    write_image(img, &mut writer, format, quality)?;
    writer.flush()?;
    drop(writer);

    guard.commit();
    debug!(width = img.width(), height = img.height(), "saved thumbnail");
    Ok(())
}

/// Save `img` to `path`, picking the format from the path's extension.
///
/// An unknown extension fails before the filesystem is touched.
pub fn save_thumbnail(img: &RgbaImage, path: &Path, quality: Quality) -> Result<()> {
    let format = OutputFormat::from_path(path).ok_or_else(|| {
        ImagingError::UnsupportedOutput(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string(),
        )
    })?;
    save_image(img, path, format, quality)
}
