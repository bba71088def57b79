//! High-level thumbnail operations.
//!
//! These combine the fit calculation with a [`Resampler`] and, for the
//! file-level entry points, the codec glue. [`Thumbnailer`] carries options,
//! output format and resampler; the free functions use Catmull-Rom and the
//! reference defaults.

use super::calculations::calculate_fit_dimensions;
use super::codec::{self, OutputFormat};
use super::image_resampler::ImageResampler;
use super::params::ThumbnailOptions;
use super::resampler::{Dimensions, ImagingError, Resampler};
use crate::config::ThumbnailerConfig;
use image::{DynamicImage, RgbaImage};
use std::path::Path;
use tracing::{debug, instrument};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Compute the thumbnail size for a source, failing on a degenerate source.
pub fn plan_thumbnail(source: Dimensions, options: &ThumbnailOptions) -> Result<Dimensions> {
    calculate_fit_dimensions((source.width, source.height), options.bounds())
        .map(Dimensions::from)
        .ok_or(ImagingError::InvalidSourceDimensions {
            width: source.width,
            height: source.height,
        })
}

/// Thumbnail generator: options + output format + resampling strategy.
#[derive(Debug, Clone)]
pub struct Thumbnailer<R = ImageResampler> {
    options: ThumbnailOptions,
    format: OutputFormat,
    resampler: R,
}

impl Thumbnailer<ImageResampler> {
    /// Catmull-Rom resampling, JPEG output.
    pub fn new(options: ThumbnailOptions) -> Self {
        Self::with_resampler(options, ImageResampler::default())
    }

    pub fn from_config(config: &ThumbnailerConfig) -> Self {
        Self::with_resampler(config.options(), ImageResampler::new(config.filter))
            .with_format(config.format)
    }
}

impl Default for Thumbnailer<ImageResampler> {
    fn default() -> Self {
        Self::new(ThumbnailOptions::default())
    }
}

impl<R: Resampler> Thumbnailer<R> {
    pub fn with_resampler(options: ThumbnailOptions, resampler: R) -> Self {
        Self {
            options,
            format: OutputFormat::default(),
            resampler,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn options(&self) -> &ThumbnailOptions {
        &self.options
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn plan(&self, source: Dimensions) -> Result<Dimensions> {
        plan_thumbnail(source, &self.options)
    }

    /// Scale `source` to fit the bounding box. The source is left untouched.
    pub fn generate(&self, source: &DynamicImage) -> Result<RgbaImage> {
        let src = Dimensions::of(source);
        let out = self.plan(src)?;
        debug!(
            src_width = src.width,
            src_height = src.height,
            width = out.width,
            height = out.height,
            "resampling"
        );
        Ok(self.resampler.resample(source, out.width, out.height))
    }

    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn generate_from_file(&self, path: &Path) -> Result<RgbaImage> {
        let source = codec::load_image(path)?;
        self.generate(&source)
    }

    pub fn generate_from_memory(&self, bytes: &[u8]) -> Result<RgbaImage> {
        let source = codec::load_image_from_memory(bytes)?;
        self.generate(&source)
    }

    /// Decode `input`, generate, and write to `output` in this thumbnailer's format.
    ///
    /// Nothing is written when decoding fails; a failed encode leaves no file.
    #[instrument(
        level = "debug",
        skip_all,
        fields(input = %input.display(), output = %output.display())
    )]
    pub fn generate_and_save(&self, input: &Path, output: &Path) -> Result<Dimensions> {
        let thumb = self.generate_from_file(input)?;
        codec::save_image(&thumb, output, self.format, self.options.quality())?;
        Ok(Dimensions::new(thumb.width(), thumb.height()))
    }
}

/// Generate a thumbnail with Catmull-Rom resampling.
pub fn generate(source: &DynamicImage, options: &ThumbnailOptions) -> Result<RgbaImage> {
    Thumbnailer::new(*options).generate(source)
}

/// Read an image file and generate a thumbnail from it.
pub fn generate_from_file(path: &Path, options: &ThumbnailOptions) -> Result<RgbaImage> {
    Thumbnailer::new(*options).generate_from_file(path)
}

/// Generate a thumbnail from `input` and save it to `output` as JPEG.
pub fn generate_and_save(input: &Path, output: &Path, options: &ThumbnailOptions) -> Result<()> {
    Thumbnailer::new(*options).generate_and_save(input, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::ResampleFilter;
    use crate::imaging::resampler::tests::{MockResampler, RecordedResample};
    use crate::test_helpers::{create_test_jpeg, gradient_rgba};

    #[test]
    fn plan_landscape_source() {
        let out =
            plan_thumbnail(Dimensions::new(1000, 500), &ThumbnailOptions::default()).unwrap();
        assert_eq!(out, Dimensions::new(150, 75));
    }

    #[test]
    fn plan_portrait_source() {
        let out =
            plan_thumbnail(Dimensions::new(500, 1000), &ThumbnailOptions::default()).unwrap();
        assert_eq!(out, Dimensions::new(75, 150));
    }

    #[test]
    fn plan_square_source_is_noop() {
        let out =
            plan_thumbnail(Dimensions::new(150, 150), &ThumbnailOptions::default()).unwrap();
        assert_eq!(out, Dimensions::new(150, 150));
    }

    #[test]
    fn plan_with_defaulted_options() {
        let options = ThumbnailOptions::new(0, -10, 85);
        let out = plan_thumbnail(Dimensions::new(1000, 500), &options).unwrap();
        assert_eq!(out, Dimensions::new(150, 75));
    }

    #[test]
    fn plan_zero_source_errors() {
        let result = plan_thumbnail(Dimensions::new(0, 40), &ThumbnailOptions::default());
        assert!(matches!(
            result,
            Err(ImagingError::InvalidSourceDimensions {
                width: 0,
                height: 40
            })
        ));
    }

    #[test]
    fn generate_uses_injected_resampler() {
        let resampler = MockResampler::new();
        let thumbnailer = Thumbnailer::with_resampler(ThumbnailOptions::default(), &resampler);

        let source = DynamicImage::new_rgb8(1000, 500);
        let out = thumbnailer.generate(&source).unwrap();
        assert_eq!(out.dimensions(), (150, 75));

        assert_eq!(
            resampler.get_calls(),
            vec![RecordedResample {
                source: Dimensions::new(1000, 500),
                width: 150,
                height: 75,
            }]
        );
    }

    #[test]
    fn generate_zero_source_skips_resampler() {
        let resampler = MockResampler::new();
        let thumbnailer = Thumbnailer::with_resampler(ThumbnailOptions::default(), &resampler);

        let result = thumbnailer.generate(&DynamicImage::new_rgb8(0, 0));
        assert!(matches!(
            result,
            Err(ImagingError::InvalidSourceDimensions { .. })
        ));
        assert!(resampler.get_calls().is_empty());
    }

    #[test]
    fn generate_extreme_aspect_yields_zero_area() {
        let source = DynamicImage::ImageRgba8(gradient_rgba(1, 1000));
        let out = generate(&source, &ThumbnailOptions::default()).unwrap();
        assert_eq!(out.dimensions(), (0, 150));
    }

    #[test]
    fn generate_real_resample_dimensions() {
        let source = DynamicImage::ImageRgba8(gradient_rgba(320, 240));
        let out = generate(&source, &ThumbnailOptions::new(100, 100, 85)).unwrap();
        assert_eq!(out.dimensions(), (100, 75));
    }

    #[test]
    fn generate_twice_at_same_size_is_stable() {
        let source = DynamicImage::ImageRgba8(gradient_rgba(300, 150));
        let first = generate(&source, &ThumbnailOptions::default()).unwrap();
        let second = generate(
            &DynamicImage::ImageRgba8(first.clone()),
            &ThumbnailOptions::default(),
        )
        .unwrap();
        assert_eq!(second.dimensions(), first.dimensions());
        assert_eq!(second, first);
    }

    #[test]
    fn from_config_carries_filter_format_and_options() {
        let config = ThumbnailerConfig {
            width: 64,
            height: -1,
            quality: 500,
            filter: ResampleFilter::Lanczos3,
            format: OutputFormat::Png,
        };
        let thumbnailer = Thumbnailer::from_config(&config);
        assert_eq!(thumbnailer.options().bounds(), (64, 150));
        assert_eq!(thumbnailer.options().quality().value(), 85);
        assert_eq!(thumbnailer.format(), OutputFormat::Png);
    }

    #[test]
    fn generate_from_file_reads_and_scales() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 400, 200);

        let thumb = generate_from_file(&source, &ThumbnailOptions::default()).unwrap();
        assert_eq!(thumb.dimensions(), (150, 75));
    }

    #[test]
    fn generate_from_file_missing_input_errors() {
        let result = generate_from_file(
            Path::new("/nonexistent/source.jpg"),
            &ThumbnailOptions::default(),
        );
        assert!(matches!(result, Err(ImagingError::Io(_))));
    }

    #[test]
    fn generate_from_memory_decodes_bytes() {
        let mut bytes = Vec::new();
        codec::write_png(&gradient_rgba(60, 120), &mut bytes).unwrap();

        let thumb = Thumbnailer::new(ThumbnailOptions::default())
            .generate_from_memory(&bytes)
            .unwrap();
        assert_eq!(thumb.dimensions(), (75, 150));
    }

    #[test]
    fn generate_and_save_writes_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        let output = tmp.path().join("thumb.jpg");
        create_test_jpeg(&source, 500, 1000);

        generate_and_save(&source, &output, &ThumbnailOptions::default()).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
        assert_eq!(image::image_dimensions(&output).unwrap(), (75, 150));
    }

    #[test]
    fn generate_and_save_respects_thumbnailer_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        let output = tmp.path().join("thumb.out");
        create_test_jpeg(&source, 200, 200);

        let dims = Thumbnailer::new(ThumbnailOptions::new(50, 50, 85))
            .with_format(OutputFormat::Png)
            .generate_and_save(&source, &output)
            .unwrap();
        assert_eq!(dims, Dimensions::new(50, 50));

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn generate_and_save_missing_input_creates_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("thumb.jpg");

        let result = generate_and_save(
            &tmp.path().join("missing.jpg"),
            &output,
            &ThumbnailOptions::default(),
        );
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
