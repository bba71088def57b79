//! Thumbnailer configuration.
//!
//! Handles loading and merging `thumbnail.toml` files. User values are layered
//! over stock defaults, so a file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! width = 150              # Bounding box width (<= 0 falls back to 150)
//! height = 150             # Bounding box height (<= 0 falls back to 150)
//! quality = 85             # JPEG quality 1-100 (anything else falls back to 85)
//! filter = "catmull-rom"   # nearest | triangle | catmull-rom | gaussian | lanczos3
//! format = "jpeg"          # jpeg | png | gif
//! ```
//!
//! Out-of-range sizes and quality are not errors; they are normalized when
//! [`ThumbnailerConfig::options`] builds a [`ThumbnailOptions`]. Unknown keys
//! and unknown filter/format names are rejected to catch typos early.

use crate::imaging::{OutputFormat, ResampleFilter, ThumbnailOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILENAME: &str = "thumbnail.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Raw configuration as written by the user.
///
/// Sizes and quality are signed so that a `0` or `-1` in the file parses and
/// then falls back to the default instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailerConfig {
    /// Bounding box width in pixels.
    pub width: i64,
    /// Bounding box height in pixels.
    pub height: i64,
    /// JPEG quality (1-100).
    pub quality: i64,
    /// Resampling filter.
    pub filter: ResampleFilter,
    /// Output format for `Thumbnailer::generate_and_save`.
    pub format: OutputFormat,
}

impl Default for ThumbnailerConfig {
    fn default() -> Self {
        let options = ThumbnailOptions::default();
        Self {
            width: options.width().into(),
            height: options.height().into(),
            quality: options.quality().value().into(),
            filter: ResampleFilter::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ThumbnailerConfig {
    /// Normalized options for this config.
    pub fn options(&self) -> ThumbnailOptions {
        ThumbnailOptions::new(self.width, self.height, self.quality)
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ThumbnailerConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ThumbnailerConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    Ok(merged.try_into()?)
}

/// Load `thumbnail.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Load config from `thumbnail.toml` in the given directory, or stock
/// defaults when there is none.
pub fn load_config(dir: &Path) -> Result<ThumbnailerConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Load config from an explicit file path. The file must exist.
pub fn load_config_file(path: &Path) -> Result<ThumbnailerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `thumbnail.toml`.
pub fn stock_config_toml() -> &'static str {
    r##"# Thumbnail configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Bounding box in pixels. The thumbnail keeps the source aspect ratio and
# fits inside this box. Values <= 0 fall back to 150.
width = 150
height = 150

# JPEG quality (1 = worst, 100 = best). Values outside 1-100 fall back to 85.
# Ignored for PNG and GIF output.
quality = 85

# Resampling filter: nearest | triangle | catmull-rom | gaussian | lanczos3
filter = "catmull-rom"

# Output format: jpeg | png | gif
format = "jpeg"
"##
}
