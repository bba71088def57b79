//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the largest size that fits inside a bounding box while keeping
/// the source aspect ratio.
///
/// The binding axis is picked by comparing aspect ratios; the other axis is
/// truncated toward zero (never rounded), so the result can be zero-width or
/// zero-height for very elongated sources.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Bounding box dimensions (width, height)
///
/// # Returns
/// * `Some((width, height))` - Fit dimensions (at least one matches target)
/// * `None` - If any input dimension is zero
///
/// # Examples
/// ```
/// use thumbfit::imaging::calculate_fit_dimensions;
///
/// // 2:1 landscape into a square box → width binds
/// assert_eq!(calculate_fit_dimensions((1000, 500), (150, 150)), Some((150, 75)));
///
/// // 1:2 portrait into a square box → height binds
/// assert_eq!(calculate_fit_dimensions((500, 1000), (150, 150)), Some((75, 150)));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w == 0 || src_h == 0 || tgt_w == 0 || tgt_h == 0 {
        return None;
    }

    let ratio = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if tgt_aspect > ratio {
        // Box is relatively wider: height binds
        let h = tgt_h;
        let w = (h as f64 * ratio) as u32;
        Some((w, h))
    } else {
        // Box is relatively taller (or equal): width binds
        let w = tgt_w;
        let h = (w as f64 / ratio) as u32;
        Some((w, h))
    }
}
