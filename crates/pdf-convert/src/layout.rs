//! Placement calculation for image-to-PDF composition
//!
//! An image is fitted inside the printable area (page minus margins) with
//! its aspect ratio preserved, then centered on the page. This is a "fit"
//! policy: the image is never cropped and never stretched.

use crate::types::{PageTarget, Placement};
use crate::{ConvertError, Result};

/// Compute the placement of an image on a target page.
///
/// Width-first fit: the image is scaled to span the printable width; when
/// the resulting height would overflow the printable height, it is scaled
/// to the printable height instead. Exactly one axis ends up snapped to its
/// printable bound.
///
/// # Arguments
/// * `pixel_width` - Source image width in pixels (must be > 0)
/// * `pixel_height` - Source image height in pixels (must be > 0)
/// * `target` - Output page geometry
pub fn compute_placement(
    pixel_width: u32,
    pixel_height: u32,
    target: &PageTarget,
) -> Result<Placement> {
    if pixel_width == 0 || pixel_height == 0 {
        return Err(ConvertError::Config(format!(
            "image dimensions must be positive (got {}x{})",
            pixel_width, pixel_height
        )));
    }

    let printable_width = target.printable_width_mm();
    let printable_height = target.printable_height_mm();
    if printable_width <= 0.0 || printable_height <= 0.0 {
        return Err(ConvertError::Config(format!(
            "margin of {}mm leaves no printable area on a {}x{}mm page",
            target.margin_mm, target.page_width_mm, target.page_height_mm
        )));
    }
    let ratio = pixel_width as f32 / pixel_height as f32;

    let mut width_mm = printable_width;
    let mut height_mm = width_mm / ratio;

    if height_mm > printable_height {
        height_mm = printable_height;
        width_mm = height_mm * ratio;
    }

    Ok(Placement {
        width_mm,
        height_mm,
        x_offset_mm: (target.page_width_mm - width_mm) / 2.0,
        y_offset_mm: (target.page_height_mm - height_mm) / 2.0,
    })
}
