//! Shared constants for document conversion
//!
//! This module centralizes magic numbers and constants used throughout
//! the conversion workflows.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Defaults
// =============================================================================

/// A4 width in millimeters (portrait)
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 height in millimeters (portrait)
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Default uniform page margin in millimeters
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// =============================================================================
// Preview
// =============================================================================

/// Scale factor for page previews. Trades fidelity for speed; previews are
/// for selection, not for final output.
pub const PREVIEW_SCALE: f32 = 0.5;
