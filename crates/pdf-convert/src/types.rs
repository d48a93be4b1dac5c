use crate::constants::{A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::options::ConvertOptions;
use crate::{ConvertError, Result};

/// Page orientation for generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Target page size for image-to-PDF composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    /// "Use the source dimensions" is not implemented; this currently
    /// degrades to A4 (see ConvertOptions docs).
    Original,
}

impl PageSize {
    /// Get base dimensions in millimeters (always portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::A4 | PageSize::Original => (A4_WIDTH_MM, A4_HEIGHT_MM),
            PageSize::Letter => (215.9, 279.4),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Display rotation for an imported image.
///
/// This is a preview affordance only: it is not applied to placement
/// computation or to the composed PDF page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Next quarter-turn clockwise, wrapping back to upright
    pub fn rotated_clockwise(self) -> Self {
        match self {
            Rotation::None => Rotation::Clockwise90,
            Rotation::Clockwise90 => Rotation::Clockwise180,
            Rotation::Clockwise180 => Rotation::Clockwise270,
            Rotation::Clockwise270 => Rotation::None,
        }
    }
}

/// An imported raster image queued for composition
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    /// Opaque session-unique identifier
    pub id: u64,
    /// Original file name, for display and naming suggestions
    pub name: String,
    /// Encoded image bytes as imported
    pub bytes: Vec<u8>,
    /// Decoded pixel width
    pub pixel_width: u32,
    /// Decoded pixel height
    pub pixel_height: u32,
    /// Display rotation (preview only, never rendered)
    pub rotation: Rotation,
}

/// The printable geometry of an output page, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTarget {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Uniform margin on all four sides
    pub margin_mm: f32,
}

impl PageTarget {
    /// Derive the page target from conversion options.
    ///
    /// Fails when the margin leaves no printable area.
    pub fn from_options(options: &ConvertOptions) -> Result<Self> {
        let (page_width_mm, page_height_mm) = options
            .page_size
            .dimensions_with_orientation(options.orientation);

        let target = Self {
            page_width_mm,
            page_height_mm,
            margin_mm: options.margin_mm,
        };

        if options.margin_mm < 0.0 {
            return Err(ConvertError::Config(format!(
                "margin must not be negative (got {}mm)",
                options.margin_mm
            )));
        }
        if target.printable_width_mm() <= 0.0 || target.printable_height_mm() <= 0.0 {
            return Err(ConvertError::Config(format!(
                "margin of {}mm leaves no printable area on a {}x{}mm page",
                options.margin_mm, page_width_mm, page_height_mm
            )));
        }

        Ok(target)
    }

    /// Page width minus both margins
    pub fn printable_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Page height minus both margins
    pub fn printable_height_mm(&self) -> f32 {
        self.page_height_mm - 2.0 * self.margin_mm
    }
}

/// The scaled, centered rectangle at which an image is drawn on its page,
/// in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Distance from the left page edge
    pub x_offset_mm: f32,
    /// Distance from the bottom page edge
    pub y_offset_mm: f32,
}
