use crate::constants::DEFAULT_MARGIN_MM;
use crate::naming::DEFAULT_FILENAME;
use crate::types::{Orientation, PageSize, PageTarget};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for image-to-PDF composition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertOptions {
    /// Output page size. `Original` currently falls back to A4 dimensions
    /// rather than adopting the source aspect ratio.
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Uniform margin on all sides, in millimeters
    pub margin_mm: f32,
    /// Output file name; `.pdf` is appended when missing. No other
    /// sanitization is applied.
    pub filename: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| crate::ConvertError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| crate::ConvertError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// The margin must leave a positive printable area on the chosen page.
    pub fn validate(&self) -> Result<()> {
        PageTarget::from_options(self).map(|_| ())
    }

    /// Output file name with a `.pdf` extension guaranteed
    pub fn output_filename(&self) -> String {
        let name = if self.filename.is_empty() {
            DEFAULT_FILENAME
        } else {
            self.filename.as_str()
        };
        if name.to_ascii_lowercase().ends_with(".pdf") {
            name.to_string()
        } else {
            format!("{}.pdf", name)
        }
    }
}
