//! Filename suggestion boundary
//!
//! An external AI collaborator may propose a filename for the composed
//! document based on the first image. The collaborator is injected and
//! strictly best-effort: any failure falls back to a default name and is
//! logged as a warning, never propagated to the caller.

use crate::Result;

/// Fallback output name when no suggestion is available
pub const DEFAULT_FILENAME: &str = "converted_document";

/// External filename suggestion collaborator.
///
/// Implementations receive the first image's encoded bytes and mime type
/// and return a short human-readable name, without an extension.
pub trait FilenameSuggester {
    fn suggest(&self, image_bytes: &[u8], mime_type: &str) -> Result<String>;
}

/// Ask the collaborator for a name, normalizing the answer and falling back
/// to [`DEFAULT_FILENAME`] on any failure or empty suggestion.
pub fn suggest_or_default(
    suggester: &dyn FilenameSuggester,
    image_bytes: &[u8],
    mime_type: &str,
) -> String {
    match suggester.suggest(image_bytes, mime_type) {
        Ok(suggestion) => {
            let normalized = normalize(&suggestion);
            if normalized.is_empty() {
                DEFAULT_FILENAME.to_string()
            } else {
                normalized
            }
        }
        Err(e) => {
            log::warn!("filename suggestion failed, using default: {}", e);
            DEFAULT_FILENAME.to_string()
        }
    }
}

/// Lowercase, underscore-joined form of a free-text suggestion
fn normalize(suggestion: &str) -> String {
    suggestion
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;

    struct Fixed(&'static str);
    impl FilenameSuggester for Fixed {
        fn suggest(&self, _: &[u8], _: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;
    impl FilenameSuggester for Failing {
        fn suggest(&self, _: &[u8], _: &str) -> Result<String> {
            Err(ConvertError::External("timeout".to_string()))
        }
    }

    #[test]
    fn test_suggestion_is_normalized() {
        let name = suggest_or_default(&Fixed("  Quarterly Sales Report "), &[], "image/jpeg");
        assert_eq!(name, "quarterly_sales_report");
    }

    #[test]
    fn test_failure_falls_back_to_default() {
        let name = suggest_or_default(&Failing, &[], "image/jpeg");
        assert_eq!(name, DEFAULT_FILENAME);
    }

    #[test]
    fn test_empty_suggestion_falls_back_to_default() {
        let name = suggest_or_default(&Fixed("   "), &[], "image/png");
        assert_eq!(name, DEFAULT_FILENAME);
    }
}
