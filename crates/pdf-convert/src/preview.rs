//! Page previewing via Pdfium
//!
//! Rasterizes each page of a document into an RGBA bitmap at a fixed
//! preview scale, in page-index order. Previews back the selection UI and
//! the page-to-image export; they are not output-fidelity renders.

use crate::constants::PREVIEW_SCALE;
use crate::selection::{PagePreview, PageSelection};
use crate::{ConvertError, Result};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// Initialize Pdfium, trying the vendored library first, then falling back
/// to the system library
fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Render one preview bitmap per page, in document order.
///
/// Corrupt or encrypted input yields [`ConvertError::DocumentLoad`] and no
/// previews. Every page, blank ones included, produces exactly one bitmap.
pub async fn render_previews(document_bytes: Vec<u8>) -> Result<Vec<PagePreview>> {
    tokio::task::spawn_blocking(move || render_previews_sync(&document_bytes)).await?
}

fn render_previews_sync(document_bytes: &[u8]) -> Result<Vec<PagePreview>> {
    let pdfium = init_pdfium().map_err(|e| ConvertError::Render(e.to_string()))?;
    let document = pdfium
        .load_pdf_from_byte_slice(document_bytes, None)
        .map_err(|e| ConvertError::DocumentLoad(e.to_string()))?;

    let config = PdfRenderConfig::new().scale_page_by_factor(PREVIEW_SCALE);

    let mut previews = Vec::with_capacity(document.pages().len() as usize);
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| ConvertError::Render(format!("page {}: {}", index, e)))?;
        previews.push(PagePreview::new(
            index,
            bitmap.width() as u32,
            bitmap.height() as u32,
            bitmap.as_rgba_bytes().to_vec(),
        ));
    }

    Ok(previews)
}

/// Write each selected preview to `<out_dir>/page_<1-based index>.png`,
/// in ascending page order. Returns the written paths.
pub async fn export_page_images(
    selection: &PageSelection,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref().to_owned();
    let pages: Vec<PagePreview> = selection.selected_previews().cloned().collect();

    tokio::task::spawn_blocking(move || {
        let mut written = Vec::with_capacity(pages.len());
        for page in pages {
            let index = page.index;
            let image = image::RgbaImage::from_raw(page.width, page.height, page.rgba_data)
                .ok_or_else(|| {
                    ConvertError::Render(format!(
                        "preview bitmap for page {} has inconsistent dimensions",
                        index
                    ))
                })?;
            let path = out_dir.join(format!("page_{}.png", index + 1));
            image.save(&path)?;
            written.push(path);
        }
        Ok(written)
    })
    .await?
}
