//! Page selection model for previewed documents
//!
//! Tracks which pages of the previewed document are marked for the next
//! operation (split export or image export). Selection state lives only as
//! long as the preview it belongs to; previewing a different document
//! replaces the whole model.

/// A rendered preview of one document page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePreview {
    /// 0-based page index in the source document
    pub index: usize,
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// RGBA8 pixel data, `width * height * 4` bytes
    pub rgba_data: Vec<u8>,
    /// Whether this page is marked for the next operation
    pub selected: bool,
}

impl PagePreview {
    /// Create a preview entry; pages start selected.
    pub fn new(index: usize, width: u32, height: u32, rgba_data: Vec<u8>) -> Self {
        Self {
            index,
            width,
            height,
            rgba_data,
            selected: true,
        }
    }
}

/// Ordered preview sequence with per-page selection flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSelection {
    previews: Vec<PagePreview>,
}

impl PageSelection {
    pub fn new(previews: Vec<PagePreview>) -> Self {
        Self { previews }
    }

    /// Flip the selection flag of exactly one page. No-op when no preview
    /// carries the given index.
    pub fn toggle(&mut self, index: usize) {
        if let Some(preview) = self.previews.iter_mut().find(|p| p.index == index) {
            preview.selected = !preview.selected;
        }
    }

    pub fn select_all(&mut self) {
        for preview in &mut self.previews {
            preview.selected = true;
        }
    }

    pub fn deselect_all(&mut self) {
        for preview in &mut self.previews {
            preview.selected = false;
        }
    }

    /// Selected page indices in ascending document order, regardless of the
    /// order in which pages were clicked.
    pub fn selected_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .previews
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.index)
            .collect();
        indices.sort_unstable();
        indices
    }

    /// Selected previews in ascending document order
    pub fn selected_previews(&self) -> impl Iterator<Item = &PagePreview> {
        self.previews.iter().filter(|p| p.selected)
    }

    pub fn previews(&self) -> &[PagePreview] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}
