//! Session-scoped workflow state
//!
//! The orchestrating layer (CLI, GUI, ...) owns one `Session` for the
//! lifetime of a run. The assembly operations themselves stay pure: they
//! take snapshots of this state and return fresh results, never reading or
//! writing it behind the caller's back.

use crate::selection::{PagePreview, PageSelection};
use crate::types::{Rotation, SourceImage};
use crate::Result;
use std::path::PathBuf;

/// The four workflow modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workflow {
    #[default]
    ImageToPdf,
    PdfToImage,
    PdfSplit,
    PdfMerge,
}

/// Transient, single-session state for the active workflow
#[derive(Debug, Default)]
pub struct Session {
    workflow: Workflow,
    images: Vec<SourceImage>,
    merge_inputs: Vec<PathBuf>,
    selection: PageSelection,
    next_image_id: u64,
}

impl Session {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            ..Self::default()
        }
    }

    pub fn workflow(&self) -> Workflow {
        self.workflow
    }

    /// Switch workflow modes, discarding all mode-specific state
    pub fn set_workflow(&mut self, workflow: Workflow) {
        if self.workflow != workflow {
            self.clear();
        }
        self.workflow = workflow;
    }

    /// Drop all imported images, merge inputs and previews
    pub fn clear(&mut self) {
        self.images.clear();
        self.merge_inputs.clear();
        self.selection = PageSelection::default();
    }

    // -------------------------------------------------------------------------
    // Images (compose workflow)
    // -------------------------------------------------------------------------

    /// Import an image: decode its pixel dimensions and queue it for
    /// composition. Returns the assigned session-unique id.
    pub fn add_image(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> Result<u64> {
        let decoded = image::load_from_memory(&bytes)?;
        let (pixel_width, pixel_height) = (decoded.width(), decoded.height());

        let id = self.next_image_id;
        self.next_image_id += 1;
        self.images.push(SourceImage {
            id,
            name: name.into(),
            bytes,
            pixel_width,
            pixel_height,
            rotation: Rotation::None,
        });
        Ok(id)
    }

    pub fn remove_image(&mut self, id: u64) {
        self.images.retain(|img| img.id != id);
    }

    /// Advance an image's display rotation one quarter-turn clockwise.
    /// No-op for unknown ids. The rotation never reaches the composed PDF.
    pub fn rotate_image(&mut self, id: u64) {
        if let Some(img) = self.images.iter_mut().find(|img| img.id == id) {
            img.rotation = img.rotation.rotated_clockwise();
        }
    }

    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    // -------------------------------------------------------------------------
    // Merge inputs
    // -------------------------------------------------------------------------

    /// Queue a document for merging. Order is significant (it becomes output
    /// page order) and duplicates are permitted.
    pub fn add_merge_input(&mut self, path: impl Into<PathBuf>) {
        self.merge_inputs.push(path.into());
    }

    pub fn merge_inputs(&self) -> &[PathBuf] {
        &self.merge_inputs
    }

    // -------------------------------------------------------------------------
    // Previews and selection (split / rasterize workflows)
    // -------------------------------------------------------------------------

    /// Replace the previewed document: prior previews and selection state
    /// are discarded wholesale.
    pub fn set_previews(&mut self, previews: Vec<PagePreview>) {
        self.selection = PageSelection::new(previews);
    }

    pub fn selection(&self) -> &PageSelection {
        &self.selection
    }

    pub fn toggle_page(&mut self, index: usize) {
        self.selection.toggle(index);
    }

    pub fn select_all_pages(&mut self) {
        self.selection.select_all();
    }

    pub fn deselect_all_pages(&mut self) {
        self.selection.deselect_all();
    }

    /// Currently selected page indices, in ascending document order
    pub fn selected_page_indices(&self) -> Vec<usize> {
        self.selection.selected_indices()
    }
}
