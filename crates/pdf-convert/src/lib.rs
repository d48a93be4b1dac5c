pub mod assemble;
mod constants;
mod layout;
mod naming;
mod options;
#[cfg(feature = "preview")]
mod preview;
mod selection;
mod session;
mod types;

pub use assemble::{
    compose_from_images, document_bytes, extract_subset, load_document, load_documents, merge,
    save_document,
};
pub use constants::{PREVIEW_SCALE, mm_to_pt, pt_to_mm};
pub use layout::compute_placement;
pub use naming::{DEFAULT_FILENAME, FilenameSuggester, suggest_or_default};
pub use options::ConvertOptions;
#[cfg(feature = "preview")]
pub use preview::{export_page_images, render_previews};
pub use selection::{PagePreview, PageSelection};
pub use session::{Session, Workflow};
pub use types::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("no input provided")]
    EmptyInput,
    #[error("page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },
    #[error("failed to load document: {0}")]
    DocumentLoad(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("external service error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
