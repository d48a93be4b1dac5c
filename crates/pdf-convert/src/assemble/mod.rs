//! Document assembly - producing new PDFs from images and existing PDFs
//!
//! Three single-shot, stateless transforms:
//! 1. Compose a multi-page document from an ordered list of images
//! 2. Extract a subset of pages from one document
//! 3. Merge several documents into one
//!
//! Each operation builds a fresh output document and never mutates its
//! sources; a failure aborts the whole operation with no partial document.

mod builder;
mod compose;
mod io;

pub use io::{document_bytes, load_document, load_documents, save_document};

use crate::options::ConvertOptions;
use crate::types::SourceImage;
use crate::{ConvertError, Result};
use builder::DocumentBuilder;
use lopdf::{Document, ObjectId};

/// Compose a multi-page PDF from images, one page per image, in input order.
///
/// Empty input is an error; the caller is expected to check before invoking
/// but the operation guards it regardless.
pub async fn compose_from_images(
    images: &[SourceImage],
    options: &ConvertOptions,
) -> Result<Document> {
    let images = images.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || compose_from_images_sync(&images, &options)).await?
}

/// Synchronous body of [`compose_from_images`]
pub fn compose_from_images_sync(
    images: &[SourceImage],
    options: &ConvertOptions,
) -> Result<Document> {
    if images.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    compose::compose(images, options)
}

/// Extract a subset of pages into a new document.
///
/// Indices are 0-based. Duplicates collapse to their first occurrence and
/// output pages always appear in ascending index order: page order is a
/// property of the source document, not of selection sequence. Any index
/// outside the document fails the whole operation before a single page is
/// copied. An empty index list yields a valid zero-page document.
pub async fn extract_subset(source: &Document, page_indices: &[usize]) -> Result<Document> {
    let source = source.clone();
    let page_indices = page_indices.to_vec();

    tokio::task::spawn_blocking(move || extract_subset_sync(&source, &page_indices)).await?
}

/// Synchronous body of [`extract_subset`]
pub fn extract_subset_sync(source: &Document, page_indices: &[usize]) -> Result<Document> {
    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
    let page_count = page_ids.len();

    let mut wanted: Vec<usize> = page_indices.to_vec();
    wanted.sort_unstable();
    wanted.dedup();

    for &index in &wanted {
        if index >= page_count {
            return Err(ConvertError::PageOutOfRange { index, page_count });
        }
    }

    let mut builder = DocumentBuilder::new();
    for &index in &wanted {
        builder.append_page(source, page_ids[index])?;
    }
    Ok(builder.finish())
}

/// Merge documents into one, all pages of all sources, in source order then
/// original page order.
///
/// An empty source list yields a zero-page document; a single source yields
/// a content-equivalent copy.
pub async fn merge(sources: &[Document]) -> Result<Document> {
    let sources = sources.to_vec();

    tokio::task::spawn_blocking(move || merge_sync(&sources)).await?
}

/// Synchronous body of [`merge`]
pub fn merge_sync(sources: &[Document]) -> Result<Document> {
    let mut builder = DocumentBuilder::new();
    for source in sources {
        // Deep-copy caches must not leak across source documents: equal
        // object ids in different documents are unrelated objects.
        builder.reset_copy_cache();
        for page_id in source.get_pages().into_values() {
            builder.append_page(source, page_id)?;
        }
    }
    Ok(builder.finish())
}
