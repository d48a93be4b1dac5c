//! Document I/O for the assembly operations

use crate::{ConvertError, Result};
use lopdf::Document;
use std::path::Path;

/// Load a single PDF document.
///
/// Unparseable input (corrupt bytes, unsupported encryption) surfaces as
/// [`ConvertError::DocumentLoad`].
pub async fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || {
        Document::load_mem(&bytes)
            .map_err(|e| ConvertError::DocumentLoad(format!("{}: {}", path.display(), e)))
    })
    .await??;
    Ok(doc)
}

/// Load multiple PDF documents, in input order
pub async fn load_documents(paths: &[impl AsRef<Path>]) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for path in paths {
        documents.push(load_document(path).await?);
    }
    Ok(documents)
}

/// Save an assembled document
pub async fn save_document(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = document_bytes(doc).await?;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Serialize an assembled document to bytes
pub async fn document_bytes(doc: Document) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let mut doc = doc;
        doc.compress();
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ConvertError>(writer)
    })
    .await?
}
