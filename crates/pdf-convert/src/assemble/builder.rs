//! Incremental construction of output documents
//!
//! `DocumentBuilder` owns a fresh `lopdf::Document` plus the object id of
//! its page tree root, and copies pages into it from source documents. All
//! indirect objects a page references (resources, content streams,
//! annotations) are deep-copied so the output is self-contained.

use crate::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

pub struct DocumentBuilder {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
    copy_cache: HashMap<ObjectId, ObjectId>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            copy_cache: HashMap::new(),
        }
    }

    /// Deep-copy one page from `source` into the output document.
    ///
    /// The page dictionary is copied key by key, except `Parent`, which is
    /// rewritten to point at the output page tree. Copying `Parent` would
    /// drag the source's entire page tree along.
    ///
    /// The page's own id goes into the copy cache up front, so objects that
    /// reference their page (annotations via `/P`) resolve to this copy
    /// instead of spawning a second, orphaned one.
    pub fn append_page(&mut self, source: &Document, page_id: ObjectId) -> Result<()> {
        let page_dict = source.get_dictionary(page_id)?;

        let new_page_id = self.doc.new_object_id();
        self.copy_cache.insert(page_id, new_page_id);

        let mut new_dict = Dictionary::new();
        for (key, value) in page_dict.iter() {
            if key == b"Parent" {
                continue;
            }
            new_dict.set(key.clone(), self.copy_object(source, value)?);
        }
        new_dict.set("Parent", Object::Reference(self.pages_id));

        self.doc.objects.insert(new_page_id, Object::Dictionary(new_dict));
        self.kids.push(new_page_id);
        Ok(())
    }

    /// Append a fully-formed page dictionary (used by composition, where
    /// pages are built from scratch rather than copied).
    pub fn append_new_page(&mut self, mut page_dict: Dictionary) -> ObjectId {
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        let id = self.doc.add_object(page_dict);
        self.kids.push(id);
        id
    }

    /// Add an arbitrary indirect object to the output document
    pub fn add_object(&mut self, object: impl Into<Object>) -> ObjectId {
        self.doc.add_object(object)
    }

    /// Drop the deep-copy cache. Must be called between source documents:
    /// object ids are only unique within one document.
    pub fn reset_copy_cache(&mut self) {
        self.copy_cache.clear();
    }

    /// Finalize the page tree and catalog and hand over the document
    pub fn finish(mut self) -> Document {
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set(
            "Kids",
            Object::Array(self.kids.iter().map(|&id| Object::Reference(id)).collect()),
        );
        pages_dict.set("Count", Object::Integer(self.kids.len() as i64));
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.doc.add_object(catalog);

        self.doc.trailer.set("Root", Object::Reference(catalog_id));
        self.doc
    }

    /// Deep copy an object from a source document, following references.
    ///
    /// Reference targets get their output id reserved and cached before the
    /// referenced object is copied, so reference cycles (e.g. annotations
    /// pointing back at their page) terminate.
    fn copy_object(&mut self, source: &Document, obj: &Object) -> Result<Object> {
        match obj {
            Object::Reference(id) => {
                if let Some(&new_id) = self.copy_cache.get(id) {
                    return Ok(Object::Reference(new_id));
                }

                let new_id = self.doc.new_object_id();
                self.copy_cache.insert(*id, new_id);

                let referenced = source.get_object(*id)?;
                let copied = self.copy_object(source, referenced)?;
                self.doc.objects.insert(new_id, copied);

                Ok(Object::Reference(new_id))
            }
            Object::Dictionary(dict) => {
                let mut new_dict = Dictionary::new();
                for (key, value) in dict.iter() {
                    new_dict.set(key.clone(), self.copy_object(source, value)?);
                }
                Ok(Object::Dictionary(new_dict))
            }
            Object::Array(arr) => {
                let new_arr: Result<Vec<_>> = arr
                    .iter()
                    .map(|item| self.copy_object(source, item))
                    .collect();
                Ok(Object::Array(new_arr?))
            }
            Object::Stream(stream) => {
                let mut new_dict = Dictionary::new();
                for (key, value) in stream.dict.iter() {
                    new_dict.set(key.clone(), self.copy_object(source, value)?);
                }
                Ok(Object::Stream(Stream {
                    dict: new_dict,
                    content: stream.content.clone(),
                    allows_compression: stream.allows_compression,
                    start_position: None,
                }))
            }
            // Primitive types: just clone
            _ => Ok(obj.clone()),
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
