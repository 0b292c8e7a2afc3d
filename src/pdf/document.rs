//! Loading, page-order rewriting and saving of PDF documents using lopdf

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::reorder::reorder;

/// Outcome of reordering one file.
///
/// The reorder drops a trailing held page on inputs of two or more pages,
/// so `output_pages` is usually `source_pages - 1`. Callers use
/// [`ReorderReport::dropped_page`] to tell the user about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderReport {
    /// Page count of the source document
    pub source_pages: usize,
    /// Page count of the written document
    pub output_pages: usize,
}

impl ReorderReport {
    /// Whether the trailing page was dropped by the reorder.
    pub fn dropped_page(&self) -> bool {
        self.output_pages < self.source_pages
    }
}

/// Reorder the pages of `source` for right-to-left spread viewing and
/// save the result to `output`.
pub fn reorder_file(source: &Path, output: &Path) -> Result<ReorderReport> {
    if !source.exists() {
        return Err(Error::FileNotFound(source.to_path_buf()));
    }

    let doc = Document::load(source)?;

    // get_pages() is keyed by page number, so iteration yields the ids
    // in document page order.
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    if page_ids.is_empty() {
        return Err(Error::EmptyPdf(source.to_path_buf()));
    }

    let source_pages = page_ids.len();
    let reordered = reorder(page_ids);
    let output_pages = reordered.len();

    write_with_pages(doc, &reordered, output)?;

    Ok(ReorderReport {
        source_pages,
        output_pages,
    })
}

/// Save `source`'s objects under a fresh catalog whose Pages tree lists
/// exactly `page_ids`, in that order.
///
/// The original catalog and Pages objects stay in the object table but are
/// no longer referenced from the trailer; a dropped page's object survives
/// the same way, unlinked from the new Kids array.
fn write_with_pages(source: Document, page_ids: &[ObjectId], output: &Path) -> Result<()> {
    let mut doc = Document::with_version("1.5");

    let max_id = source.max_id;
    doc.objects.extend(source.objects);

    // new_object_id() hands out ids above max_id, so the fresh catalog and
    // Pages objects cannot collide with anything we just copied over.
    doc.max_id = max_id;

    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = page_ids
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    doc.objects.insert(pages_id, Object::Dictionary(pages_object));
    doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    // Re-parent the listed pages onto the new Pages object
    for &page_id in page_ids {
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    doc.compress();
    doc.save(output)?;

    Ok(())
}

/// Count the pages in a PDF file by reading the Count field of the root
/// Pages dictionary.
pub fn page_count(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let count = page_count_from_catalog(&doc)?;

    if count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(count)
}

fn page_count_from_catalog(doc: &Document) -> Result<usize> {
    let root_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| Error::Structure("trailer has no Root reference".to_string()))?;

    let pages_id = doc
        .get_object(root_id)?
        .as_dict()
        .map_err(|_| Error::Structure("catalog is not a dictionary".to_string()))?
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| Error::Structure("catalog has no Pages reference".to_string()))?;

    let count = doc
        .get_object(pages_id)?
        .as_dict()
        .map_err(|_| Error::Structure("Pages is not a dictionary".to_string()))?
        .get(b"Count")
        .and_then(Object::as_i64)
        .map_err(|_| Error::Structure("Pages has no integer Count".to_string()))?;

    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_file_nonexistent_source() {
        let result = reorder_file(Path::new("nonexistent.pdf"), Path::new("out.pdf"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_page_count_nonexistent_file() {
        let result = page_count(Path::new("nonexistent.pdf"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_report_dropped_page() {
        let dropped = ReorderReport {
            source_pages: 4,
            output_pages: 3,
        };
        assert!(dropped.dropped_page());

        let kept = ReorderReport {
            source_pages: 1,
            output_pages: 1,
        };
        assert!(!kept.dropped_page());
    }

    // Tests over real generated PDFs live in tests/integration.rs
}
