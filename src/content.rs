//! Gallery content store.
//!
//! The photographs shown on the page are a fixed, ordered list supplied once at
//! startup from `gallery.toml` in the content directory:
//!
//! ```toml
//! [[image]]
//! id = 1
//! src = "https://cdn.example.com/dawn.jpg"
//! title = "Dawn"
//! category = "Landscapes"
//! description = "First light over the ridge"
//!
//! [[image]]
//! id = 2
//! src = "https://cdn.example.com/dusk.jpg"
//! title = "Dusk"
//! category = "Landscapes"
//! description = "Last light over the same ridge"
//! ```
//!
//! File order is display order and navigation order. Ids must be unique.
//! Unknown keys are rejected to catch typos early.
//!
//! The content is never mutated after loading: [`ContentStore`] only hands out
//! shared references.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// File name of the content payload inside the content directory.
pub const GALLERY_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate image id {0}")]
    DuplicateId(u32),
    #[error("Gallery validation error: {0}")]
    Validation(String),
}

/// A single photograph on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRecord {
    pub id: u32,
    /// Where the browser loads the image from. Never fetched by this crate.
    pub src: String,
    pub title: String,
    pub category: String,
    pub description: String,
}

/// Ordered, fixed sequence of image records.
///
/// May be empty: an empty gallery renders no thumbnails and the lightbox can
/// never be opened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GalleryContent {
    images: Vec<ImageRecord>,
}

impl GalleryContent {
    /// Build a gallery from records in display order.
    ///
    /// Rejects duplicate ids and records without a source.
    pub fn new(images: Vec<ImageRecord>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if !seen.insert(image.id) {
                return Err(ContentError::DuplicateId(image.id));
            }
            if image.src.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "image {} has an empty src",
                    image.id
                )));
            }
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Display index of the record with the given id.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// The record used as the About section's feature image.
    pub fn featured(&self) -> Option<&ImageRecord> {
        self.images.first()
    }
}

impl<'a> IntoIterator for &'a GalleryContent {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// On-disk shape of `gallery.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GalleryFile {
    #[serde(default)]
    image: Vec<ImageRecord>,
}

/// Parse gallery content from TOML text.
pub fn parse_gallery(text: &str) -> Result<GalleryContent, ContentError> {
    let file: GalleryFile = toml::from_str(text)?;
    GalleryContent::new(file.image)
}

/// Load `gallery.toml` from the content directory.
///
/// Unlike `config.toml`, the gallery file is required.
pub fn load_gallery(dir: &Path) -> Result<GalleryContent, ContentError> {
    let path = dir.join(GALLERY_FILE);
    let text = fs::read_to_string(&path)?;
    let content = parse_gallery(&text)?;
    log::debug!("loaded {} images from {}", content.len(), path.display());
    Ok(content)
}

/// Read-only holder of the gallery for the lifetime of the page.
///
/// Cloning the store shares the same content.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Rc<GalleryContent>,
}

impl ContentStore {
    pub fn new(content: GalleryContent) -> Self {
        Self {
            content: Rc::new(content),
        }
    }

    /// Load the store from a content directory.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        load_gallery(dir).map(Self::new)
    }

    pub fn get(&self) -> &GalleryContent {
        &self.content
    }

    /// Shared handle for collaborators that outlive a borrow, such as the
    /// lightbox controller.
    pub fn shared(&self) -> Rc<GalleryContent> {
        Rc::clone(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{record, three_moments};
    use tempfile::TempDir;

    #[test]
    fn parse_keeps_file_order() {
        let content = parse_gallery(
            r#"
[[image]]
id = 7
src = "a.jpg"
title = "A"
category = "c"
description = "d"

[[image]]
id = 3
src = "b.jpg"
title = "B"
category = "c"
description = "d"
"#,
        )
        .unwrap();
        let ids: Vec<u32> = content.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let err = parse_gallery(
            r#"
[[image]]
id = 1
src = "a.jpg"
title = "A"
category = "c"
description = "d"
tags = ["x"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Toml(_)));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = parse_gallery("[[image]]\nid = 1\nsrc = \"a.jpg\"\n").unwrap_err();
        assert!(matches!(err, ContentError::Toml(_)));
    }

    #[test]
    fn empty_file_is_an_empty_gallery() {
        let content = parse_gallery("").unwrap();
        assert!(content.is_empty());
        assert!(content.featured().is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = GalleryContent::new(vec![record(1), record(2), record(1)]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(1)));
    }

    #[test]
    fn empty_src_is_rejected() {
        let mut bad = record(4);
        bad.src = "  ".to_string();
        let err = GalleryContent::new(vec![bad]).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn position_of_finds_display_index() {
        let content = three_moments();
        assert_eq!(content.position_of(3), Some(2));
        assert_eq!(content.position_of(42), None);
    }

    #[test]
    fn featured_is_first_record() {
        let content = three_moments();
        assert_eq!(content.featured().map(|i| i.id), Some(1));
    }

    #[test]
    fn store_returns_same_content() {
        let content = three_moments();
        let store = ContentStore::new(content.clone());
        assert_eq!(store.get(), &content);
        assert_eq!(store.get().len(), 3);
        assert!(Rc::ptr_eq(&store.shared(), &store.clone().shared()));
    }

    #[test]
    fn load_gallery_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(GALLERY_FILE),
            r#"
[[image]]
id = 1
src = "https://cdn.example.com/1.jpg"
title = "One"
category = "Portfolio"
description = "First"
"#,
        )
        .unwrap();

        let store = ContentStore::load(tmp.path()).unwrap();
        assert_eq!(store.get().len(), 1);
        assert_eq!(store.get().get(0).unwrap().title, "One");
    }

    #[test]
    fn load_gallery_requires_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_gallery(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
