//! Catalog index building and serialization.
//!
//! Walks the document tree, classifies and titles every document, orders the
//! entries by `(category, title)` with the configured collation, and writes
//! two JSON views of the same ordered list:
//!
//! ```text
//! books.json       full view, every field, 2-space indented
//! books_min.json   title/category/file/cover only, no whitespace
//! ```
//!
//! Non-ASCII characters are written as-is (UTF-8), never `\u` escaped.
//!
//! Every run is a full rescan. Documents that normalize to the same title are
//! kept as separate entries; the sort is stable so they stay in path order.

use crate::classify::classify;
use crate::collation::Collation;
use crate::config::CatalogConfig;
use crate::naming::normalize;
use crate::scan::{self, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One catalog record, as written to the full index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub title: String,
    pub category: String,
    /// Document path relative to the project root, `/`-separated.
    pub file: String,
    /// Cover image path relative to the project root, `/`-separated.
    pub cover: String,
    /// Publication year. Always empty; reserved for manual curation.
    pub year: String,
    /// Free-form tags. Always empty; reserved for manual curation.
    pub tags: Vec<String>,
}

/// Minimal-view projection of a [`DocumentEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalEntry<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub file: &'a str,
    pub cover: &'a str,
}

impl<'a> From<&'a DocumentEntry> for MinimalEntry<'a> {
    fn from(entry: &'a DocumentEntry) -> Self {
        Self {
            title: &entry.title,
            category: &entry.category,
            file: &entry.file,
            cover: &entry.cover,
        }
    }
}

/// Paths of the two written index files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFiles {
    pub full: PathBuf,
    pub minimal: PathBuf,
}

/// Build the ordered catalog for the library at `root`.
///
/// Fails only when the document folder is missing. Documents that cannot be
/// classified are left out without a trace.
pub fn build_index(root: &Path, config: &CatalogConfig) -> Result<Vec<DocumentEntry>, ScanError> {
    let library = &config.library;
    let conventions = library.conventions();
    let documents = scan::find_documents(root, &library.documents_dir, &library.extension)?;

    let mut entries: Vec<DocumentEntry> = documents
        .iter()
        .filter_map(|path| classify(path, root, &conventions))
        .map(|info| DocumentEntry {
            title: normalize(&info.file_name),
            category: info.label,
            file: info.file,
            cover: info.cover,
            year: String::new(),
            tags: Vec::new(),
        })
        .collect();

    let collation = Collation::for_locale(&config.index.collation_locale);
    sort_entries(&mut entries, &collation);
    Ok(entries)
}

/// Stable sort by `(category, title)` under `collation`.
pub fn sort_entries(entries: &mut [DocumentEntry], collation: &Collation) {
    collation.sort_by_key(entries, |e| (e.category.as_str(), e.title.as_str()));
}

/// Full view: indented JSON array of every field.
pub fn to_full_json(entries: &[DocumentEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Minimal view: compact JSON array of title/category/file/cover.
pub fn to_minimal_json(entries: &[DocumentEntry]) -> Result<String, serde_json::Error> {
    let minimal: Vec<MinimalEntry> = entries.iter().map(MinimalEntry::from).collect();
    serde_json::to_string(&minimal)
}

/// Write both index views into `root`. Existing files are overwritten.
pub fn write_index(
    root: &Path,
    config: &CatalogConfig,
    entries: &[DocumentEntry],
) -> Result<IndexFiles, IndexError> {
    let files = IndexFiles {
        full: root.join(&config.index.full),
        minimal: root.join(&config.index.minimal),
    };
    for path in [&files.full, &files.minimal] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&files.full, to_full_json(entries)?)?;
    std::fs::write(&files.minimal, to_minimal_json(entries)?)?;
    Ok(files)
}

/// Build the catalog and write both views.
pub fn run(root: &Path, config: &CatalogConfig) -> Result<(Vec<DocumentEntry>, IndexFiles), IndexError> {
    let entries = build_index(root, config)?;
    let files = write_index(root, config, &entries)?;
    Ok((entries, files))
}
