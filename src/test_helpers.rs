//! Shared test utilities for the shelfgen test suite.
//!
//! Builds throwaway library trees and provides lookup helpers for the
//! resulting index.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = library(&["pdfs/Sozlesme.pdf", "pdfs/Felsefe/Devlet_Ve_Iktidar.pdf"]);
//! let entries = build_index(tmp.path(), &CatalogConfig::default()).unwrap();
//! let entry = find_entry(&entries, "Sozlesme");
//! assert_eq!(entry.category, "Genel");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::index::DocumentEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp project root containing an (empty) `pdfs/` folder plus the
/// given files, relative to the root. File contents are irrelevant to
/// indexing, so each file just holds its own path.
pub fn library(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("pdfs")).unwrap();
    for file in files {
        write_file(tmp.path(), file, file.as_bytes());
    }
    tmp
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

// =========================================================================
// Index lookups (panic with a clear message on miss)
// =========================================================================

/// Find an entry by title. Panics if not found.
pub fn find_entry<'a>(entries: &'a [DocumentEntry], title: &str) -> &'a DocumentEntry {
    entries.iter().find(|e| e.title == title).unwrap_or_else(|| {
        panic!(
            "entry '{title}' not found. Available: {:?}",
            entry_titles(entries)
        )
    })
}

/// All entry titles in index order.
pub fn entry_titles(entries: &[DocumentEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// All `(category, title)` pairs in index order.
pub fn entry_keys(entries: &[DocumentEntry]) -> Vec<(&str, &str)> {
    entries
        .iter()
        .map(|e| (e.category.as_str(), e.title.as_str()))
        .collect()
}
