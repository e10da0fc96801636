//! Document discovery.
//!
//! Both drivers (index and covers) start from the same enumeration: every
//! file under the document root whose extension matches, sorted by full path
//! component-wise. Sorting here fixes the processing order of the cover pass
//! and the tie order of the index sort, so repeated runs over an unchanged
//! tree behave identically.
//!
//! Entries the walk cannot read (dangling symlinks, unreadable folders,
//! symlink loops) are skipped with a debug line. Only a missing document
//! folder is an error.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Document folder not found: {}", .0.display())]
    RootMissing(PathBuf),
}

/// Absolute (root-joined) paths of all documents under `root/documents_dir`.
///
/// Fails only when the document folder does not exist.
pub fn find_documents(
    root: &Path,
    documents_dir: &str,
    extension: &str,
) -> Result<Vec<PathBuf>, ScanError> {
    let doc_root = root.join(documents_dir);
    if !doc_root.is_dir() {
        return Err(ScanError::RootMissing(doc_root));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(&doc_root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            documents.push(entry.into_path());
        }
    }

    documents.sort();
    Ok(documents)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension.trim_start_matches('.')))
}
