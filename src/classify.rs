//! Directory-convention classification of document paths.
//!
//! Two layouts are supported under the project root:
//!
//! ```text
//! root/
//! ├── pdfs/
//! │   ├── Sozlesme.pdf                  # Flat: category = general label
//! │   └── Felsefe/
//! │       └── Devlet_Ve_Iktidar.pdf     # Categorized: category = "Felsefe"
//! └── covers/
//!     ├── Sozlesme.png
//!     └── Felsefe/
//!         └── Devlet_Ve_Iktidar.png
//! ```
//!
//! The cover tree mirrors the document tree one level deep. Deeper nesting is
//! classified by its first folder only; the `file` path keeps every segment.
//!
//! Both the index builder and the cover generator go through [`classify`], so
//! an entry's `cover` field always names the file the cover generator writes.

use crate::naming::normalize;
use std::borrow::Cow;
use std::path::{Component, Path};

/// Extension of every generated cover image.
pub const COVER_EXTENSION: &str = "png";

/// Which of the two supported layouts a document sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Directly under the document root.
    Flat,
    /// One category folder below the document root. Holds the raw folder name.
    Categorized(String),
}

/// Classification result for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub layout: Layout,
    /// Display label: the general label for flat documents, the normalized
    /// folder name otherwise.
    pub label: String,
    /// Document path relative to the project root, `/`-separated.
    pub file: String,
    /// Cover image path relative to the project root, `/`-separated.
    pub cover: String,
    /// File name of the document, extension included.
    pub file_name: String,
}

/// Names the classifier needs; borrowed from the loaded library config.
#[derive(Debug, Clone, Copy)]
pub struct Conventions<'a> {
    pub documents_dir: &'a str,
    pub covers_dir: &'a str,
    pub general_label: &'a str,
}

/// Classify a document by its location relative to `root`.
///
/// Returns `None` (skip, not an error) when the path cannot be expressed
/// relative to `root`, when its first segment is not the document folder
/// (compared case-insensitively), or when it has no file segment below it.
pub fn classify(document: &Path, root: &Path, conventions: &Conventions) -> Option<CategoryInfo> {
    let relative = document.strip_prefix(root).ok()?;

    // Names that are not valid UTF-8 are kept, with U+FFFD in place of the
    // bad bytes, in every derived string.
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Option<Vec<Cow<str>>>>()?;

    if parts.len() < 2 || !parts[0].eq_ignore_ascii_case(conventions.documents_dir) {
        return None;
    }

    let file_name = parts[parts.len() - 1].as_ref();
    let stem = Path::new(file_name).file_stem()?.to_str()?;

    let (layout, label, cover) = if parts.len() >= 3 {
        let folder = parts[1].as_ref();
        (
            Layout::Categorized(folder.to_string()),
            normalize(folder),
            format!("{}/{}/{}.{}", conventions.covers_dir, folder, stem, COVER_EXTENSION),
        )
    } else {
        (
            Layout::Flat,
            conventions.general_label.to_string(),
            format!("{}/{}.{}", conventions.covers_dir, stem, COVER_EXTENSION),
        )
    };

    Some(CategoryInfo {
        layout,
        label,
        file: parts.join("/"),
        cover,
        file_name: file_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVENTIONS: Conventions<'static> = Conventions {
        documents_dir: "pdfs",
        covers_dir: "covers",
        general_label: "Genel",
    };

    fn run(path: &str) -> Option<CategoryInfo> {
        classify(Path::new(path), Path::new("/lib"), &CONVENTIONS)
    }

    #[test]
    fn categorized_document() {
        let info = run("/lib/pdfs/Felsefe/Devlet_Ve_Iktidar.pdf").unwrap();
        assert_eq!(info.layout, Layout::Categorized("Felsefe".to_string()));
        assert_eq!(info.label, "Felsefe");
        assert_eq!(info.file, "pdfs/Felsefe/Devlet_Ve_Iktidar.pdf");
        assert_eq!(info.cover, "covers/Felsefe/Devlet_Ve_Iktidar.png");
        assert_eq!(info.file_name, "Devlet_Ve_Iktidar.pdf");
    }

    #[test]
    fn flat_document_gets_general_label() {
        let info = run("/lib/pdfs/Sozlesme.pdf").unwrap();
        assert_eq!(info.layout, Layout::Flat);
        assert_eq!(info.label, "Genel");
        assert_eq!(info.file, "pdfs/Sozlesme.pdf");
        assert_eq!(info.cover, "covers/Sozlesme.png");
    }

    #[test]
    fn category_label_is_normalized_but_cover_keeps_raw_folder() {
        let info = run("/lib/pdfs/01_siyaset_bilimi/Kitap.pdf").unwrap();
        assert_eq!(info.label, "Siyaset Bilimi");
        assert_eq!(info.cover, "covers/01_siyaset_bilimi/Kitap.png");
    }

    #[test]
    fn deeper_nesting_uses_first_folder_only() {
        let info = run("/lib/pdfs/Tarih/Osmanli/Cilt_1.pdf").unwrap();
        assert_eq!(info.label, "Tarih");
        assert_eq!(info.file, "pdfs/Tarih/Osmanli/Cilt_1.pdf");
        assert_eq!(info.cover, "covers/Tarih/Cilt_1.png");
    }

    #[test]
    fn document_folder_matched_case_insensitively() {
        let info = run("/lib/PDFs/Sozlesme.pdf").unwrap();
        assert_eq!(info.file, "PDFs/Sozlesme.pdf");
        assert_eq!(info.label, "Genel");
    }

    #[test]
    fn wrong_top_folder_is_skipped() {
        assert_eq!(run("/lib/docs/Sozlesme.pdf"), None);
        assert_eq!(run("/lib/covers/Felsefe/Kitap.pdf"), None);
    }

    #[test]
    fn path_outside_root_is_skipped() {
        assert_eq!(run("/elsewhere/pdfs/Sozlesme.pdf"), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name_is_kept() {
        use std::os::unix::ffi::OsStrExt;

        let name = std::ffi::OsStr::from_bytes(b"Kitap_\xff.pdf");
        let path = Path::new("/lib/pdfs/Felsefe").join(name);
        let info = classify(&path, Path::new("/lib"), &CONVENTIONS).unwrap();
        assert_eq!(info.label, "Felsefe");
        assert_eq!(info.file, "pdfs/Felsefe/Kitap_\u{FFFD}.pdf");
        assert_eq!(info.cover, "covers/Felsefe/Kitap_\u{FFFD}.png");
        assert_eq!(info.file_name, "Kitap_\u{FFFD}.pdf");
    }

    #[test]
    fn document_folder_itself_is_skipped() {
        assert_eq!(run("/lib/pdfs"), None);
        assert_eq!(run("/lib/Sozlesme.pdf"), None);
    }

    #[test]
    fn custom_conventions_flow_through() {
        let conventions = Conventions {
            documents_dir: "kitaplar",
            covers_dir: "kapaklar",
            general_label: "General",
        };
        let info = classify(
            Path::new("/lib/kitaplar/A.pdf"),
            Path::new("/lib"),
            &conventions,
        )
        .unwrap();
        assert_eq!(info.label, "General");
        assert_eq!(info.cover, "kapaklar/A.png");
    }

    #[test]
    fn same_path_classifies_identically() {
        let a = run("/lib/pdfs/Felsefe/Devlet_Ve_Iktidar.pdf");
        let b = run("/lib/pdfs/Felsefe/Devlet_Ve_Iktidar.pdf");
        assert_eq!(a, b);
    }
}
