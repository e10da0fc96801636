//! # Shelfgen
//!
//! Catalog builder for a folder of PDF documents. The filesystem is the data
//! source: a document's folder decides its category, its file name becomes
//! its title, and its first page becomes its cover.
//!
//! # Architecture: Two Passes Over One Scan
//!
//! ```text
//! 1. Index   pdfs/  →  books.json, books_min.json   (ordered catalog)
//! 2. Covers  pdfs/  →  covers/**.png                (first page or placeholder)
//! ```
//!
//! Both passes enumerate the same files in the same order and classify them
//! through the same function, so every `cover` path written to the index is
//! exactly the file the cover pass produces. Either pass can run alone.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Deterministic enumeration of documents under the document folder |
//! | [`classify`] | Flat vs categorized layout, category label, relative file and cover paths |
//! | [`naming`] | File name → display title normalization |
//! | [`collation`] | Locale-aware `(category, title)` ordering with ordinal fallback |
//! | [`index`] | Index pass: builds, sorts and writes the full and minimal JSON views |
//! | [`covers`] | Cover pass: rasterizes first pages, falls back to placeholders |
//! | [`imaging`] | Rasterizer and typeface capabilities, placeholder composition |
//! | [`config`] | `config.toml` loading, stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Injected Capabilities
//!
//! Page rasterization and text drawing sit behind the [`imaging::Rasterizer`]
//! and [`imaging::Typeface`] traits. The rasterizer is required: when PDFium
//! cannot be bound the cover pass stops before touching any document. Fonts
//! are optional: a chain of font files ends in a face compiled into the
//! binary, so placeholder composition always has something to draw with.
//!
//! ## Explicit Collation
//!
//! Ordering uses an ICU collator built for the configured locale (Turkish by
//! default) and passed to the sort. No process-wide locale state is touched.
//! When the locale has no collation data the sort quietly becomes ordinal.
//!
//! ## Failures Stay Local
//!
//! Only a missing document folder ends a run. A path outside the conventions
//! is skipped; a document that will not render gets a placeholder cover.

pub mod classify;
pub mod collation;
pub mod config;
pub mod covers;
pub mod imaging;
pub mod index;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
