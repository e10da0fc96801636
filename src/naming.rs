//! Centralized name normalization for documents and category folders.
//!
//! Every human-readable label in the catalog comes from a filesystem name:
//! document titles from file names, category labels from folder names. This
//! module provides the single function that turns one into the other so the
//! index and the cover generator always agree.
//!
//! ## Display Titles
//!
//! - `01_Anarsizm_Tarihi.pdf` → "Anarsizm Tarihi" (ordering prefix and extension dropped)
//! - `___weird--name.PDF` → "Weird Name" (any run of leading separators dropped)
//! - `02_felsefe` → "Felsefe" (category folder)

/// Normalize a raw file or folder name into a display title.
///
/// Steps, in order:
/// 1. drop one trailing extension (text after the last `.`)
/// 2. drop a leading run of digits, `_`, `-` and whitespace
/// 3. turn remaining `_` and `-` into spaces
/// 4. collapse whitespace runs and trim
/// 5. title-case each word
///
/// Pure and total: any input, including `""`, yields a (possibly empty) string.
pub fn normalize(raw: &str) -> String {
    let stem = match raw.rfind('.') {
        Some(dot) => &raw[..dot],
        None => raw,
    };

    let unprefixed =
        stem.trim_start_matches(|c: char| c.is_ascii_digit() || c == '_' || c == '-' || c.is_whitespace());

    let spaced = unprefixed.replace(['_', '-'], " ");

    spaced
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word and lowercase the rest.
fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
