//! CLI output formatting for the index and cover passes.
//!
//! # Information-First Display
//!
//! Every document is shown by its semantic identity first (positional index
//! and normalized title), with filesystem paths as indented context lines.
//! The listing reads as a catalog while still tracing each entry back to its
//! file.
//!
//! # Output Format
//!
//! ## Index
//!
//! ```text
//! Felsefe (2 documents)
//!     001 Ahlak
//!         Source: pdfs/Felsefe/Ahlak.pdf
//!         Cover: covers/Felsefe/Ahlak.png
//!     002 Devlet Ve Iktidar
//!         Source: pdfs/Felsefe/Devlet_Ve_Iktidar.pdf
//!         Cover: covers/Felsefe/Devlet_Ve_Iktidar.png
//! Genel (1 document)
//!     001 Sozlesme
//!         Source: pdfs/Sozlesme.pdf
//!         Cover: covers/Sozlesme.png
//!
//! 3 documents in 2 categories
//! ```
//!
//! ## Covers
//!
//! ```text
//! 001 Sozlesme → covers/Sozlesme.png
//!     Source: pdfs/Sozlesme.pdf
//!     rendered: 600x776
//! 002 Devlet Ve Iktidar → covers/Felsefe/Devlet_Ve_Iktidar.png
//!     Source: pdfs/Felsefe/Devlet_Ve_Iktidar.pdf
//!     placeholder: Document has no pages
//!
//! Covers: 1 rendered, 1 placeholder, 0 failed
//! ```
//!
//! # Architecture
//!
//! Each pass has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::covers::{CoverOutcome, CoverReport};
use crate::index::{DocumentEntry, IndexFiles};
use std::path::Path;

const NO_DOCUMENTS: &str = "No documents found";

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 document`, `2 documents`.
fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// Display form of `path` relative to `root`, falling back to the full path.
fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Split index entries into runs of the same category, keeping order.
fn group_by_category(entries: &[DocumentEntry]) -> Vec<(&str, &[DocumentEntry])> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=entries.len() {
        if i == entries.len() || entries[i].category != entries[start].category {
            groups.push((entries[start].category.as_str(), &entries[start..i]));
            start = i;
        }
    }
    groups
}

// ============================================================================
// Index output
// ============================================================================

/// Format the ordered catalog grouped by category.
pub fn format_index_output(entries: &[DocumentEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_DOCUMENTS.to_string()];
    }

    let mut lines = Vec::new();
    let groups = group_by_category(entries);

    for (category, group) in &groups {
        lines.push(format!("{} ({})", category, count_noun(group.len(), "document", "documents")));
        for (i, entry) in group.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), entry.title));
            lines.push(format!("{}Source: {}", indent(2), entry.file));
            lines.push(format!("{}Cover: {}", indent(2), entry.cover));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} in {}",
        count_noun(entries.len(), "document", "documents"),
        count_noun(groups.len(), "category", "categories")
    ));
    lines
}

/// Format the locations of the two written index files.
pub fn format_index_files(files: &IndexFiles, root: &Path) -> Vec<String> {
    vec![
        format!("Full index \u{2192} {}", relative_display(&files.full, root)),
        format!("Minimal index \u{2192} {}", relative_display(&files.minimal, root)),
    ]
}

/// Print index output to stdout.
pub fn print_index_output(entries: &[DocumentEntry]) {
    for line in format_index_output(entries) {
        println!("{}", line);
    }
}

/// Print index file locations to stdout.
pub fn print_index_files(files: &IndexFiles, root: &Path) {
    for line in format_index_files(files, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Cover output
// ============================================================================

fn outcome_line(outcome: &CoverOutcome) -> String {
    match outcome {
        CoverOutcome::Rasterized { width, height } => format!("rendered: {width}x{height}"),
        CoverOutcome::Placeholder { reason } => format!("placeholder: {reason}"),
        CoverOutcome::Failed { reason } => format!("failed: {reason}"),
    }
}

/// Format a cover pass: one block per document in processing order, then a
/// summary line.
pub fn format_cover_report(report: &CoverReport) -> Vec<String> {
    if report.is_empty() {
        return vec![NO_DOCUMENTS.to_string()];
    }

    let mut lines = Vec::new();
    for (i, record) in report.records.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            record.title,
            record.cover
        ));
        lines.push(format!("{}Source: {}", indent(1), record.file));
        lines.push(format!("{}{}", indent(1), outcome_line(&record.outcome)));
    }

    lines.push(String::new());
    lines.push(format!(
        "Covers: {} rendered, {} placeholder, {} failed",
        report.rasterized(),
        report.placeholders(),
        report.failed()
    ));
    lines
}

/// Print cover output to stdout.
pub fn print_cover_report(report: &CoverReport) {
    for line in format_cover_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
