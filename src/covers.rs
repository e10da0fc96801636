//! Cover generation: one PNG per classified document.
//!
//! For every document the first page is rasterized at `covers.target_width`
//! pixels wide (height follows the page's aspect ratio). Anything that goes
//! wrong on that path (the document does not open, has no pages, fails to
//! render, or the image cannot be written) is absorbed here: a placeholder
//! with the document's title is written to the same target instead.
//!
//! ```text
//! pdfs/Felsefe/Devlet_Ve_Iktidar.pdf
//!   ├── rasterize page 1 ──▶ covers/Felsefe/Devlet_Ve_Iktidar.png  (600 × h)
//!   └── on failure ───────▶ covers/Felsefe/Devlet_Ve_Iktidar.png  (600 × 800 placeholder)
//! ```
//!
//! Documents are handled one at a time in scan order. Only a missing document
//! folder or an unavailable rasterizer stops the pass.

use crate::classify::classify;
use crate::config::CatalogConfig;
use crate::imaging::{
    PageSource, PdfiumRasterizer, PlaceholderComposer, PlaceholderStyle, RasterError, Rasterizer,
    load_typeface, scale_to_width,
};
use crate::naming::normalize;
use crate::scan::{self, ScanError};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CoverError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Rasterizer(#[from] RasterError),
}

/// One document to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverJob {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Normalized title, drawn on the placeholder.
    pub title: String,
}

/// Which path produced a cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverOutcome {
    /// First page rendered and written at this size.
    Rasterized { width: u32, height: u32 },
    /// Rasterization failed for `reason`; a placeholder was written.
    Placeholder { reason: String },
    /// Even the placeholder could not be written.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverRecord {
    pub title: String,
    /// Document path relative to the project root.
    pub file: String,
    /// Cover path relative to the project root.
    pub cover: String,
    pub outcome: CoverOutcome,
}

/// Result of a cover pass, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverReport {
    pub records: Vec<CoverRecord>,
}

impl CoverReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rasterized(&self) -> usize {
        self.count(|o| matches!(o, CoverOutcome::Rasterized { .. }))
    }

    pub fn placeholders(&self) -> usize {
        self.count(|o| matches!(o, CoverOutcome::Placeholder { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CoverOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&CoverOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Render one cover, falling back to a placeholder. Never fails.
pub fn render_cover(
    job: &CoverJob,
    rasterizer: &impl Rasterizer,
    composer: &PlaceholderComposer,
    target_width: u32,
) -> CoverOutcome {
    match rasterize_first_page(rasterizer, &job.source, &job.target, target_width) {
        Ok((width, height)) => {
            info!(
                "{}: first page rendered at {width}x{height}",
                job.source.display()
            );
            CoverOutcome::Rasterized { width, height }
        }
        Err(cause) => {
            info!("{}: {cause}; writing placeholder", job.source.display());
            match composer.compose(&job.title, &job.target) {
                Ok(()) => CoverOutcome::Placeholder {
                    reason: cause.to_string(),
                },
                Err(e) => {
                    warn!("{}: placeholder not written: {e}", job.target.display());
                    CoverOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        }
    }
}

/// Rasterize page 1 scaled to `target_width` and save it as an RGB PNG.
fn rasterize_first_page(
    rasterizer: &impl Rasterizer,
    source: &Path,
    target: &Path,
    target_width: u32,
) -> Result<(u32, u32), RasterError> {
    let document = rasterizer.open(source)?;
    if document.page_count() == 0 {
        return Err(RasterError::EmptyDocument);
    }

    let scale = scale_to_width(document.page_width(0)?, target_width);
    let page = document.render_page(0, scale)?;
    let rgb = DynamicImage::ImageRgba8(page).into_rgb8();

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    rgb.save_with_format(target, ImageFormat::Png)?;
    Ok(rgb.dimensions())
}

/// Render covers for already-enumerated `documents`. Unclassifiable paths are
/// skipped silently.
pub fn render_covers(
    root: &Path,
    config: &CatalogConfig,
    documents: &[PathBuf],
    rasterizer: &impl Rasterizer,
    composer: &PlaceholderComposer,
) -> CoverReport {
    let conventions = config.library.conventions();
    let mut records = Vec::new();

    for path in documents {
        let Some(info) = classify(path, root, &conventions) else {
            continue;
        };
        let job = CoverJob {
            source: path.clone(),
            target: root.join(&info.cover),
            title: normalize(&info.file_name),
        };
        let outcome = render_cover(&job, rasterizer, composer, config.covers.target_width);
        records.push(CoverRecord {
            title: job.title,
            file: info.file,
            cover: info.cover,
            outcome,
        });
    }

    CoverReport { records }
}

/// Scan the library at `root` and render every cover with the given
/// collaborators.
pub fn generate_covers(
    root: &Path,
    config: &CatalogConfig,
    rasterizer: &impl Rasterizer,
    composer: &PlaceholderComposer,
) -> Result<CoverReport, ScanError> {
    let library = &config.library;
    let documents = scan::find_documents(root, &library.documents_dir, &library.extension)?;
    Ok(render_covers(root, config, &documents, rasterizer, composer))
}

/// Build the placeholder composer described by `config.covers`.
pub fn composer_from_config(config: &CatalogConfig) -> PlaceholderComposer {
    let covers = &config.covers;
    let typeface = load_typeface(
        covers.font.as_deref(),
        &covers.fallback_fonts,
        covers.font_size,
    );
    PlaceholderComposer::new(PlaceholderStyle::from_config(covers), typeface)
}

/// Cover pass with the production collaborators.
///
/// The document folder is checked first. An empty library returns an empty
/// report without binding PDFium; otherwise PDFium must bind or the pass fails.
pub fn run(root: &Path, config: &CatalogConfig) -> Result<CoverReport, CoverError> {
    let library = &config.library;
    let documents = scan::find_documents(root, &library.documents_dir, &library.extension)?;
    if documents.is_empty() {
        return Ok(CoverReport::default());
    }

    let rasterizer = PdfiumRasterizer::bind(config.covers.pdfium_library.as_deref())?;
    let composer = composer_from_config(config);
    Ok(render_covers(root, config, &documents, &rasterizer, &composer))
}
