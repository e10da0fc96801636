//! Capability traits for cover rendering.
//!
//! Two collaborators are injected into the cover pipeline:
//!
//! - [`Rasterizer`] opens a document and hands out a [`PageSource`] that can
//!   report its page count and width and render a page at a scale factor.
//!   The production implementation is
//!   [`PdfiumRasterizer`](super::pdfium_backend::PdfiumRasterizer).
//! - [`Typeface`] measures and draws a line of text on the placeholder canvas.
//!   Implementations live in [`fonts`](super::fonts).
//!
//! Everything above these traits is backend-agnostic and testable with the
//! mocks at the bottom of this file.

use image::{Rgb, RgbImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Rasterizer unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to open {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("Document has no pages")]
    EmptyDocument,
    #[error("Rendering failed: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// An opened document.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Width of a page in document units (points for PDF).
    fn page_width(&self, index: usize) -> Result<f32, RasterError>;

    /// Render a page, multiplying its document-unit size by `scale`.
    fn render_page(&self, index: usize, scale: f32) -> Result<RgbaImage, RasterError>;
}

/// Page-rasterization capability.
pub trait Rasterizer {
    type Document<'a>: PageSource
    where
        Self: 'a;

    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>, RasterError>;
}

/// Rendered size of a line of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Text measuring and drawing capability.
pub trait Typeface {
    fn measure(&self, text: &str) -> TextExtent;

    /// Draw `text` with its top-left corner at `(x, y)`. Pixels outside the
    /// canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str);

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
