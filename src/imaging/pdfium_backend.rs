//! Production rasterizer backed by PDFium.
//!
//! PDFium is loaded at runtime as a shared library, either from a configured
//! directory or through the platform's library search path. When it cannot be
//! bound, [`PdfiumRasterizer::bind`] fails with [`RasterError::Unavailable`]:
//! rasterization is a required capability and the cover pass stops before
//! touching any document.
//!
//! | Operation | pdfium-render call |
//! |---|---|
//! | Open | `Pdfium::load_pdf_from_file` |
//! | Page count | `PdfPages::len` |
//! | Page width | `PdfPage::width` (points) |
//! | Render | `PdfPage::render_with_config` + `scale_page_by_factor` |

use super::backend::{PageSource, RasterError, Rasterizer};
use image::RgbaImage;
use pdfium_render::prelude::*;
use std::path::Path;

pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Bind to PDFium in `library_dir`, or the system library when `None`.
    pub fn bind(library_dir: Option<&Path>) -> Result<Self, RasterError> {
        let bindings = match library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| RasterError::Unavailable(format!("{e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

/// A document opened through PDFium.
pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumDocument<'a> {
    fn page(&self, index: usize) -> Result<PdfPage<'a>, RasterError> {
        let index = u16::try_from(index)
            .map_err(|_| RasterError::Render(format!("page index {index} out of range")))?;
        self.document
            .pages()
            .get(index)
            .map_err(|e| RasterError::Render(format!("{e:?}")))
    }
}

impl PageSource for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_width(&self, index: usize) -> Result<f32, RasterError> {
        Ok(self.page(index)?.width().value)
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RgbaImage, RasterError> {
        let page = self.page(index)?;
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| RasterError::Render(format!("{e:?}")))?;

        let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
        RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes()).ok_or_else(|| {
            RasterError::Render(format!("bitmap buffer does not match {width}x{height}"))
        })
    }
}

impl Rasterizer for PdfiumRasterizer {
    type Document<'a> = PdfiumDocument<'a>;

    fn open<'a>(&'a self, path: &Path) -> Result<PdfiumDocument<'a>, RasterError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| RasterError::Open {
                path: path.display().to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(PdfiumDocument { document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PDFium is not guaranteed to be installed where tests run, so these only
    // assert behaviour that holds either way.

    #[test]
    fn bind_to_missing_directory_is_unavailable() {
        let result = PdfiumRasterizer::bind(Some(Path::new("/nonexistent/pdfium")));
        assert!(matches!(result, Err(RasterError::Unavailable(_))));
    }

    #[test]
    fn open_missing_file_fails_when_bound() {
        let Ok(rasterizer) = PdfiumRasterizer::bind(None) else {
            return;
        };
        let result = rasterizer.open(Path::new("/nonexistent/book.pdf"));
        assert!(matches!(result, Err(RasterError::Open { .. })));
    }
}
