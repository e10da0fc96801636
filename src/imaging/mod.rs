//! Cover imaging: page rasterization and placeholder composition.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Rasterize page** | `pdfium-render`, scaled to the target width |
//! | **Encode cover** | `image` PNG encoder |
//! | **Gradient canvas** | `image::RgbImage::from_fn` |
//! | **Draw title** | `imageproc` + `ab_glyph`, or the built-in `font8x8` face |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for scale, gradient, wrapping and layout (unit testable)
//! - **Backend**: [`Rasterizer`], [`PageSource`] and [`Typeface`] traits
//! - **PDFium backend**: [`PdfiumRasterizer`], the production rasterizer
//! - **Fonts**: font chain resolution ending in a bitmap face
//! - **Placeholder**: [`PlaceholderComposer`], gradient + centered title

pub mod backend;
mod calculations;
pub mod fonts;
pub mod pdfium_backend;
pub mod placeholder;

pub use backend::{PageSource, RasterError, Rasterizer, TextExtent, Typeface};
pub use calculations::{gradient_color, layout_lines, scale_to_width, wrap_words};
pub use fonts::load_typeface;
pub use pdfium_backend::PdfiumRasterizer;
pub use placeholder::{PlaceholderComposer, PlaceholderStyle};
