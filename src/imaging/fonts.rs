//! Font selection for placeholder covers.
//!
//! Resolution order, first success wins:
//!
//! 1. the preferred font path (`covers.font`)
//! 2. each of `covers.fallback_fonts`, in order
//! 3. [`BitmapFace`], an 8×8 bitmap face compiled into the binary
//!
//! A font that is missing or does not parse is skipped with a debug log; the
//! chain never fails.

use super::backend::{TextExtent, Typeface};
use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// A TrueType/OpenType face at a fixed pixel size.
pub struct TrueTypeFace {
    font: FontVec,
    scale: PxScale,
    source: PathBuf,
}

impl TrueTypeFace {
    pub fn load(path: &Path, size: f32) -> Result<Self, String> {
        let data = std::fs::read(path).map_err(|e| e.to_string())?;
        let font = FontVec::try_from_vec(data).map_err(|e| e.to_string())?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
            source: path.to_path_buf(),
        })
    }
}

impl Typeface for TrueTypeFace {
    fn measure(&self, text: &str) -> TextExtent {
        let (width, height) = imageproc::drawing::text_size(self.scale, &self.font, text);
        TextExtent { width, height }
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        imageproc::drawing::draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }

    fn describe(&self) -> String {
        self.source.display().to_string()
    }
}

/// Built-in 8×8 bitmap face, scaled by an integer factor.
///
/// Covers Basic Latin and Latin-1. Turkish letters outside Latin-1 are drawn
/// with their ASCII base letter; anything else becomes `?`.
pub struct BitmapFace {
    scale: u32,
}

const GLYPH_SIZE: u32 = 8;

impl BitmapFace {
    /// A face whose glyph cells are as close to `size` pixels as an integer
    /// multiple of 8 allows.
    pub fn with_size(size: f32) -> Self {
        let scale = (size / GLYPH_SIZE as f32).round().max(1.0) as u32;
        Self { scale }
    }

    fn cell(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get(ascii_fold(c)))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8])
    }
}

/// ASCII base letter for Latin Extended-A letters used in Turkish.
fn ascii_fold(c: char) -> char {
    match c {
        'ğ' => 'g',
        'Ğ' => 'G',
        'ş' => 's',
        'Ş' => 'S',
        'ı' => 'i',
        'İ' => 'I',
        other => other,
    }
}

impl Typeface for BitmapFace {
    fn measure(&self, text: &str) -> TextExtent {
        let chars = text.chars().count() as u32;
        TextExtent {
            width: chars * self.cell(),
            height: if chars == 0 { 0 } else { self.cell() },
        }
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);
        let scale = self.scale as i64;
        for (i, c) in text.chars().enumerate() {
            let origin_x = x as i64 + i as i64 * self.cell() as i64;
            for (row, bits) in Self::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_SIZE as i64 {
                    // bit 0 is the leftmost pixel
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = origin_x + col * scale + dx;
                            let py = y as i64 + row as i64 * scale + dy;
                            if (0..canvas_w).contains(&px) && (0..canvas_h).contains(&py) {
                                canvas.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
    }

    fn describe(&self) -> String {
        format!("built-in bitmap face ({}px)", self.cell())
    }
}

/// Walk the font chain and return the first face that loads.
pub fn load_typeface(
    preferred: Option<&Path>,
    fallbacks: &[PathBuf],
    size: f32,
) -> Box<dyn Typeface> {
    for path in preferred.into_iter().chain(fallbacks.iter().map(PathBuf::as_path)) {
        match TrueTypeFace::load(path, size) {
            Ok(face) => {
                tracing::debug!("using font {}", face.describe());
                return Box::new(face);
            }
            Err(e) => tracing::debug!("font {} unavailable: {e}", path.display()),
        }
    }
    let face = BitmapFace::with_size(size);
    tracing::debug!("no font file loaded, using {}", face.describe());
    Box::new(face)
}
