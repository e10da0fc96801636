//! Placeholder covers: a vertical gradient with the title centered on it.
//!
//! Used whenever a document's first page cannot be rendered. The title is
//! wrapped greedily to `wrap_ratio` of the canvas width, then the block of
//! lines is centered vertically and each line horizontally.

use super::backend::{RasterError, Typeface};
use super::calculations::{gradient_color, layout_lines, wrap_words};
use crate::config::CoversConfig;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Canvas size and colors of a placeholder cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    pub wrap_ratio: f32,
    pub gradient_top: [u8; 3],
    pub gradient_bottom: [u8; 3],
    pub text_color: [u8; 3],
}

impl PlaceholderStyle {
    pub fn from_config(config: &CoversConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            wrap_ratio: config.wrap_ratio,
            gradient_top: config.gradient_top,
            gradient_bottom: config.gradient_bottom,
            text_color: config.text_color,
        }
    }

    /// Widest a line may be before it wraps.
    pub fn max_line_width(&self) -> u32 {
        (self.width as f32 * self.wrap_ratio) as u32
    }
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self::from_config(&CoversConfig::default())
    }
}

/// Draws placeholder covers with one typeface.
pub struct PlaceholderComposer {
    style: PlaceholderStyle,
    typeface: Box<dyn Typeface>,
}

impl PlaceholderComposer {
    pub fn new(style: PlaceholderStyle, typeface: Box<dyn Typeface>) -> Self {
        Self { style, typeface }
    }

    /// Wrapped lines for `title` under this composer's font and width limit.
    pub fn wrap(&self, title: &str) -> Vec<String> {
        wrap_words(title, self.style.max_line_width(), |s| {
            self.typeface.measure(s).width
        })
    }

    /// Render the placeholder in memory.
    pub fn render(&self, title: &str) -> RgbImage {
        let PlaceholderStyle {
            width,
            height,
            gradient_top,
            gradient_bottom,
            text_color,
            ..
        } = self.style;

        let mut canvas = RgbImage::from_fn(width, height, |_, y| {
            Rgb(gradient_color(gradient_top, gradient_bottom, y, height))
        });

        let lines = self.wrap(title);
        let extents: Vec<_> = lines.iter().map(|l| self.typeface.measure(l)).collect();
        let positions = layout_lines(&extents, (width, height));

        for (line, (x, y)) in lines.iter().zip(positions) {
            self.typeface.draw(&mut canvas, x, y, Rgb(text_color), line);
        }
        canvas
    }

    /// Render and save as PNG at `target`, creating parent directories.
    pub fn compose(&self, title: &str, target: &Path) -> Result<(), RasterError> {
        let canvas = self.render(title);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        canvas.save_with_format(target, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::FixedWidthFace;

    fn composer() -> PlaceholderComposer {
        PlaceholderComposer::new(
            PlaceholderStyle::default(),
            Box::new(FixedWidthFace {
                advance: 20,
                height: 40,
            }),
        )
    }

    #[test]
    fn max_line_width_is_eighty_percent() {
        assert_eq!(PlaceholderStyle::default().max_line_width(), 480);
    }

    #[test]
    fn render_has_canvas_size() {
        let img = composer().render("Devlet Ve Iktidar");
        assert_eq!(img.dimensions(), (600, 800));
    }

    #[test]
    fn background_is_vertical_gradient() {
        let img = composer().render("");
        assert_eq!(img.get_pixel(0, 0).0, [20, 20, 40]);
        assert_eq!(img.get_pixel(599, 0).0, [20, 20, 40]);
        assert_eq!(img.get_pixel(300, 400).0, [40, 30, 80]);
        assert_eq!(img.get_pixel(0, 799).0, [59, 39, 119]);
    }

    #[test]
    fn title_drawn_centered_in_white() {
        // "Kitap" = 5 chars * 20 = 100 wide, 40 tall → box (250..350, 380..420)
        let img = composer().render("Kitap");
        assert_eq!(img.get_pixel(250, 380).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(349, 419).0, [255, 255, 255]);
        assert_ne!(img.get_pixel(249, 380).0, [255, 255, 255]);
        assert_ne!(img.get_pixel(350, 380).0, [255, 255, 255]);
        assert_ne!(img.get_pixel(300, 379).0, [255, 255, 255]);
        assert_ne!(img.get_pixel(300, 420).0, [255, 255, 255]);
    }

    #[test]
    fn wrapped_lines_respect_limit() {
        let c = composer();
        // 480px / 20px per char = 24 chars per line
        let lines = c.wrap("Modern Turk Siyasal Dusuncesi Uzerine Denemeler");
        assert_eq!(lines, vec!["Modern Turk Siyasal", "Dusuncesi Uzerine", "Denemeler"]);
        for line in &lines {
            assert!(line.chars().count() * 20 <= 480);
        }
    }

    #[test]
    fn oversized_word_kept_whole() {
        let word = "A".repeat(30);
        let lines = composer().wrap(&format!("Bir {word} Iki"));
        assert_eq!(lines, vec!["Bir".to_string(), word, "Iki".to_string()]);
    }

    #[test]
    fn compose_writes_png_and_creates_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let target = tmp.path().join("covers/Felsefe/Kitap.png");
        composer().compose("Kitap", &target).unwrap();

        let written = image::open(&target).unwrap();
        assert_eq!((written.width(), written.height()), (600, 800));
    }

    #[test]
    fn custom_style_changes_canvas() {
        let style = PlaceholderStyle {
            width: 300,
            height: 200,
            gradient_top: [0, 0, 0],
            gradient_bottom: [0, 0, 0],
            ..PlaceholderStyle::default()
        };
        let c = PlaceholderComposer::new(
            style,
            Box::new(FixedWidthFace {
                advance: 10,
                height: 10,
            }),
        );
        let img = c.render("x");
        assert_eq!(img.dimensions(), (300, 200));
        assert_eq!(img.get_pixel(0, 199).0, [0, 0, 0]);
    }
}
