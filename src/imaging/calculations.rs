//! Pure calculation functions for cover geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::TextExtent;

/// Uniform scale factor that makes a page `page_width` units wide render at
/// `target_width` pixels.
///
/// A degenerate (zero, negative or NaN) page width renders at scale 1.
///
/// ```
/// # use shelfgen::imaging::scale_to_width;
/// // US Letter (612pt) → 600px
/// assert!((scale_to_width(612.0, 600) - 0.98039).abs() < 1e-4);
/// assert_eq!(scale_to_width(0.0, 600), 1.0);
/// ```
pub fn scale_to_width(page_width: f32, target_width: u32) -> f32 {
    if page_width > 0.0 {
        target_width as f32 / page_width
    } else {
        1.0
    }
}

/// Color of row `y` in a vertical gradient of `height` rows.
///
/// Each channel moves linearly from `top` at row 0 toward `bottom`, reaching
/// it just past the last row. Fractions are truncated.
pub fn gradient_color(top: [u8; 3], bottom: [u8; 3], y: u32, height: u32) -> [u8; 3] {
    let ratio = if height == 0 {
        0.0
    } else {
        y as f64 / height as f64
    };
    let channel = |i: usize| {
        let from = top[i] as f64;
        let to = bottom[i] as f64;
        (from + (to - from) * ratio).clamp(0.0, 255.0) as u8
    };
    [channel(0), channel(1), channel(2)]
}

/// Greedy word wrap.
///
/// Words are appended to the current line while the measured width of
/// `current + " " + word` stays within `max_width` (equal counts as fitting).
/// A word that does not fit starts a new line; a word wider than `max_width`
/// on its own still gets its own line, unsplit.
pub fn wrap_words(text: &str, max_width: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Top-left position of each line in a vertically and horizontally centered
/// block of text.
///
/// The block height is the sum of the line heights; lines are stacked with no
/// extra spacing. Each line is centered on its own width. Offsets use floor
/// division and go negative when the text is larger than the canvas.
pub fn layout_lines(extents: &[TextExtent], canvas: (u32, u32)) -> Vec<(i32, i32)> {
    let (canvas_w, canvas_h) = (canvas.0 as i64, canvas.1 as i64);
    let total_height: i64 = extents.iter().map(|e| e.height as i64).sum();

    let mut y = (canvas_h - total_height).div_euclid(2);
    extents
        .iter()
        .map(|extent| {
            let x = (canvas_w - extent.width as i64).div_euclid(2);
            let position = (x as i32, y as i32);
            y += extent.height as i64;
            position
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_per_char(s: &str) -> u32 {
        s.chars().count() as u32 * 10
    }

    fn extent(width: u32, height: u32) -> TextExtent {
        TextExtent { width, height }
    }

    // =========================================================================
    // scale_to_width tests
    // =========================================================================

    #[test]
    fn scale_shrinks_wide_pages() {
        assert_eq!(scale_to_width(1200.0, 600), 0.5);
    }

    #[test]
    fn scale_enlarges_narrow_pages() {
        assert_eq!(scale_to_width(300.0, 600), 2.0);
    }

    #[test]
    fn scale_defaults_to_one_for_degenerate_width() {
        assert_eq!(scale_to_width(0.0, 600), 1.0);
        assert_eq!(scale_to_width(-5.0, 600), 1.0);
        assert_eq!(scale_to_width(f32::NAN, 600), 1.0);
    }

    // =========================================================================
    // gradient_color tests
    // =========================================================================

    #[test]
    fn gradient_starts_at_top_color() {
        assert_eq!(gradient_color([20, 20, 40], [60, 40, 120], 0, 800), [20, 20, 40]);
    }

    #[test]
    fn gradient_midpoint() {
        assert_eq!(gradient_color([20, 20, 40], [60, 40, 120], 400, 800), [40, 30, 80]);
    }

    #[test]
    fn gradient_last_row_approaches_bottom() {
        // ratio = 799/800: 20 + 40*0.99875 = 59.95 → 59
        assert_eq!(gradient_color([20, 20, 40], [60, 40, 120], 799, 800), [59, 39, 119]);
    }

    #[test]
    fn gradient_can_darken() {
        assert_eq!(gradient_color([200, 200, 200], [0, 0, 0], 50, 100), [100, 100, 100]);
    }

    #[test]
    fn gradient_zero_height_is_top() {
        assert_eq!(gradient_color([1, 2, 3], [9, 9, 9], 0, 0), [1, 2, 3]);
    }

    // =========================================================================
    // wrap_words tests
    // =========================================================================

    #[test]
    fn short_title_fits_on_one_line() {
        assert_eq!(wrap_words("Devlet Ve Iktidar", 480, ten_per_char), vec!["Devlet Ve Iktidar"]);
    }

    #[test]
    fn wraps_when_next_word_overflows() {
        // "aaaa bbbb" = 90 > 80
        assert_eq!(wrap_words("aaaa bbbb cc", 80, ten_per_char), vec!["aaaa", "bbbb cc"]);
    }

    #[test]
    fn exact_boundary_is_included() {
        // "aaa bbbb" = 80 == 80
        assert_eq!(wrap_words("aaa bbbb c", 80, ten_per_char), vec!["aaa bbbb", "c"]);
    }

    #[test]
    fn long_word_gets_own_line_unsplit() {
        assert_eq!(
            wrap_words("a Uluslararasilastirilamayanlardan b", 100, ten_per_char),
            vec!["a", "Uluslararasilastirilamayanlardan", "b"]
        );
    }

    #[test]
    fn long_first_word_does_not_emit_empty_line() {
        assert_eq!(
            wrap_words("Cokuzunbirkelime ve", 100, ten_per_char),
            vec!["Cokuzunbirkelime", "ve"]
        );
    }

    #[test]
    fn extra_whitespace_ignored() {
        assert_eq!(wrap_words("  a   b  ", 100, ten_per_char), vec!["a b"]);
    }

    #[test]
    fn empty_title_has_no_lines() {
        assert!(wrap_words("", 100, ten_per_char).is_empty());
        assert!(wrap_words("   ", 100, ten_per_char).is_empty());
    }

    #[test]
    fn no_multi_word_line_exceeds_limit() {
        let title = "Modern Turk Siyasal Dusuncesi Uzerine Denemeler Ve Elestiriler Cilt Iki";
        for line in wrap_words(title, 120, ten_per_char) {
            if line.contains(' ') {
                assert!(ten_per_char(&line) <= 120, "line too wide: {line:?}");
            }
        }
    }

    // =========================================================================
    // layout_lines tests
    // =========================================================================

    #[test]
    fn single_line_centered() {
        assert_eq!(layout_lines(&[extent(200, 40)], (600, 800)), vec![(200, 380)]);
    }

    #[test]
    fn lines_stack_and_center_independently() {
        let positions = layout_lines(&[extent(300, 40), extent(101, 30)], (600, 800));
        // block height 70 → top at 365; second line x = floor(499/2) = 249
        assert_eq!(positions, vec![(150, 365), (249, 405)]);
    }

    #[test]
    fn oversized_text_goes_negative_with_floor() {
        assert_eq!(layout_lines(&[extent(601, 801)], (600, 800)), vec![(-1, -1)]);
    }

    #[test]
    fn no_lines_no_positions() {
        assert!(layout_lines(&[], (600, 800)).is_empty());
    }
}
