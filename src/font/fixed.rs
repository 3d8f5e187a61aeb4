// src/font/fixed.rs
//! Deterministic mock font engine for headless rendering tests.
//!
//! Every printable codepoint is a solid box spanning the glyph's bounding
//! box; the space has no ink, and exactly one kerned pair exists. Metrics
//! are fixed, so pixel assertions against it are fully reproducible.

use super::engine::{BitmapBox, FontEngine, GlyphBitmap, HorizontalMetrics, VerticalMetrics};

const ASCENT: f32 = 800.0;
const DESCENT: f32 = -200.0;
const ADVANCE: f32 = 600.0;
const SIDE_BEARING: f32 = 50.0;

/// Mock font: 1000 design units per `ascent - descent`, 600-unit advance,
/// solid rectangular glyphs. `A` followed by `V` kerns by -80 units.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFont;

impl FixedFont {
    pub fn new() -> Self {
        Self
    }

    fn has_ink(codepoint: u32) -> bool {
        codepoint > 0x20
    }
}

impl FontEngine for FixedFont {
    fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        pixel_height / (ASCENT - DESCENT)
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascent: ASCENT,
            descent: DESCENT,
            line_gap: 0.0,
        }
    }

    fn horizontal_metrics(&self, _codepoint: u32) -> HorizontalMetrics {
        HorizontalMetrics {
            advance: ADVANCE,
            left_side_bearing: SIDE_BEARING,
        }
    }

    fn kern_advance(&self, left: u32, right: u32) -> f32 {
        if left == 'A' as u32 && right == 'V' as u32 {
            -80.0
        } else {
            0.0
        }
    }

    fn bitmap_box_subpixel(
        &self,
        codepoint: u32,
        scale_x: f32,
        scale_y: f32,
        shift_x: f32,
        _shift_y: f32,
    ) -> BitmapBox {
        if !Self::has_ink(codepoint) {
            return BitmapBox::default();
        }
        let x0 = (SIDE_BEARING * scale_x + shift_x).floor() as i32;
        let x1 = ((ADVANCE - SIDE_BEARING) * scale_x + shift_x).ceil() as i32;
        let y0 = (-ASCENT * scale_y).floor() as i32;
        BitmapBox { x0, y0, x1, y1: 0 }
    }

    fn rasterize_subpixel(
        &self,
        codepoint: u32,
        scale_x: f32,
        scale_y: f32,
        shift_x: f32,
        shift_y: f32,
    ) -> Option<GlyphBitmap> {
        let bb = self.bitmap_box_subpixel(codepoint, scale_x, scale_y, shift_x, shift_y);
        let width = bb.width().max(0) as usize;
        let height = bb.height().max(0) as usize;
        if width == 0 || height == 0 {
            return None;
        }
        Some(GlyphBitmap {
            width,
            height,
            coverage: vec![255; width * height],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_pixel_height_to_design_units() {
        let font = FixedFont::new();
        assert_eq!(font.scale_for_pixel_height(20.0), 0.02);
        let vm = font.vertical_metrics();
        assert_eq!((vm.ascent - vm.descent) * font.scale_for_pixel_height(20.0), 20.0);
    }

    #[test]
    fn space_has_no_ink_but_still_advances() {
        let font = FixedFont::new();
        let scale = font.scale_for_pixel_height(20.0);
        assert!(font.rasterize_subpixel(0x20, scale, scale, 0.0, 0.0).is_none());
        assert_eq!(font.horizontal_metrics(0x20).advance, ADVANCE);
    }

    #[test]
    fn glyph_bitmap_matches_its_bounding_box() {
        let font = FixedFont::new();
        let scale = font.scale_for_pixel_height(20.0);
        let bb = font.bitmap_box_subpixel('A' as u32, scale, scale, 0.0, 0.0);
        let bitmap = font
            .rasterize_subpixel('A' as u32, scale, scale, 0.0, 0.0)
            .unwrap();
        assert_eq!(bitmap.width, bb.width() as usize);
        assert_eq!(bitmap.height, bb.height() as usize);
        assert!(bitmap.coverage.iter().all(|&a| a == 255));
    }

    #[test]
    fn only_the_av_pair_kerns() {
        let font = FixedFont::new();
        assert_eq!(font.kern_advance('A' as u32, 'V' as u32), -80.0);
        assert_eq!(font.kern_advance('V' as u32, 'A' as u32), 0.0);
        assert_eq!(font.kern_advance('A' as u32, 'B' as u32), 0.0);
    }
}
