// src/font/truetype.rs
//! TrueType/OpenType font engine backed by `rusttype`.
//!
//! `rusttype`'s `Scale` is defined as the pixel distance between the
//! ascent and descent lines, which is the same model as this crate's
//! `scale_for_pixel_height`: a scale factor `f` becomes
//! `Scale::uniform(f * (ascent - descent))`. Design-unit metrics are read
//! at unit scale.

use super::engine::{BitmapBox, FontEngine, GlyphBitmap, HorizontalMetrics, VerticalMetrics};
use log::debug;
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("font data is not a supported TrueType/OpenType font")]
    Parse,
}

/// A font loaded into memory, exposed through [`FontEngine`].
#[derive(Debug)]
pub struct TrueTypeFont {
    font: Font<'static>,
}

impl TrueTypeFont {
    /// Load a font file into memory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        debug!("loaded font file {} ({} bytes)", path.display(), data.len());
        Self::from_vec(data)
    }

    /// Take ownership of raw font data.
    pub fn from_vec(data: Vec<u8>) -> Result<Self, FontError> {
        let font = Font::try_from_vec(data).ok_or(FontError::Parse)?;
        Ok(Self { font })
    }

    /// Design-unit span between ascent and descent.
    fn unit_height(&self) -> f32 {
        let vm = self.font.v_metrics_unscaled();
        vm.ascent - vm.descent
    }

    /// rusttype scale corresponding to the given scale factors.
    fn scale(&self, factor_x: f32, factor_y: f32) -> Scale {
        let unit = self.unit_height();
        Scale {
            x: factor_x * unit,
            y: factor_y * unit,
        }
    }

    fn to_char(codepoint: u32) -> char {
        char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl FontEngine for TrueTypeFont {
    fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        pixel_height / self.unit_height()
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        let vm = self.font.v_metrics_unscaled();
        VerticalMetrics {
            ascent: vm.ascent,
            descent: vm.descent,
            line_gap: vm.line_gap,
        }
    }

    fn horizontal_metrics(&self, codepoint: u32) -> HorizontalMetrics {
        let glyph = self
            .font
            .glyph(Self::to_char(codepoint))
            .scaled(self.scale(1.0, 1.0));
        let hm = glyph.h_metrics();
        HorizontalMetrics {
            advance: hm.advance_width,
            left_side_bearing: hm.left_side_bearing,
        }
    }

    fn kern_advance(&self, left: u32, right: u32) -> f32 {
        self.font.pair_kerning(
            self.scale(1.0, 1.0),
            Self::to_char(left),
            Self::to_char(right),
        )
    }

    fn bitmap_box_subpixel(
        &self,
        codepoint: u32,
        scale_x: f32,
        scale_y: f32,
        shift_x: f32,
        shift_y: f32,
    ) -> BitmapBox {
        let glyph = self
            .font
            .glyph(Self::to_char(codepoint))
            .scaled(self.scale(scale_x, scale_y))
            .positioned(point(shift_x, shift_y));
        match glyph.pixel_bounding_box() {
            Some(bb) => BitmapBox {
                x0: bb.min.x,
                y0: bb.min.y,
                x1: bb.max.x,
                y1: bb.max.y,
            },
            None => BitmapBox::default(),
        }
    }

    fn rasterize_subpixel(
        &self,
        codepoint: u32,
        scale_x: f32,
        scale_y: f32,
        shift_x: f32,
        shift_y: f32,
    ) -> Option<GlyphBitmap> {
        let glyph = self
            .font
            .glyph(Self::to_char(codepoint))
            .scaled(self.scale(scale_x, scale_y))
            .positioned(point(shift_x, shift_y));
        let bb = glyph.pixel_bounding_box()?;
        let width = (bb.max.x - bb.min.x).max(0) as usize;
        let height = (bb.max.y - bb.min.y).max(0) as usize;
        if width == 0 || height == 0 {
            return None;
        }
        let mut coverage = vec![0u8; width * height];
        glyph.draw(|gx, gy, v| {
            coverage[gy as usize * width + gx as usize] = (v * 255.0) as u8;
        });
        Some(GlyphBitmap {
            width,
            height,
            coverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_data_that_is_not_a_font() {
        let err = TrueTypeFont::from_vec(vec![0u8; 64]).unwrap_err();
        assert!(matches!(err, FontError::Parse));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = TrueTypeFont::from_file("/nonexistent/font.ttf").unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
