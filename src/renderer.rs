// src/renderer.rs
//! Text layout, glyph compositing, and boxed text rendering.
//!
//! [`TextRenderer`] owns the font engine and is passed a [`Surface`] per
//! call; there is no shared mutable state between calls, and the font size
//! is an explicit argument everywhere. Layout is single-line: scalars below
//! U+0020 are skipped without moving the pen, so multi-line output is
//! produced by issuing one render call per line at caller-chosen offsets.

use crate::color::Pixel;
use crate::font::FontEngine;
use crate::surface::Surface;
use crate::utf8;
use log::trace;

/// Background style for [`TextRenderer::render_with_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    Rectangle,
    Rounded,
}

/// Background box description for a text run.
///
/// `width`/`height` of zero request auto-sizing: if either is zero, both
/// are recomputed from the measured text extent plus padding.
#[derive(Debug, Clone, Copy)]
pub struct BoxSpec<P: Pixel> {
    pub color: P,
    pub padding: i32,
    pub style: BoxStyle,
    pub radius: i32,
    pub width: i32,
    pub height: i32,
}

/// Text rendering context over a font engine.
pub struct TextRenderer<F: FontEngine> {
    font: F,
}

impl<F: FontEngine> TextRenderer<F> {
    pub fn new(font: F) -> Self {
        Self { font }
    }

    /// The underlying font engine.
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Width in pixels of `text` at `font_size`, including kerning between
    /// adjacent scalars. The result is the ceiling of the accumulated
    /// advances; every scalar counts, including control characters.
    pub fn measure_width(&self, text: &[u8], font_size: f32) -> i32 {
        let scale = self.font.scale_for_pixel_height(font_size);
        let mut width = 0f32;
        let mut scalars = utf8::scalars(text).peekable();
        while let Some(cp) = scalars.next() {
            width += self.font.horizontal_metrics(cp).advance * scale;
            if let Some(&next) = scalars.peek() {
                width += scale * self.font.kern_advance(cp, next);
            }
        }
        width.ceil() as i32
    }

    /// Line height in pixels at `font_size`: `(ascent - descent) * scale`,
    /// with no line-gap term. Independent of any text.
    pub fn measure_height(&self, font_size: f32) -> i32 {
        let scale = self.font.scale_for_pixel_height(font_size);
        let vm = self.font.vertical_metrics();
        ((vm.ascent - vm.descent) * scale) as i32
    }

    /// Render `text` with its pen origin at `(x, y)`; the baseline sits
    /// `ascent * scale` below `y`.
    ///
    /// Glyphs are rasterized at the fractional part of the pen position so
    /// edges land with subpixel accuracy, then composited through
    /// [`Pixel::blend`]; pixels falling outside the surface are dropped. A
    /// glyph that yields no bitmap renders nothing but still advances the
    /// pen.
    pub fn render<P: Pixel>(
        &self,
        surface: &mut Surface<'_, P>,
        text: &[u8],
        x: i32,
        y: i32,
        color: P,
        font_size: f32,
    ) {
        let scale = self.font.scale_for_pixel_height(font_size);
        let baseline = (self.font.vertical_metrics().ascent * scale) as i32;
        let mut xpos = x as f32;
        let mut scalars = utf8::scalars(text).peekable();

        while let Some(cp) = scalars.next() {
            if cp < 0x20 {
                trace!("skipping control scalar U+{cp:04X}");
                continue;
            }

            let shift = xpos - xpos.floor();
            let bb = self.font.bitmap_box_subpixel(cp, scale, scale, shift, 0.0);
            if let Some(bitmap) = self.font.rasterize_subpixel(cp, scale, scale, shift, 0.0) {
                for j in 0..bitmap.height {
                    for i in 0..bitmap.width {
                        let alpha = bitmap.coverage[j * bitmap.width + i];
                        if alpha == 0 {
                            continue;
                        }
                        let sx = xpos as i32 + bb.x0 + i as i32;
                        let sy = baseline + bb.y0 + j as i32 + y;
                        if let Some(bg) = surface.get_pixel(sx, sy) {
                            surface.set_pixel(sx, sy, P::blend(bg, color, alpha));
                        }
                    }
                }
            }

            xpos += self.font.horizontal_metrics(cp).advance * scale;
            if let Some(&next) = scalars.peek() {
                xpos += scale * self.font.kern_advance(cp, next);
            }
        }
    }

    /// Render `text` on top of a background box.
    ///
    /// The box is drawn at `(x - padding, y - padding)`. If either spec
    /// dimension is zero, both are derived from the measured text extent
    /// plus `2 * padding` (all-or-nothing). The text itself is rendered at
    /// `(x, y)` unclipped — the box is purely a background.
    pub fn render_with_box<P: Pixel>(
        &self,
        surface: &mut Surface<'_, P>,
        text: &[u8],
        x: i32,
        y: i32,
        text_color: P,
        spec: &BoxSpec<P>,
        font_size: f32,
    ) {
        let (mut box_width, mut box_height) = (spec.width, spec.height);
        if box_width == 0 || box_height == 0 {
            box_width = self.measure_width(text, font_size) + 2 * spec.padding;
            box_height = self.measure_height(font_size) + 2 * spec.padding;
        }

        let (bx, by) = (x - spec.padding, y - spec.padding);
        match spec.style {
            BoxStyle::Rectangle => surface.fill_rect(bx, by, box_width, box_height, spec.color),
            BoxStyle::Rounded => {
                surface.fill_rounded_rect(bx, by, box_width, box_height, spec.radius, spec.color)
            }
        }

        self.render(surface, text, x, y, text_color, font_size);
    }
}
