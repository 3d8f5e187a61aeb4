// src/surface/shapes.rs
//! Line, rectangle, and rounded-rectangle rasterization.
//!
//! All primitives write through the clipping pixel accessors in the parent
//! module, so partially or fully off-screen geometry is safe. Stroke and
//! fill primitives treat non-positive dimensions as empty.

use super::Surface;
use crate::color::Pixel;

/// Clamp a corner radius so the two corner arcs on an edge never overlap.
fn clamp_radius(radius: i32, width: i32, height: i32) -> i32 {
    radius.min(width / 2).min(height / 2)
}

impl<'a, P: Pixel> Surface<'a, P> {
    /// Draw a line from `(x1, y1)` to `(x2, y2)`, both endpoints inclusive.
    ///
    /// Integer Bresenham: each step moves one pixel along the axis whose
    /// accumulated error is smaller.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: P) {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.set_pixel(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stroke a rectangle outline one pixel wide.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: P) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.draw_line(x, y, x + width - 1, y, color);
        self.draw_line(x, y + height - 1, x + width - 1, y + height - 1, color);
        self.draw_line(x, y, x, y + height - 1, color);
        self.draw_line(x + width - 1, y, x + width - 1, y + height - 1, color);
    }

    /// Stroke a rounded rectangle outline.
    ///
    /// The four straight edges are shortened by `radius` on each end; each
    /// corner arc is found by scanning a `radius x radius` quadrant and
    /// keeping the in-disc points whose right or lower neighbor falls
    /// outside, mirrored to the other three corners. A coarse circle-edge
    /// test, not a single-pixel-wide arc. An oversized radius is silently
    /// clamped.
    pub fn draw_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        color: P,
    ) {
        if width <= 0 || height <= 0 {
            return;
        }
        let radius = clamp_radius(radius, width, height);

        self.draw_line(x + radius, y, x + width - radius, y, color);
        self.draw_line(
            x + radius,
            y + height - 1,
            x + width - radius,
            y + height - 1,
            color,
        );
        self.draw_line(x, y + radius, x, y + height - radius, color);
        self.draw_line(
            x + width - 1,
            y + radius,
            x + width - 1,
            y + height - radius,
            color,
        );

        // The +radius slack widens the disc slightly so the arc meets the
        // straight edges without a gap.
        let bound = radius * radius + radius;
        for i in 0..=radius {
            for j in 0..=radius {
                if i * i + j * j <= bound
                    && ((i + 1) * (i + 1) + j * j > bound || i * i + (j + 1) * (j + 1) > bound)
                {
                    self.set_pixel(x + radius - i, y + radius - j, color);
                    self.set_pixel(x + width - radius + i, y + radius - j, color);
                    self.set_pixel(x + radius - i, y + height - radius + j, color);
                    self.set_pixel(x + width - radius + i, y + height - radius + j, color);
                }
            }
        }
    }

    /// Fill a rounded rectangle.
    ///
    /// The body is the union of two overlapping rectangles (full width
    /// inset vertically by `radius`, full height inset horizontally); each
    /// corner is a quarter-disc scan. Every in-disc step writes a small
    /// cluster of adjacent pixels so the disc meets both rectangles without
    /// seam gaps. An oversized radius is silently clamped.
    pub fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        color: P,
    ) {
        if width <= 0 || height <= 0 {
            return;
        }
        let radius = clamp_radius(radius, width, height);

        self.fill_rect(x, y + radius, width, height - 2 * radius, color);
        self.fill_rect(x + radius, y, width - 2 * radius, height, color);

        let r2 = radius * radius;
        for i in 0..radius {
            for j in 0..radius {
                if i * i + j * j <= r2 {
                    self.set_pixel(x + radius - i - 1, y + radius - j - 1, color);
                    self.set_pixel(x + radius - i, y + radius - j - 1, color);
                    self.set_pixel(x + radius - i - 1, y + radius - j, color);

                    self.set_pixel(x + width - radius + i, y + radius - j - 1, color);
                    self.set_pixel(x + width - radius + i - 1, y + radius - j - 1, color);
                    self.set_pixel(x + width - radius + i, y + radius - j, color);

                    self.set_pixel(x + radius - i - 1, y + height - radius + j, color);
                    self.set_pixel(x + radius - i, y + height - radius + j, color);
                    self.set_pixel(x + radius - i - 1, y + height - radius + j - 1, color);

                    self.set_pixel(x + width - radius + i, y + height - radius + j, color);
                    self.set_pixel(x + width - radius + i - 1, y + height - radius + j, color);
                    self.set_pixel(x + width - radius + i, y + height - radius + j - 1, color);
                }
            }
        }
    }
}
