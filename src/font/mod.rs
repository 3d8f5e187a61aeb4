// src/font/mod.rs
//! Font loading and the glyph rasterization capability.
//!
//! [`FontEngine`] is the seam between the text renderer and whichever font
//! stack produces metrics and coverage bitmaps: [`TrueTypeFont`] wraps a
//! real TrueType/OpenType font, [`FixedFont`] is the deterministic engine
//! used for headless tests.

pub mod engine;
pub mod fixed;
pub mod truetype;

pub use engine::{BitmapBox, FontEngine, GlyphBitmap, HorizontalMetrics, VerticalMetrics};
pub use fixed::FixedFont;
pub use truetype::{FontError, TrueTypeFont};
