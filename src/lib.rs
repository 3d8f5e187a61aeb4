// src/lib.rs
//! fbtext: UTF-8 text and vector-shape rendering into raw packed-pixel
//! buffers.
//!
//! The engine draws directly into an externally owned pixel region (an
//! LCD framebuffer in the reference configuration): Bresenham lines,
//! plain and rounded rectangles, and kerned, subpixel-positioned text
//! composited from font-engine coverage bitmaps. All drawing clips
//! silently at the surface boundary.
//!
//! ```
//! use fbtext::{BoxSpec, BoxStyle, FixedFont, Rgb565, Surface, TextRenderer};
//!
//! let mut backing = vec![Rgb565::BLACK; 120 * 60];
//! let mut surface = Surface::new(120, 60, &mut backing).unwrap();
//! let renderer = TextRenderer::new(FixedFont::new());
//!
//! surface.clear(Rgb565::BLACK);
//! let spec = BoxSpec {
//!     color: Rgb565::BLUE,
//!     padding: 4,
//!     style: BoxStyle::Rounded,
//!     radius: 6,
//!     width: 0,
//!     height: 0,
//! };
//! renderer.render_with_box(&mut surface, b"hi", 20, 20, Rgb565::WHITE, &spec, 20.0);
//! ```

pub mod color;
pub mod config;
pub mod font;
pub mod framebuffer;
pub mod renderer;
pub mod surface;
pub mod utf8;

pub use color::{Pixel, Rgb565};
pub use config::Config;
pub use font::{FixedFont, FontEngine, FontError, TrueTypeFont};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use renderer::{BoxSpec, BoxStyle, TextRenderer};
pub use surface::{Surface, SurfaceError};
