// src/framebuffer.rs
//! Memory-mapped framebuffer device backing for a [`Surface`].
//!
//! Opens a framebuffer device node read/write and maps
//! `width * height * 2` bytes of its pixel memory. The mapping stays valid
//! for the lifetime of the [`Framebuffer`] and is returned to the OS on
//! drop; the rendering engine only ever borrows it.

use crate::color::Rgb565;
use log::debug;
use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::mem;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to acquire the frame surface. Fatal: no partial engine setup
/// proceeds past it.
#[derive(Debug, Error)]
pub enum FramebufferError {
    #[error("failed to open framebuffer device {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to map {len} bytes of framebuffer memory: {source}")]
    Map { len: usize, source: std::io::Error },
}

/// A mapped framebuffer device holding `width * height` RGB565 pixels.
#[derive(Debug)]
pub struct Framebuffer {
    map: MmapMut,
    width: usize,
    height: usize,
}

impl Framebuffer {
    /// Open and map a framebuffer device of known resolution.
    pub fn open(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
    ) -> Result<Self, FramebufferError> {
        let path = path.as_ref();
        let len = width * height * mem::size_of::<Rgb565>();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| FramebufferError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        // SAFETY: the mapping is private to this struct and the file stays
        // open for as long as the mapping lives.
        let map = unsafe {
            MmapOptions::new()
                .len(len)
                .map_mut(&file)
                .map_err(|source| FramebufferError::Map { len, source })?
        };

        debug!(
            "mapped framebuffer {} as {}x{} ({} bytes)",
            path.display(),
            width,
            height,
            len
        );
        Ok(Self { map, width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The mapped pixel memory. Pass this to [`Surface::new`] to draw.
    ///
    /// [`Surface::new`]: crate::surface::Surface::new
    pub fn pixels(&mut self) -> &mut [Rgb565] {
        let len = self.width * self.height;
        // SAFETY: the mapping is page-aligned and at least `len` pixels
        // long by construction; Rgb565 is a transparent u16.
        unsafe { std::slice::from_raw_parts_mut(self.map.as_mut_ptr() as *mut Rgb565, len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;
    use crate::surface::Surface;
    use std::fs::File;

    fn scratch_file(name: &str, len: u64) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fbtext-{}-{}", std::process::id(), name));
        let file = File::create(&path).unwrap();
        file.set_len(len).unwrap();
        path
    }

    #[test]
    fn missing_device_is_an_open_error() {
        let err = Framebuffer::open("/nonexistent/fb9", 8, 8).unwrap_err();
        assert!(matches!(err, FramebufferError::Open { .. }));
    }

    #[test]
    fn mapped_file_round_trips_pixels() {
        let path = scratch_file("roundtrip", 8 * 8 * 2);
        let mut fb = Framebuffer::open(&path, 8, 8).unwrap();
        assert_eq!(fb.width(), 8);
        assert_eq!(fb.pixels().len(), 64);

        let mut surface = Surface::new(8, 8, fb.pixels()).unwrap();
        surface.clear(Rgb565::BLACK);
        surface.set_pixel(3, 4, Rgb565::pack(255, 0, 0));
        assert_eq!(surface.get_pixel(3, 4), Some(Rgb565::RED));

        std::fs::remove_file(&path).unwrap();
    }
}
