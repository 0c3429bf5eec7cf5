//! Mutable RGBA pixel storage with dirty-region tracking.

use crate::geometry::{PixelRect, Rgba};
use thiserror::Error;

pub type BufferResult<T> = std::result::Result<T, BufferError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel data holds {actual} pixels, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("pixel coordinate ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// An owned W x H grid of RGBA pixels. Dimensions are fixed at creation;
/// mutation happens through [`PixelBuffer::set_pixel`] or a scoped
/// [`PixelEdit`] guard, and accumulated dirty rectangles are handed to the
/// display layer via [`PixelBuffer::take_dirty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    dirty: Option<PixelRect>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> BufferResult<Self> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            dirty: None,
        })
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> BufferResult<Self> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let pixels = vec![color; width as usize * height as usize];
        Self::new(width, height, pixels)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_some()
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> BufferError {
        BufferError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> BufferResult<Rgba> {
        let index = self.index_of(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.pixels[index])
    }

    /// Engines pre-check with [`PixelBuffer::contains`] and skip instead of
    /// relying on this error.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) -> BufferResult<()> {
        let index = self.index_of(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Folds `rect` into the accumulated region needing redraw.
    pub fn mark_dirty(&mut self, rect: PixelRect) {
        self.dirty = Some(match self.dirty {
            Some(current) => current.union(rect),
            None => rect,
        });
    }

    /// Hands the accumulated dirty region to the display layer and resets it.
    pub fn take_dirty(&mut self) -> Option<PixelRect> {
        self.dirty.take()
    }

    /// Scoped exclusive access around a mutate + mark-dirty sequence. The
    /// pending dirty rectangle is folded into the buffer when the guard is
    /// released, on every exit path.
    pub fn edit(&mut self) -> PixelEdit<'_> {
        PixelEdit {
            buffer: self,
            pending: None,
        }
    }

    /// Row-major pixel iteration, for encoders.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.pixels.iter().copied()
    }
}

/// Exclusive-access guard over a [`PixelBuffer`]. Keeps the mutation and the
/// dirty-region report a single scoped unit so a future worker-thread
/// renderer can observe them together.
#[derive(Debug)]
pub struct PixelEdit<'a> {
    buffer: &'a mut PixelBuffer,
    pending: Option<PixelRect>,
}

impl PixelEdit<'_> {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.buffer.contains(x, y)
    }

    pub fn read(&self, x: i32, y: i32) -> BufferResult<Rgba> {
        self.buffer.pixel(x, y)
    }

    pub fn write(&mut self, x: i32, y: i32, color: Rgba) -> BufferResult<()> {
        self.buffer.set_pixel(x, y, color)
    }

    pub fn mark(&mut self, rect: PixelRect) {
        self.pending = Some(match self.pending {
            Some(current) => current.union(rect),
            None => rect,
        });
    }
}

impl Drop for PixelEdit<'_> {
    fn drop(&mut self) {
        if let Some(rect) = self.pending.take() {
            self.buffer.mark_dirty(rect);
        }
    }
}

/// Read-only snapshot of the image as it was at load time; the erase source
/// of truth. Never mutated for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    buffer: PixelBuffer,
}

impl ReferenceImage {
    pub fn new(mut buffer: PixelBuffer) -> Self {
        // A snapshot carries no redraw obligations of its own.
        buffer.take_dirty();
        Self { buffer }
    }

    pub const fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub const fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.buffer.contains(x, y)
    }

    pub fn pixel(&self, x: i32, y: i32) -> BufferResult<Rgba> {
        self.buffer.pixel(x, y)
    }

    pub fn as_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}
