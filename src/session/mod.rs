//! Load/save lifecycle: one mutable canvas plus its load-time reference.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::buffer::{BufferError, PixelBuffer, ReferenceImage};
use crate::geometry::Rgba;

pub type SessionResult<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The decoder produced an empty image; no buffer is created.
    #[error("decoded image has invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// One loaded editing session: the mutable canvas and the immutable
/// reference snapshot, created together with identical dimensions and
/// replaced together on the next load.
#[derive(Debug, Clone)]
pub struct EditSession {
    canvas: PixelBuffer,
    reference: ReferenceImage,
}

impl EditSession {
    /// Decodes PNG, JPEG or BMP from `path` and opens a session on the
    /// decoded RGBA grid.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)?.into_rgba8();
        tracing::info!(
            ?path,
            width = decoded.width(),
            height = decoded.height(),
            "image loaded"
        );
        Self::from_rgba(decoded)
    }

    /// Builds the canvas/reference pair from an already-decoded RGBA grid.
    pub fn from_rgba(image: RgbaImage) -> SessionResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SessionError::InvalidDimensions { width, height });
        }

        let pixels = image
            .pixels()
            .map(|pixel| Rgba::new(pixel[0], pixel[1], pixel[2], pixel[3]))
            .collect();
        let canvas = PixelBuffer::new(width, height, pixels)?;
        let reference = ReferenceImage::new(canvas.clone());

        Ok(Self { canvas, reference })
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut PixelBuffer {
        &mut self.canvas
    }

    pub fn reference(&self) -> &ReferenceImage {
        &self.reference
    }

    /// Split borrow for the erase engine, which reads the reference while
    /// writing the canvas.
    pub fn parts_mut(&mut self) -> (&mut PixelBuffer, &ReferenceImage) {
        (&mut self.canvas, &self.reference)
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn canvas_image(&self) -> RgbaImage {
        let (width, height) = self.dimensions();
        let mut raw = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in self.canvas.pixels() {
            raw.extend_from_slice(&pixel.channels());
        }
        RgbaImage::from_raw(width, height, raw).expect("canvas pixel count matches its dimensions")
    }

    /// Losslessly encodes the current canvas as PNG.
    pub fn encode_png(&self) -> SessionResult<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        self.canvas_image().write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        let path = path.as_ref();
        self.canvas_image().save_with_format(path, ImageFormat::Png)?;
        tracing::info!(?path, "canvas saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, (x + y) as u8, 255])
        })
    }

    #[test]
    fn from_rgba_builds_matching_canvas_and_reference() {
        let session = EditSession::from_rgba(gradient_image(16, 9)).expect("valid image");

        assert_eq!(session.dimensions(), (16, 9));
        assert_eq!(session.reference().dimensions(), (16, 9));
        assert_eq!(session.canvas(), session.reference().as_buffer());
        assert_eq!(
            session.canvas().pixel(3, 4).expect("in bounds"),
            Rgba::new(3, 4, 7, 255)
        );
    }

    #[test]
    fn empty_decoded_image_is_rejected_before_any_buffer_exists() {
        let err = EditSession::from_rgba(RgbaImage::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidDimensions {
                width: 0,
                height: 0
            }
        ));
    }

    #[test]
    fn canvas_edits_do_not_touch_the_reference() {
        let mut session = EditSession::from_rgba(gradient_image(8, 8)).expect("valid image");

        session
            .canvas_mut()
            .set_pixel(2, 2, Rgba::opaque(255, 0, 0))
            .expect("in bounds");

        assert_eq!(
            session.reference().pixel(2, 2).expect("in bounds"),
            Rgba::new(2, 2, 4, 255)
        );
    }

    #[test]
    fn png_round_trip_preserves_every_pixel() {
        let mut session = EditSession::from_rgba(gradient_image(20, 20)).expect("valid image");
        session
            .canvas_mut()
            .set_pixel(5, 5, Rgba::opaque(255, 0, 0))
            .expect("in bounds");

        let encoded = session.encode_png().expect("encoding succeeds");
        let decoded = image::load_from_memory(&encoded)
            .expect("png decodes")
            .into_rgba8();
        let reopened = EditSession::from_rgba(decoded).expect("valid image");

        assert_eq!(reopened.canvas(), session.canvas());
    }

    #[test]
    fn save_png_writes_a_loadable_file() {
        let session = EditSession::from_rgba(gradient_image(12, 12)).expect("valid image");
        let path = std::env::temp_dir().join(format!("aerosol-session-{}.png", std::process::id()));

        session.save_png(&path).expect("save succeeds");
        let reopened = EditSession::load(&path).expect("load succeeds");
        let _ = std::fs::remove_file(&path);

        assert_eq!(reopened.canvas(), session.canvas());
    }
}
