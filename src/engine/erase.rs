use thiserror::Error;

use super::scatter::{scatter_offset, ScatterSource};
use super::splat_bounds;
use crate::buffer::{BufferError, PixelBuffer, ReferenceImage};
use crate::geometry::{BufferPoint, PixelRect};

#[derive(Debug, Error)]
pub enum EraseError {
    /// The reference snapshot no longer matches the canvas; the call is
    /// rejected before any pixel is touched.
    #[error(
        "reference image is {reference_width}x{reference_height} \
         but canvas is {canvas_width}x{canvas_height}"
    )]
    DimensionMismatch {
        canvas_width: u32,
        canvas_height: u32,
        reference_width: u32,
        reference_height: u32,
    },

    #[error("erase stroke failed: {0}")]
    Buffer(#[from] BufferError),
}

/// Same sampling loop as [`super::spray`], but each in-bounds sample copies
/// the pixel from the load-time reference back into the canvas, restoring
/// the original image content under the brush.
pub fn erase<S: ScatterSource + ?Sized>(
    canvas: &mut PixelBuffer,
    reference: &ReferenceImage,
    center: BufferPoint,
    radius: u32,
    sample_count: u32,
    source: &mut S,
) -> Result<PixelRect, EraseError> {
    if reference.dimensions() != canvas.dimensions() {
        return Err(EraseError::DimensionMismatch {
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
            reference_width: reference.width(),
            reference_height: reference.height(),
        });
    }

    let mut edit = canvas.edit();

    for _ in 0..sample_count {
        let (dx, dy) = scatter_offset(radius, source);
        let (x, y) = (center.x.saturating_add(dx), center.y.saturating_add(dy));
        if edit.contains(x, y) {
            let original = reference.pixel(x, y)?;
            edit.write(x, y, original)?;
        }
    }

    let bounds = splat_bounds(center, radius);
    edit.mark(bounds);
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scatter::ScriptedScatter;
    use crate::engine::{spray, EntropyScatter};
    use crate::geometry::Rgba;

    const BACKDROP: Rgba = Rgba::opaque(10, 10, 10);
    const RED: Rgba = Rgba::opaque(255, 0, 0);

    fn session(width: u32, height: u32) -> (PixelBuffer, ReferenceImage) {
        let canvas = PixelBuffer::filled(width, height, BACKDROP).expect("valid dimensions");
        let reference = ReferenceImage::new(canvas.clone());
        (canvas, reference)
    }

    #[test]
    fn erase_restores_the_reference_pixel_at_each_sample() {
        let (mut canvas, reference) = session(100, 100);
        canvas.set_pixel(20, 20, RED).expect("in bounds");

        // reach = 0 pins every sample to the stroke center.
        let mut source = ScriptedScatter::new(vec![0.0, 0.0]);
        let bounds = erase(
            &mut canvas,
            &reference,
            BufferPoint::new(20, 20),
            10,
            30,
            &mut source,
        )
        .expect("erase succeeds");

        assert_eq!(canvas.pixel(20, 20).expect("in bounds"), BACKDROP);
        assert_eq!(bounds, PixelRect::new(10, 10, 20, 20));
    }

    #[test]
    fn erase_is_idempotent_on_untouched_regions() {
        let (mut canvas, reference) = session(64, 64);
        let pristine = canvas.clone();

        let mut source = EntropyScatter::seeded(5);
        erase(
            &mut canvas,
            &reference,
            BufferPoint::new(32, 32),
            10,
            30,
            &mut source,
        )
        .expect("erase succeeds");

        canvas.take_dirty();
        assert_eq!(canvas, pristine);
    }

    #[test]
    fn repeated_erase_eventually_reverts_a_sprayed_pixel() {
        let (mut canvas, reference) = session(100, 100);

        let mut source = EntropyScatter::seeded(77);
        spray(
            &mut canvas,
            BufferPoint::new(20, 20),
            10,
            30,
            RED,
            &mut source,
        )
        .expect("spray succeeds");

        // Enough passes that the center pixel is hit with near certainty.
        for _ in 0..200 {
            erase(
                &mut canvas,
                &reference,
                BufferPoint::new(20, 20),
                10,
                30,
                &mut source,
            )
            .expect("erase succeeds");
            if canvas.pixel(20, 20).expect("in bounds") == BACKDROP {
                break;
            }
        }

        assert_eq!(canvas.pixel(20, 20).expect("in bounds"), BACKDROP);
    }

    #[test]
    fn mismatched_reference_dimensions_reject_the_call_untouched() {
        let (mut canvas, _) = session(100, 100);
        canvas.set_pixel(3, 3, RED).expect("in bounds");
        let (other_canvas, small_reference) = session(50, 50);
        drop(other_canvas);

        let mut source = EntropyScatter::seeded(1);
        let err = erase(
            &mut canvas,
            &small_reference,
            BufferPoint::new(10, 10),
            10,
            30,
            &mut source,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            EraseError::DimensionMismatch {
                canvas_width: 100,
                canvas_height: 100,
                reference_width: 50,
                reference_height: 50,
            }
        ));
        assert_eq!(canvas.pixel(3, 3).expect("in bounds"), RED);
        assert_eq!(canvas.take_dirty(), None);
    }

    #[test]
    fn out_of_bounds_samples_are_skipped_silently() {
        let (mut canvas, reference) = session(20, 20);

        // angle = pi pushes every sample off the left edge.
        let mut source = ScriptedScatter::new(vec![0.5, 0.9]);
        erase(
            &mut canvas,
            &reference,
            BufferPoint::new(0, 10),
            10,
            30,
            &mut source,
        )
        .expect("stroke survives out-of-bounds samples");

        canvas.take_dirty();
        assert_eq!(canvas, *reference.as_buffer());
    }
}
