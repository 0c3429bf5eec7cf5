use thiserror::Error;

use super::scatter::{scatter_offset, ScatterSource};
use super::splat_bounds;
use crate::buffer::{BufferError, PixelBuffer};
use crate::geometry::{BufferPoint, PixelRect, Rgba};

#[derive(Debug, Error)]
pub enum SprayError {
    /// An in-bounds write failed anyway; the stroke event aborts but the
    /// buffer stays valid.
    #[error("spray stroke failed: {0}")]
    Buffer(#[from] BufferError),
}

/// Stamps `density` random samples of `color` inside the disc around
/// `center`. Samples falling outside the buffer are skipped, never errors.
/// Returns the unclipped bounding rectangle of the application, which is
/// also folded into the buffer's dirty region.
pub fn spray<S: ScatterSource + ?Sized>(
    buffer: &mut PixelBuffer,
    center: BufferPoint,
    radius: u32,
    density: u32,
    color: Rgba,
    source: &mut S,
) -> Result<PixelRect, SprayError> {
    let mut edit = buffer.edit();

    for _ in 0..density {
        let (dx, dy) = scatter_offset(radius, source);
        let (x, y) = (center.x.saturating_add(dx), center.y.saturating_add(dy));
        if edit.contains(x, y) {
            edit.write(x, y, color)?;
        }
    }

    let bounds = splat_bounds(center, radius);
    edit.mark(bounds);
    Ok(bounds)
}
