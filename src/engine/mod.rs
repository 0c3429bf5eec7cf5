//! Stochastic spray and erase engines.
//!
//! Both engines share one sampling pattern: `density` points drawn inside a
//! disc around the stroke center, with the radius drawn linearly rather than
//! area-uniform. That biases samples toward the brush center and is the
//! tool's visual signature, kept on purpose.

mod erase;
mod scatter;
mod spray;

pub use erase::{erase, EraseError};
pub use scatter::{EntropyScatter, ScatterSource};
pub use spray::{spray, SprayError};

use crate::geometry::{BufferPoint, PixelRect};

/// Bounding rectangle of one spray/erase application: side `2 * radius`,
/// anchored at `center - radius`. Deliberately not clipped to the buffer;
/// the display layer clips before redrawing.
fn splat_bounds(center: BufferPoint, radius: u32) -> PixelRect {
    let reach = i32::try_from(radius).unwrap_or(i32::MAX);
    PixelRect::new(
        center.x.saturating_sub(reach),
        center.y.saturating_sub(reach),
        radius.saturating_mul(2),
        radius.saturating_mul(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splat_bounds_spans_center_minus_to_plus_radius() {
        let bounds = splat_bounds(BufferPoint::new(50, 50), 10);
        assert_eq!(bounds, PixelRect::new(40, 40, 20, 20));
    }

    #[test]
    fn splat_bounds_may_extend_outside_the_buffer() {
        let bounds = splat_bounds(BufferPoint::new(3, 3), 10);
        assert_eq!(bounds, PixelRect::new(-7, -7, 20, 20));
    }
}
