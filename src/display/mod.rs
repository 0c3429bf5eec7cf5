//! Display-space to buffer-space coordinate mapping.
//!
//! The widget showing the image may be rendered at a different size than the
//! buffer's true pixel dimensions; pointer positions arrive in display space
//! and must be mapped before any engine runs.

use crate::geometry::{BufferPoint, DisplayExtent, DisplayPoint};
use thiserror::Error;

pub type MapResult<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    /// The widget has not been laid out yet (or is collapsed); callers skip
    /// the input event rather than dividing by zero.
    #[error("display widget extent is degenerate: {width}x{height}")]
    ZeroWidgetExtent { width: f64, height: f64 },
}

/// Maps a pointer position to integer buffer coordinates by scaling each axis
/// with `buffer_extent / widget_extent` and truncating toward zero.
pub fn map_to_buffer(
    pointer: DisplayPoint,
    widget: DisplayExtent,
    buffer_width: u32,
    buffer_height: u32,
) -> MapResult<BufferPoint> {
    if widget.width <= 0.0 || widget.height <= 0.0 {
        return Err(MapError::ZeroWidgetExtent {
            width: widget.width,
            height: widget.height,
        });
    }

    let x = (pointer.x * f64::from(buffer_width) / widget.width) as i32;
    let y = (pointer.y * f64::from(buffer_height) / widget.height) as i32;
    Ok(BufferPoint::new(x, y))
}
