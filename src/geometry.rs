/// Shared geometric and color primitives used across buffer, engine and input modules.

/// A pixel-indexed position in buffer space. Signed so that brush math may
/// land outside the buffer before bounds filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferPoint {
    pub x: i32,
    pub y: i32,
}

impl BufferPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pointer position in display space, as reported by the widget showing
/// the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rendered size of the display widget, which may differ from the pixel
/// size of the buffer it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayExtent {
    pub width: f64,
    pub height: f64,
}

impl DisplayExtent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// An axis-aligned rectangle in buffer coordinates. Dirty rectangles reported
/// by the engines may extend outside the buffer; clipping is the display
/// layer's job via [`PixelRect::clipped_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Self {
            x: left,
            y: top,
            width: u32::try_from(right - i64::from(left)).unwrap_or(u32::MAX),
            height: u32::try_from(bottom - i64::from(top)).unwrap_or(u32::MAX),
        }
    }

    /// Intersection with a `buffer_width` x `buffer_height` buffer anchored at
    /// the origin. `None` when nothing of the rectangle lies inside.
    pub fn clipped_to(self, buffer_width: u32, buffer_height: u32) -> Option<Self> {
        let left = i64::from(self.x).max(0);
        let top = i64::from(self.y).max(0);
        let right = self.right().min(i64::from(buffer_width));
        let bottom = self.bottom().min(i64::from(buffer_height));

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self {
            x: i32::try_from(left).unwrap_or(0),
            y: i32::try_from(top).unwrap_or(0),
            width: u32::try_from(right - left).unwrap_or(u32::MAX),
            height: u32::try_from(bottom - top).unwrap_or(u32::MAX),
        })
    }
}
