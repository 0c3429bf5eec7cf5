//! Brush configuration shared by the spray and erase engines.

use crate::geometry::Rgba;

pub const DEFAULT_SPRAY_RADIUS: u32 = 10;
pub const DEFAULT_SPRAY_DENSITY: u32 = 30;

const MIN_SPRAY_RADIUS: u32 = 1;
const MAX_SPRAY_RADIUS: u32 = 4096;
const MIN_SPRAY_DENSITY: u32 = 1;
const MAX_SPRAY_DENSITY: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushMode {
    Spray,
    Erase,
}

/// Current tool state: color, mode and the sampling pattern parameters.
/// Radius and density default to the classic fixed values but stay
/// adjustable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    color: Rgba,
    mode: BrushMode,
    radius: u32,
    density: u32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: Rgba::opaque(0, 0, 0),
            mode: BrushMode::Spray,
            radius: DEFAULT_SPRAY_RADIUS,
            density: DEFAULT_SPRAY_DENSITY,
        }
    }
}

impl BrushState {
    pub const fn color(&self) -> Rgba {
        self.color
    }

    pub const fn mode(&self) -> BrushMode {
        self.mode
    }

    pub const fn radius(&self) -> u32 {
        self.radius
    }

    pub const fn density(&self) -> u32 {
        self.density
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            BrushMode::Spray => BrushMode::Erase,
            BrushMode::Erase => BrushMode::Spray,
        };
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius.clamp(MIN_SPRAY_RADIUS, MAX_SPRAY_RADIUS);
    }

    pub fn set_density(&mut self, density: u32) {
        self.density = density.clamp(MIN_SPRAY_DENSITY, MAX_SPRAY_DENSITY);
    }
}
