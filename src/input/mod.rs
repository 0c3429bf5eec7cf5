//! Pointer event routing: the stroke state machine and engine dispatch.

use crate::brush::{BrushMode, BrushState};
use crate::display::{self, MapError};
use crate::engine::{self, ScatterSource};
use crate::geometry::{DisplayExtent, DisplayPoint, PixelRect};
use crate::notification;
use crate::session::EditSession;

/// Stroke phase tracked between pointer events. A stroke is the interval
/// between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokePhase {
    #[default]
    Idle,
    Spraying,
}

/// Routes pointer events to the spray or erase engine. Holds the brush state
/// and the stroke phase; buffers live in the [`EditSession`] passed per
/// event, so replacing the session leaves no stale references behind.
#[derive(Debug, Default)]
pub struct InputController {
    phase: StrokePhase,
    brush: BrushState,
}

impl InputController {
    pub fn new(brush: BrushState) -> Self {
        Self {
            phase: StrokePhase::Idle,
            brush,
        }
    }

    /// Controller with brush defaults overridden by the user's `config.json`.
    pub fn from_config() -> Self {
        Self::new(crate::config::load_app_config().brush_state())
    }

    pub const fn phase(&self) -> StrokePhase {
        self.phase
    }

    pub const fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn pointer_down(&mut self) {
        if self.phase == StrokePhase::Idle {
            tracing::debug!(mode = ?self.brush.mode(), "stroke started");
        }
        self.phase = StrokePhase::Spraying;
    }

    pub fn pointer_up(&mut self) {
        if self.phase == StrokePhase::Spraying {
            tracing::debug!("stroke ended");
        }
        self.phase = StrokePhase::Idle;
    }

    /// Handles one pointer-move event. While a stroke is active and a session
    /// is loaded, maps the pointer into buffer space and applies the brush,
    /// returning the dirty rectangle for the display layer. Every other case
    /// is a no-op: idle phase, missing session, or a widget that has no
    /// extent yet.
    ///
    /// An engine failure aborts this event only; it is logged, surfaced as a
    /// non-blocking notification, and leaves the session usable.
    pub fn pointer_moved<S: ScatterSource + ?Sized>(
        &mut self,
        pointer: DisplayPoint,
        widget: DisplayExtent,
        session: Option<&mut EditSession>,
        source: &mut S,
    ) -> Option<PixelRect> {
        if self.phase != StrokePhase::Spraying {
            return None;
        }
        let session = session?;

        let (buffer_width, buffer_height) = session.dimensions();
        let center = match display::map_to_buffer(pointer, widget, buffer_width, buffer_height) {
            Ok(center) => center,
            Err(err @ MapError::ZeroWidgetExtent { .. }) => {
                tracing::debug!(%err, "skipping pointer event");
                return None;
            }
        };

        let outcome = match self.brush.mode() {
            BrushMode::Spray => engine::spray(
                session.canvas_mut(),
                center,
                self.brush.radius(),
                self.brush.density(),
                self.brush.color(),
                source,
            )
            .map_err(|err| err.to_string()),
            BrushMode::Erase => {
                let (canvas, reference) = session.parts_mut();
                engine::erase(
                    canvas,
                    reference,
                    center,
                    self.brush.radius(),
                    self.brush.density(),
                    source,
                )
                .map_err(|err| err.to_string())
            }
        };

        match outcome {
            Ok(dirty) => Some(dirty),
            Err(message) => {
                tracing::warn!(%message, "stroke event aborted");
                notification::send("Stroke failed", message);
                None
            }
        }
    }
}
