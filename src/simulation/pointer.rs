//! Pointer-spring controller
//!
//! Tracks the pointer position and which body, if any, is being dragged.
//! Hit testing is the host's job (see `System::body_at`); this type only
//! stores the result.

use tracing::debug;

use super::states::{BodyId, NVec2};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    position: NVec2,
    held: Option<BodyId>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `body`; `None` means the press hit nothing
    pub fn begin_hold(&mut self, body: Option<BodyId>) {
        if let Some(id) = body {
            debug!(body = id.index(), "pointer hold started");
        }
        self.held = body;
    }

    pub fn update_pointer(&mut self, x: f64, y: f64) {
        self.position = NVec2::new(x, y);
    }

    pub fn end_hold(&mut self) {
        if let Some(id) = self.held.take() {
            debug!(body = id.index(), "pointer hold released");
        }
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn held(&self) -> Option<BodyId> {
        self.held
    }
}
