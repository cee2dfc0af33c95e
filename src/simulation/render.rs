//! Drawing seam between the simulation and whatever displays it
//!
//! Hosts implement [`Canvas`]. [`CommandBuffer`] records the calls instead of
//! drawing, which the headless runner and the tests use.

use super::pointer::PointerState;
use super::states::System;

/// Immediate-mode drawing surface in simulation coordinates
pub trait Canvas {
    fn clear(&mut self);
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { x: f64, y: f64, radius: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Canvas that stores every call in order
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of circles drawn since the last clear
    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Canvas for CommandBuffer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }
}

/// Clear, draw every body, then the pointer-to-body line if something is held
pub fn render_system<C: Canvas + ?Sized>(sys: &System, pointer: &PointerState, canvas: &mut C) {
    canvas.clear();
    for b in sys.bodies() {
        canvas.draw_circle(b.x.x, b.x.y, b.radius());
    }
    if let Some(held) = pointer.held().and_then(|id| sys.get(id)) {
        let p = pointer.position();
        canvas.draw_line(p.x, p.y, held.x.x, held.x.y);
    }
}
