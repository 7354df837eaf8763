// File: crates/heatmap-core/src/hover.rs
// Summary: Pointer enter/leave events over cells and the listener trait that consumes them.

use std::time::Duration;

use crate::chart::{ChartScene, Heatmap};
use crate::geometry::Point;
use crate::tooltip::Tooltip;

/// Pointer event on a cell, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { cell: usize, at: Point },
    Leave { cell: usize, at: Point },
}

/// Receives cell pointer events. Handlers run one at a time on the caller's thread.
pub trait CellListener {
    fn on_pointer_enter(&mut self, heatmap: &Heatmap, cell: usize, at: Point, now: Duration);
    fn on_pointer_leave(&mut self, heatmap: &Heatmap, cell: usize, at: Point, now: Duration);

    fn handle_event(&mut self, evt: &PointerEvent, heatmap: &Heatmap, now: Duration) {
        match *evt {
            PointerEvent::Enter { cell, at } => self.on_pointer_enter(heatmap, cell, at, now),
            PointerEvent::Leave { cell, at } => self.on_pointer_leave(heatmap, cell, at, now),
        }
    }
}

impl CellListener for Tooltip {
    fn on_pointer_enter(&mut self, heatmap: &Heatmap, cell: usize, at: Point, now: Duration) {
        if let Some(c) = heatmap.cell(cell) {
            self.show(&c.record, heatmap.base_temperature, at, now);
        }
    }

    fn on_pointer_leave(&mut self, _heatmap: &Heatmap, _cell: usize, _at: Point, now: Duration) {
        self.hide(now);
    }
}

/// Turns raw pointer motion into enter/leave pairs, remembering the hovered cell.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Leave for the previous cell (if any) precedes enter for the new one.
    /// Motion inside the same cell produces nothing.
    pub fn pointer_moved(&mut self, scene: &ChartScene, at: Point) -> Vec<PointerEvent> {
        let hit = scene.cell_at(at);
        if hit == self.current {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if let Some(cell) = self.current {
            out.push(PointerEvent::Leave { cell, at });
        }
        if let Some(cell) = hit {
            out.push(PointerEvent::Enter { cell, at });
        }
        self.current = hit;
        out
    }

    /// Pointer left the surface entirely.
    pub fn pointer_left(&mut self, at: Point) -> Option<PointerEvent> {
        self.current.take().map(|cell| PointerEvent::Leave { cell, at })
    }
}
