use serde::{Deserialize, Serialize};

use crate::frame::FrameGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    /// Whether the pointer is over an element that asks for the crosshair.
    pub over_target: bool,
}

/// Crosshair icon that follows a real mouse over marked targets.
#[derive(Debug, Clone, Default)]
pub struct CursorLayer {
    active: bool,
    gate: FrameGate<(f64, f64)>,
}

impl CursorLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` when a frame should be requested.
    pub fn on_pointer_move(&mut self, event: PointerMove) -> bool {
        if event.kind != PointerKind::Mouse {
            self.active = false;
            return false;
        }
        self.active = event.over_target;
        self.gate.request((event.x, event.y))
    }

    /// Window blur or pointer leaving the document.
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    /// Icon position for this frame, if it is shown and has moved.
    pub fn on_frame(&mut self) -> Option<(f64, f64)> {
        let position = self.gate.take()?;
        self.active.then_some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(x: f64, y: f64, over_target: bool) -> PointerMove {
        PointerMove {
            kind: PointerKind::Mouse,
            x,
            y,
            over_target,
        }
    }

    #[test]
    fn test_mouse_over_target_activates() {
        let mut layer = CursorLayer::new();
        assert!(layer.on_pointer_move(mouse(10.0, 20.0, true)));
        assert!(layer.is_active());
        assert_eq!(layer.on_frame(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_moves_coalesce_per_frame() {
        let mut layer = CursorLayer::new();
        assert!(layer.on_pointer_move(mouse(1.0, 1.0, true)));
        assert!(!layer.on_pointer_move(mouse(2.0, 2.0, true)));
        assert_eq!(layer.on_frame(), Some((2.0, 2.0)));
        assert_eq!(layer.on_frame(), None);
    }

    #[test]
    fn test_touch_deactivates() {
        let mut layer = CursorLayer::new();
        layer.on_pointer_move(mouse(1.0, 1.0, true));
        let touch = PointerMove {
            kind: PointerKind::Touch,
            ..mouse(5.0, 5.0, true)
        };
        assert!(!layer.on_pointer_move(touch));
        assert!(!layer.is_active());
        assert_eq!(layer.on_frame(), None);
    }

    #[test]
    fn test_leaving_target_hides_icon() {
        let mut layer = CursorLayer::new();
        layer.on_pointer_move(mouse(1.0, 1.0, false));
        assert!(!layer.is_active());
        assert_eq!(layer.on_frame(), None);
    }

    #[test]
    fn test_window_leave() {
        let mut layer = CursorLayer::new();
        layer.on_pointer_move(mouse(1.0, 1.0, true));
        layer.on_leave();
        assert!(!layer.is_active());
    }
}
