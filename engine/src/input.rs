use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete input events delivered by the host, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, at: DateTime<Utc> },
    PointerMove { x: f64, y: f64, at: DateTime<Utc> },
    PointerUp { x: f64, y: f64, at: DateTime<Utc> },
    PointerLeave { at: DateTime<Utc> },
    Wheel { delta_y: f64, x: f64, y: f64, at: DateTime<Utc> },
}

/// A pointer-up this close (px) to where the drag started counts as a click.
const CLICK_TOLERANCE: f64 = 5.0;

/// Drag gesture tracker: Idle until a pointer-down, Dragging until the
/// matching up/leave. Out-of-order events (move or up with no prior down)
/// are no-ops.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    anchor: Option<Anchor>,
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    /// Pointer position minus pan offset at drag start.
    grab_x: f64,
    grab_y: f64,
    /// Pointer position at drag start, for click-vs-drag disambiguation.
    start_x: f64,
    start_y: f64,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, offset_x: f64, offset_y: f64) {
        self.anchor = Some(Anchor {
            grab_x: x - offset_x,
            grab_y: y - offset_y,
            start_x: x,
            start_y: y,
        });
    }

    /// New pan offset while dragging, `None` when idle.
    pub fn pointer_move(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.anchor.map(|a| (x - a.grab_x, y - a.grab_y))
    }

    /// Ends the gesture. Returns `true` when the pointer never strayed past
    /// the click tolerance, i.e. the gesture was a click rather than a drag.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        match self.anchor.take() {
            Some(a) => (x - a.start_x).abs() < CLICK_TOLERANCE && (y - a.start_y).abs() < CLICK_TOLERANCE,
            None => false,
        }
    }

    /// Pointer left the viewport: abandon the gesture, never a click.
    pub fn pointer_leave(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_without_down_is_a_no_op() {
        let drag = DragTracker::default();
        assert_eq!(drag.pointer_move(10.0, 10.0), None);
    }

    #[test]
    fn up_without_down_is_not_a_click() {
        let mut drag = DragTracker::default();
        assert!(!drag.pointer_up(10.0, 10.0));
    }

    #[test]
    fn drag_to_same_point_leaves_offset_unchanged() {
        let mut drag = DragTracker::default();
        drag.pointer_down(100.0, 100.0, -40.0, 25.0);
        assert_eq!(drag.pointer_move(100.0, 100.0), Some((-40.0, 25.0)));
    }

    #[test]
    fn drag_offset_follows_pointer_delta() {
        let mut drag = DragTracker::default();
        drag.pointer_down(100.0, 100.0, 0.0, 0.0);
        assert_eq!(drag.pointer_move(130.0, 80.0), Some((30.0, -20.0)));
    }

    #[test]
    fn short_gesture_is_a_click_long_gesture_is_not() {
        let mut drag = DragTracker::default();
        drag.pointer_down(100.0, 100.0, 0.0, 0.0);
        assert!(drag.pointer_up(102.0, 99.0));

        drag.pointer_down(100.0, 100.0, 0.0, 0.0);
        assert!(!drag.pointer_up(160.0, 100.0));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: InputEvent = serde_json::from_str(
            r#"{"type": "wheel", "delta_y": -120.0, "x": 400.0, "y": 300.0,
                "at": "2026-08-23T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(matches!(event, InputEvent::Wheel { delta_y, .. } if delta_y == -120.0));
    }

    #[test]
    fn leave_always_returns_to_idle() {
        let mut drag = DragTracker::default();
        drag.pointer_down(100.0, 100.0, 0.0, 0.0);
        drag.pointer_leave();
        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer_move(200.0, 200.0), None);
    }
}
