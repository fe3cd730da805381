//! Mouse drag tracking.
//!
//! Dragging with the left button produces a rotation about the Z axis proportional to the
//! horizontal motion. Nothing consumes the rotation yet, so dragging has no visible effect.

use glam::{DVec2, Mat4, Vec3};

/// Radians of rotation per pixel of horizontal drag.
pub const DRAG_SENSITIVITY: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MouseTracker {
    left_pressed: bool,
    prev_position: DVec2,
}

impl MouseTracker {
    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn prev_position(&self) -> DVec2 {
        self.prev_position
    }

    pub fn handle_left_button(&mut self, action: ButtonAction) {
        self.left_pressed = action == ButtonAction::Press;
    }

    /// Handles a motion event and returns the drag rotation, if the left button is held.
    ///
    /// The stored position is updated on every call.
    pub fn handle_motion(&mut self, x: f64, y: f64) -> Option<Mat4> {
        let rotation = self.left_pressed.then(|| {
            let dx = (x - self.prev_position.x) as f32;
            Mat4::from_axis_angle(Vec3::Z, dx * DRAG_SENSITIVITY)
        });
        self.prev_position = DVec2::new(x, y);
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release_clears_flag() {
        let mut mouse = MouseTracker::default();
        mouse.handle_left_button(ButtonAction::Press);
        assert!(mouse.left_pressed());
        mouse.handle_motion(10.0, 10.0);
        mouse.handle_motion(40.0, 12.0);
        mouse.handle_left_button(ButtonAction::Release);
        assert!(!mouse.left_pressed());
        mouse.handle_motion(50.0, 12.0);
        assert!(!mouse.left_pressed());
    }

    #[test]
    fn test_position_updates_without_button() {
        let mut mouse = MouseTracker::default();
        assert_eq!(mouse.handle_motion(3.0, 4.0), None);
        assert_eq!(mouse.prev_position(), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn test_drag_rotation_uses_horizontal_delta() {
        let mut mouse = MouseTracker::default();
        mouse.handle_motion(100.0, 100.0);
        mouse.handle_left_button(ButtonAction::Press);
        let rotation = mouse.handle_motion(110.0, 500.0).unwrap();
        let expected = Mat4::from_axis_angle(Vec3::Z, 1.0);
        assert!(rotation.abs_diff_eq(expected, 1e-6));
        assert_eq!(mouse.prev_position(), DVec2::new(110.0, 500.0));
    }
}
