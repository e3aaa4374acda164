use super::constants::{
    DISTANCE_DEFAULT, DISTANCE_MAX, DISTANCE_MIN, DRAG_DEGREES_PER_PX, WHEEL_DISTANCE_PER_DELTA,
};
use super::projection::ViewRotation;

/// Drag/zoom state of the orbit camera. Rotations are in degrees and are
/// left unbounded; distance always stays in `DISTANCE_MIN..=DISTANCE_MAX`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub is_dragging: bool,
    pub last_x: f32,
    pub last_y: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    distance: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            distance: DISTANCE_DEFAULT,
        }
    }
}

impl OrbitState {
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.is_dragging = true;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.is_dragging {
            return;
        }
        self.rotation_y += (x - self.last_x) * DRAG_DEGREES_PER_PX;
        self.rotation_x += (y - self.last_y) * DRAG_DEGREES_PER_PX;
        self.last_x = x;
        self.last_y = y;
    }

    /// Pointer-up and pointer-leave both end the drag.
    pub fn pointer_release(&mut self) {
        self.is_dragging = false;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.set_distance(self.distance + delta_y * WHEEL_DISTANCE_PER_DELTA);
    }

    #[inline]
    pub fn view_rotation(&self) -> ViewRotation {
        ViewRotation::from_degrees(self.rotation_x, self.rotation_y)
    }
}
