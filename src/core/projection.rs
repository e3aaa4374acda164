//! Orbit rotation and perspective projection.

use super::config::SurfaceSize;
use glam::{Vec2, Vec3};

/// Precomputed sines/cosines for one frame's camera rotation.
#[derive(Clone, Copy, Debug)]
pub struct ViewRotation {
    cos_x: f32,
    sin_x: f32,
    cos_y: f32,
    sin_y: f32,
}

impl ViewRotation {
    pub fn from_degrees(rotation_x: f32, rotation_y: f32) -> Self {
        let (sin_x, cos_x) = rotation_x.to_radians().sin_cos();
        let (sin_y, cos_y) = rotation_y.to_radians().sin_cos();
        Self {
            cos_x,
            sin_x,
            cos_y,
            sin_y,
        }
    }

    /// World to view space: yaw about Y first, then pitch about X.
    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let x = p.x * self.cos_y - p.z * self.sin_y;
        let z = p.x * self.sin_y + p.z * self.cos_y;
        let y = p.y * self.cos_x - z * self.sin_x;
        let z = p.y * self.sin_x + z * self.cos_x;
        Vec3::new(x, y, z)
    }
}

/// Screen-space result of projecting one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub center: Vec2,
    pub size: f32,
    pub scale: f32,
}

impl Projected {
    /// Behind (or on) the camera plane; such particles are never drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.scale > 0.0
    }

    /// Axis-aligned `size`-sided square around the centre, edges inclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        point.x >= self.center.x - half
            && point.x <= self.center.x + half
            && point.y >= self.center.y - half
            && point.y <= self.center.y + half
    }
}

/// `scale = distance / (distance + z)`. A non-positive denominator maps to
/// a non-positive scale so the caller's visibility check rejects it.
#[inline]
pub fn perspective_scale(distance: f32, z_view: f32) -> f32 {
    let denom = distance + z_view;
    if denom <= 0.0 {
        return 0.0;
    }
    distance / denom
}

pub fn project(
    view: Vec3,
    base_size: f32,
    distance: f32,
    surface: SurfaceSize,
) -> Projected {
    let scale = perspective_scale(distance, view.z);
    let (cx, cy) = surface.center();
    Projected {
        center: Vec2::new(cx + view.x * scale, cy + view.y * scale),
        size: base_size * scale,
        scale,
    }
}
