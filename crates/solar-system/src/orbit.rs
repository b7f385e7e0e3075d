/// Circular orbit model.
///
/// Speeds are radians per 1/60 s, so `advance` scales the wall-clock delta by
/// the reference frame rate. Zero and negative speeds are valid.

use glam::Vec3;

pub const FRAME_RATE_NORMALIZATION: f32 = 60.0;

/// New orbital phase after `delta` seconds at `speed`.
pub fn advance(angle: f32, delta: f32, speed: f32) -> f32 {
    angle + speed * delta * FRAME_RATE_NORMALIZATION
}

/// Position on the ecliptic (XZ plane) at `distance` and `angle`.
pub fn position(distance: f32, angle: f32) -> Vec3 {
    Vec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
}
