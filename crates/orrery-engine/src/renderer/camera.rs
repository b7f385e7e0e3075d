use glam::{Mat4, Vec2, Vec3};

use crate::renderer::ray::Ray;

/// Perspective camera with an explicit position and look target.
///
/// Screen coordinates are viewport pixels with the origin at the top-left and
/// Y pointing down. NDC is [-1, 1] on both axes with Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up direction.
    pub up: Vec3,
    /// Vertical field of view, in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

/// Projection result from world space to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport position in pixels.
    pub pos: Vec2,
    /// Distance in front of the camera along the view axis (always > near).
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            viewport_width: viewport_width.max(1.0),
            viewport_height: viewport_height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    /// Place the camera and aim it in one step.
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Unit view direction. Falls back to -Z when position and target coincide.
    pub fn forward(&self) -> Vec3 {
        let dir = (self.target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Z
        } else {
            dir
        }
    }

    /// Move along the view direction, carrying the target along so the
    /// direction never flips (positive = forward).
    pub fn dolly(&mut self, amount: f32) {
        let step = self.forward() * amount;
        self.position += step;
        self.target += step;
    }

    /// Update viewport size (and therefore aspect ratio).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Viewport pixels → NDC.
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / self.viewport_width) * 2.0 - 1.0,
            -(screen.y / self.viewport_height) * 2.0 + 1.0,
        )
    }

    /// NDC → viewport pixels.
    pub fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport_width,
            (1.0 - ndc.y) * 0.5 * self.viewport_height,
        )
    }

    /// Pixels per world unit at unit depth.
    fn focal_length_px(&self) -> f32 {
        (self.viewport_height * 0.5) / (self.fov_y * 0.5).tan()
    }

    /// Project a world position to the viewport. `None` when the point is at or
    /// behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let view = self.view_matrix().transform_point3(world);
        let depth = -view.z;
        if depth <= self.near {
            return None;
        }
        let ndc = self.projection_matrix().project_point3(view);
        Some(Projection {
            pos: self.ndc_to_screen(Vec2::new(ndc.x, ndc.y)),
            depth,
            scale: self.focal_length_px() / depth,
        })
    }

    /// Ray from the eye through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let far_point = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.position, far_point - self.position)
    }

    /// Ray from the eye through a viewport pixel.
    pub fn ray_from_screen(&self, screen: Vec2) -> Ray {
        self.ray_from_ndc(self.screen_to_ndc(screen))
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(45.0, 0.1, 2000.0, 800.0, 600.0)
    }
}
