/// Point lights in world space plus an ambient term.
///
/// Lights are persistent: they stay until explicitly removed. Each frame the
/// engine projects them through the camera into `LightInstance` records
/// that the host reads from the SAB for its shading pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::renderer::camera::Camera3D;

/// A point light at a world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self { position, color, intensity }
    }

    pub fn with_pos(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Projected light record.
///
/// Wire format (8 floats / 32 bytes):
/// `[screen_x, screen_y, depth, r, g, b, intensity, visible]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LightInstance {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// 1.0 when the light is in front of the camera.
    pub visible: f32,
}

/// Manages active lights and ambient color for the scene.
///
/// The ambient color defaults to white, which produces unlit output when no
/// lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    projected: Vec<LightInstance>,
    ambient: [f32; 3],
    max_lights: usize,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(crate::bridge::protocol::DEFAULT_MAX_LIGHTS)
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            projected: Vec::with_capacity(max_lights),
            ambient: [1.0, 1.0, 1.0],
            max_lights,
        }
    }

    /// Add a light. Returns false when the light table is full.
    pub fn add(&mut self, light: PointLight) -> bool {
        if self.lights.len() >= self.max_lights {
            log::warn!("light table full ({}): ignoring light", self.max_lights);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn clear(&mut self) {
        self.lights.clear();
        self.projected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PointLight> {
        self.lights.iter_mut()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Rebuild the projected records for this frame's camera.
    pub fn project(&mut self, camera: &Camera3D) {
        self.projected.clear();
        for light in &self.lights {
            let [r, g, b] = light.color;
            let instance = match camera.project(light.position) {
                Some(p) => LightInstance {
                    x: p.pos.x,
                    y: p.pos.y,
                    depth: p.depth,
                    r,
                    g,
                    b,
                    intensity: light.intensity,
                    visible: 1.0,
                },
                None => LightInstance { r, g, b, intensity: light.intensity, ..Default::default() },
            };
            self.projected.push(instance);
        }
    }

    pub fn projected(&self) -> &[LightInstance] {
        &self.projected
    }

    /// Pointer to the projected records for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.projected.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
