use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogVersion;
use crate::error::{CatalogError, CatalogResult};

/// Tunables for camera, interaction and scenery.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub catalog: CatalogVersion,

    /// Vertical field of view, degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Camera pose at startup and whenever the selection is cleared.
    pub default_position: Vec3,
    pub default_target: Vec3,
    /// Camera offset from a body when it is focused.
    pub focus_offset: Vec3,
    /// World units per wheel delta unit.
    pub zoom_speed: f32,

    pub speed_min: f32,
    pub speed_max: f32,
    pub speed_step: f32,
    /// Self-rotation per 1/60 s, radians.
    pub spin_rate: f32,

    pub tooltip_offset: Vec2,
    /// Pointer travel (px) beyond which a press is a drag, not a click.
    pub drag_threshold: f32,

    pub star_count: usize,
    /// Edge length of the cube stars are scattered in.
    pub star_spread: f32,
    /// Star dot edge, px.
    pub star_size: f32,
    pub orbit_segments: usize,
    pub orbit_alpha: f32,
    pub orbit_width: f32,

    pub ambient_color: u32,
    pub sun_light_color: u32,
    pub sun_light_intensity: f32,

    /// Seed for initial orbital phases, belt and starfield.
    pub seed: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogVersion::V2,
            fov_deg: 45.0,
            near: 0.1,
            far: 2000.0,
            default_position: Vec3::new(0.0, 100.0, 150.0),
            default_target: Vec3::ZERO,
            focus_offset: Vec3::new(0.0, 5.0, 10.0),
            zoom_speed: 0.05,
            speed_min: 0.001,
            speed_max: 0.05,
            speed_step: 0.001,
            spin_rate: 0.02,
            tooltip_offset: Vec2::new(5.0, 5.0),
            drag_threshold: 5.0,
            star_count: 1000,
            star_spread: 2000.0,
            star_size: 1.5,
            orbit_segments: 64,
            orbit_alpha: 0.2,
            orbit_width: 1.0,
            ambient_color: 0x333333,
            sun_light_color: 0xffffff,
            sun_light_intensity: 1.2,
            seed: 0x5eed_0b17,
        }
    }
}

impl SceneConfig {
    /// Parse overrides on top of the defaults.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CatalogResult<()> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(CatalogError::Config(format!("fov_deg {} out of (0, 180)", self.fov_deg)));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(CatalogError::Config(format!(
                "clip planes near {} / far {} invalid",
                self.near, self.far
            )));
        }
        if !(self.speed_step > 0.0 && self.speed_min <= self.speed_max) {
            return Err(CatalogError::Config(format!(
                "speed range [{}, {}] step {} invalid",
                self.speed_min, self.speed_max, self.speed_step
            )));
        }
        if self.orbit_segments < 3 {
            return Err(CatalogError::Config(format!(
                "orbit_segments must be at least 3, got {}",
                self.orbit_segments
            )));
        }
        Ok(())
    }

    /// Clamp a raw slider value into the slider range and snap it to the step grid.
    pub fn slider_speed(&self, raw: f32) -> f32 {
        let clamped = raw.clamp(self.speed_min, self.speed_max);
        let steps = ((clamped - self.speed_min) / self.speed_step).round();
        (self.speed_min + steps * self.speed_step).min(self.speed_max)
    }
}
