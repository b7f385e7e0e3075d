//! Orrery simulation core.
//!
//! Owns every piece of mutable session state: bodies, speeds, focus, tooltip,
//! pointer, pause flag and the camera. Input is applied through the `handle_*`
//! methods; `frame` advances time and refreshes the tooltip.

use glam::Vec2;
use orrery_engine::{Camera3D, InputEvent};

use crate::body::{initial_phase, Body, BodyId};
use crate::catalog::Catalog;
use crate::config::SceneConfig;
use crate::hud::Tooltip;
use crate::interaction::PointerState;
use crate::picking;
use crate::scenery::AsteroidBelt;
use crate::selection::{Focus, Framing, InfoPanel, Selection};
use crate::speeds::SpeedTable;

/// Custom event kinds from the host UI.
pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_RESET_SPEEDS: u32 = 2;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 3;

pub const KEY_SPACE: u32 = 32;

/// State changes the host should hear about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    Speed(BodyId, f32),
    AllSpeeds,
    Paused(bool),
}

pub struct SimulationContext {
    config: SceneConfig,
    catalog: Catalog,
    bodies: Vec<Body>,
    speeds: SpeedTable,
    belt: Option<AsteroidBelt>,
    selection: Selection,
    tooltip: Tooltip,
    pointer: PointerState,
    camera: Camera3D,
    paused: bool,
    changes: Vec<Change>,
}

impl SimulationContext {
    pub fn new(config: SceneConfig, catalog: Catalog, viewport_width: f32, viewport_height: f32) -> Self {
        let bodies = catalog
            .planets
            .iter()
            .enumerate()
            .map(|(i, entry)| Body::from_entry(BodyId(i), entry, initial_phase(config.seed, i)))
            .collect();
        let speeds = SpeedTable::from_catalog(&catalog);
        let belt = catalog.belt.as_ref().map(|spec| AsteroidBelt::generate(spec, config.seed));

        let mut camera = Camera3D::new(
            config.fov_deg,
            config.near,
            config.far,
            viewport_width,
            viewport_height,
        );
        camera.set_pose(config.default_position, config.default_target);

        Self {
            config,
            catalog,
            bodies,
            speeds,
            belt,
            selection: Selection::new(),
            tooltip: Tooltip::default(),
            pointer: PointerState::new(),
            camera,
            paused: false,
            changes: vec![Change::AllSpeeds],
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn speeds(&self) -> &SpeedTable {
        &self.speeds
    }

    pub fn belt(&self) -> Option<&AsteroidBelt> {
        self.belt.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.selection.focus()
    }

    pub fn info_panel(&self) -> Option<&InfoPanel> {
        self.selection.info()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Take the changes accumulated since the last call.
    pub fn drain_changes(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }

    // -- Input --

    /// Apply one queued input event.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y } => self.pointer.on_move(Vec2::new(x, y), &self.camera),
            InputEvent::PointerDown { x, y } => self.pointer.on_down(Vec2::new(x, y), &self.camera),
            InputEvent::PointerUp { x, y } => {
                if self.pointer.on_up(Vec2::new(x, y), &self.camera, self.config.drag_threshold) {
                    self.click();
                }
            }
            InputEvent::Wheel { delta_y } => self.zoom(delta_y),
            InputEvent::KeyDown { key_code: KEY_SPACE } => self.toggle_pause(),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => {}
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Custom { kind, a, b, .. } => self.handle_custom(kind, a, b),
        }
    }

    fn handle_custom(&mut self, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => {
                if a < 0.0 || a.fract() != 0.0 || a as usize >= self.speeds.len() {
                    log::warn!("set speed: unknown body index {}", a);
                    return;
                }
                self.set_slider_speed(BodyId(a as usize), b);
            }
            CUSTOM_RESET_SPEEDS => self.reset_speeds(),
            CUSTOM_TOGGLE_PAUSE => self.toggle_pause(),
            other => log::warn!("ignoring custom event kind {}", other),
        }
    }

    /// Click at the current pointer position.
    pub fn click(&mut self) {
        let hit = self
            .pointer
            .ndc()
            .and_then(|ndc| picking::pick(ndc, &self.camera, &self.bodies));
        let framing = Framing {
            default_position: self.config.default_position,
            default_target: self.config.default_target,
            focus_offset: self.config.focus_offset,
        };
        let body = hit.and_then(|id| self.bodies.get(id.0));
        self.selection.click(body, &mut self.camera, &framing);
    }

    /// Move the camera along its view direction by `delta_y * zoom_speed`.
    pub fn zoom(&mut self, delta_y: f32) {
        self.camera.dolly(delta_y * self.config.zoom_speed);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
        self.pointer.on_resize(&self.camera);
    }

    /// Set a speed from a slider: the value is clamped and snapped to the slider grid.
    pub fn set_slider_speed(&mut self, id: BodyId, raw: f32) {
        let speed = self.config.slider_speed(raw);
        self.set_speed(id, speed);
    }

    /// Set a speed verbatim. Zero and negative speeds are allowed.
    pub fn set_speed(&mut self, id: BodyId, speed: f32) -> bool {
        if !self.speeds.set(id, speed) {
            return false;
        }
        self.changes.push(Change::Speed(id, speed));
        true
    }

    pub fn reset_speeds(&mut self) {
        self.speeds.reset();
        log::debug!("speeds reset to catalog defaults");
        self.changes.push(Change::AllSpeeds);
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        log::debug!("paused: {}", paused);
        self.changes.push(Change::Paused(paused));
    }

    // -- Frame --

    /// Advance by `delta` seconds: move bodies unless paused, then refresh the tooltip.
    pub fn frame(&mut self, delta: f32) {
        if !self.paused {
            for body in &mut self.bodies {
                let speed = self.speeds.get(body.id).unwrap_or(0.0);
                body.advance(delta, speed);
                body.spin(delta, self.config.spin_rate);
            }
            if let Some(belt) = &mut self.belt {
                belt.advance(delta);
            }
        }

        let hit = self
            .pointer
            .ndc()
            .and_then(|ndc| picking::pick(ndc, &self.camera, &self.bodies))
            .and_then(|id| self.bodies.get(id.0));
        let pointer = self.pointer.screen().unwrap_or(Vec2::ZERO);
        self.tooltip.update(hit, pointer, self.config.tooltip_offset);
    }
}
