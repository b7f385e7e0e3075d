//! Pointer tracking and click detection.

use glam::Vec2;
use orrery_engine::Camera3D;

/// Last known pointer position, plus the press in progress (if any).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// CSS pixels, origin top-left. `None` until the first pointer event.
    screen: Option<Vec2>,
    /// NDC for `screen` under the current viewport.
    ndc: Option<Vec2>,
    press_start: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Option<Vec2> {
        self.screen
    }

    pub fn ndc(&self) -> Option<Vec2> {
        self.ndc
    }

    pub fn on_move(&mut self, pos: Vec2, camera: &Camera3D) {
        self.screen = Some(pos);
        self.ndc = Some(camera.screen_to_ndc(pos));
    }

    pub fn on_down(&mut self, pos: Vec2, camera: &Camera3D) {
        self.on_move(pos, camera);
        self.press_start = Some(pos);
    }

    /// Finish a press. Returns true when it was a click: a down followed by an
    /// up within `threshold` pixels.
    pub fn on_up(&mut self, pos: Vec2, camera: &Camera3D, threshold: f32) -> bool {
        self.on_move(pos, camera);
        match self.press_start.take() {
            Some(start) => start.distance(pos) <= threshold,
            None => false,
        }
    }

    /// Recompute NDC after the viewport changed size.
    pub fn on_resize(&mut self, camera: &Camera3D) {
        if let Some(pos) = self.screen {
            self.ndc = Some(camera.screen_to_ndc(pos));
        }
    }
}
