//! Focus state machine.
//!
//! A click either focuses the body under the pointer or clears the focus.
//! Focusing frames the body once (the camera does not follow it afterwards);
//! clearing returns the camera to the default pose.

use std::fmt;

use glam::Vec3;
use orrery_engine::Camera3D;

use crate::body::{Body, BodyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Unfocused,
    Focused(BodyId),
}

impl Focus {
    pub fn body(self) -> Option<BodyId> {
        match self {
            Focus::Focused(id) => Some(id),
            Focus::Unfocused => None,
        }
    }
}

/// Details shown for the focused body.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    pub body: BodyId,
    pub name: String,
    pub distance: f32,
    pub size: f32,
}

impl InfoPanel {
    pub fn for_body(body: &Body) -> Self {
        Self {
            body: body.id,
            name: body.name.clone(),
            distance: body.distance,
            size: body.size,
        }
    }
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Distance: {}, Size: {}", self.name, self.distance, self.size)
    }
}

/// Camera framing used by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub default_position: Vec3,
    pub default_target: Vec3,
    pub focus_offset: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    focus: Focus,
    info: Option<InfoPanel>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The info panel, present only while a body is focused.
    pub fn info(&self) -> Option<&InfoPanel> {
        self.info.as_ref()
    }

    /// Apply a click whose pick result is `hit`.
    ///
    /// Re-clicking the focused body re-applies the same framing.
    pub fn click(&mut self, hit: Option<&Body>, camera: &mut Camera3D, framing: &Framing) {
        match hit {
            Some(body) => {
                camera.set_pose(body.position + framing.focus_offset, body.position);
                if self.focus != Focus::Focused(body.id) {
                    log::debug!("focus: {}", body.name);
                }
                self.focus = Focus::Focused(body.id);
                self.info = Some(InfoPanel::for_body(body));
            }
            None => {
                camera.set_pose(framing.default_position, framing.default_target);
                if self.focus != Focus::Unfocused {
                    log::debug!("focus cleared");
                }
                self.focus = Focus::Unfocused;
                self.info = None;
            }
        }
    }
}
