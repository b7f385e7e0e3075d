use glam::Vec2;

use crate::body::Body;

/// Hover tooltip, refreshed every frame from the live pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    /// Index of the hovered body, if any.
    pub body: Option<usize>,
    pub text: String,
    /// Screen position in CSS pixels.
    pub pos: Vec2,
}

impl Tooltip {
    /// Show the tooltip for `hit` just below-right of the pointer, or hide it.
    pub fn update(&mut self, hit: Option<&Body>, pointer: Vec2, offset: Vec2) {
        match hit {
            Some(body) => {
                self.visible = true;
                self.body = Some(body.id.0);
                if self.text != body.name {
                    self.text.clone_from(&body.name);
                }
                self.pos = pointer + offset;
            }
            None => {
                self.visible = false;
                self.body = None;
                self.text.clear();
            }
        }
    }
}
