use crate::body::BodyId;
use crate::catalog::Catalog;

/// Current angular speed per body, one entry per catalog entry.
///
/// Defaults are captured from the catalog at construction and are what
/// `reset` restores.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable {
    names: Vec<String>,
    defaults: Vec<f32>,
    current: Vec<f32>,
}

impl SpeedTable {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let names = catalog.planets.iter().map(|e| e.name.clone()).collect();
        let defaults: Vec<f32> = catalog.planets.iter().map(|e| e.speed).collect();
        Self {
            names,
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn get(&self, id: BodyId) -> Option<f32> {
        self.current.get(id.0).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        self.index_of(name).and_then(|id| self.get(id))
    }

    pub fn default_speed(&self, id: BodyId) -> Option<f32> {
        self.defaults.get(id.0).copied()
    }

    /// Overwrite one body's speed. Any value is accepted, including zero and
    /// negative. Returns false for an unknown id.
    pub fn set(&mut self, id: BodyId, speed: f32) -> bool {
        match self.current.get_mut(id.0) {
            Some(slot) => {
                *slot = speed;
                true
            }
            None => false,
        }
    }

    pub fn set_by_name(&mut self, name: &str, speed: f32) -> bool {
        match self.index_of(name) {
            Some(id) => self.set(id, speed),
            None => false,
        }
    }

    /// Restore every entry to its catalog default.
    pub fn reset(&mut self) {
        self.current.copy_from_slice(&self.defaults);
    }

    pub fn index_of(&self, name: &str) -> Option<BodyId> {
        self.names.iter().position(|n| n == name).map(BodyId)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &str, f32)> {
        self.names
            .iter()
            .zip(&self.current)
            .enumerate()
            .map(|(i, (name, speed))| (BodyId(i), name.as_str(), *speed))
    }
}
