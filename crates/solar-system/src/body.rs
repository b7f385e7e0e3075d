use glam::Vec3;

use crate::catalog::CatalogEntry;
use crate::orbit;

/// Stable index of a planet in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// A simulated planet. Created once at startup, never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub distance: f32,
    pub size: f32,
    pub color: u32,
    /// Orbital phase, radians.
    pub angle: f32,
    /// Derived from `distance` and `angle`.
    pub position: Vec3,
    /// Self-rotation of the visual mesh, radians.
    pub spin: f32,
}

impl Body {
    pub fn from_entry(id: BodyId, entry: &CatalogEntry, angle: f32) -> Self {
        Self {
            id,
            name: entry.name.clone(),
            distance: entry.distance,
            size: entry.size,
            color: entry.color,
            angle,
            position: orbit::position(entry.distance, angle),
            spin: 0.0,
        }
    }

    /// Step the orbit by `delta` seconds at `speed`.
    pub fn advance(&mut self, delta: f32, speed: f32) {
        self.angle = orbit::advance(self.angle, delta, speed);
        self.position = orbit::position(self.distance, self.angle);
    }

    /// Step the mesh spin by `delta` seconds at `rate`.
    pub fn spin(&mut self, delta: f32, rate: f32) {
        self.spin = orbit::advance(self.spin, delta, rate).rem_euclid(std::f32::consts::TAU);
    }
}

/// Deterministic integer hash for seeding scenery and phases.
pub fn scatter_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Map a hash to [0, 1).
pub fn unit(h: u32) -> f32 {
    (h >> 8) as f32 / (1u32 << 24) as f32
}

/// Initial orbital phase in [0, 2π) for the body at `index`.
pub fn initial_phase(seed: u32, index: usize) -> f32 {
    let h = scatter_hash(seed ^ scatter_hash(index as u32 * 7 + 31));
    unit(h) * std::f32::consts::TAU
}
