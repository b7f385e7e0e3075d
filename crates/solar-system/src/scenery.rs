//! Non-interactive scenery: asteroid belt, starfield and orbit guides.
//!
//! All of it is generated deterministically from the scene seed.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::body::{scatter_hash, unit};
use crate::catalog::BeltSpec;
use crate::orbit;

/// One belt rock: a fixed radius, phase offset and height within the belt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rock {
    pub radius: f32,
    pub phase: f32,
    pub height: f32,
    pub size: f32,
}

/// Rocks orbiting together at the belt speed.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidBelt {
    pub rocks: Vec<Rock>,
    pub speed: f32,
    pub color: u32,
    /// Shared orbital phase; each rock adds its own offset.
    angle: f32,
}

impl AsteroidBelt {
    pub fn generate(spec: &BeltSpec, seed: u32) -> Self {
        let rocks = (0..spec.count as u32)
            .map(|i| {
                let h1 = scatter_hash(seed ^ (i * 7 + 31));
                let h2 = scatter_hash(seed ^ (i * 13 + 97));
                let h3 = scatter_hash(seed ^ (i * 19 + 151));
                let h4 = scatter_hash(seed ^ (i * 23 + 211));
                Rock {
                    radius: spec.inner + unit(h1) * (spec.outer - spec.inner),
                    phase: unit(h2) * TAU,
                    height: (unit(h3) - 0.5) * spec.thickness,
                    size: spec.min_size + unit(h4) * (spec.max_size - spec.min_size),
                }
            })
            .collect();
        Self {
            rocks,
            speed: spec.speed,
            color: spec.color,
            angle: 0.0,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.angle = orbit::advance(self.angle, delta, self.speed).rem_euclid(TAU);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn rock_position(&self, rock: &Rock) -> Vec3 {
        orbit::position(rock.radius, self.angle + rock.phase) + Vec3::new(0.0, rock.height, 0.0)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.rocks.iter().map(|r| self.rock_position(r))
    }
}

/// Stars scattered uniformly in a cube of edge `spread` centred on the origin.
pub fn starfield(count: usize, spread: f32, seed: u32) -> Vec<Vec3> {
    let s = seed.rotate_left(16);
    (0..count as u32)
        .map(|i| {
            let coord = |k: u32| (unit(scatter_hash(s ^ (i * 3 + k).wrapping_mul(0x9e37))) - 0.5) * spread;
            Vec3::new(coord(0), coord(1), coord(2))
        })
        .collect()
}

/// Closed ring of `segments` points at `radius` on the ecliptic.
pub fn orbit_ring(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| orbit::position(radius, i as f32 / segments as f32 * TAU))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> BeltSpec {
        BeltSpec {
            inner: 40.0,
            outer: 45.0,
            count: 300,
            thickness: 1.0,
            speed: 0.002,
            min_size: 0.15,
            max_size: 0.45,
            color: 0x888888,
        }
    }

    #[test]
    fn belt_rocks_stay_in_range() {
        let mut belt = AsteroidBelt::generate(&spec(), 7);
        assert_eq!(belt.rocks.len(), 300);
        for _ in 0..10 {
            belt.advance(0.5);
        }
        for rock in &belt.rocks {
            assert!(rock.radius >= 40.0 && rock.radius <= 45.0);
            assert!(rock.height.abs() <= 0.5);
            assert!(rock.size >= 0.15 && rock.size <= 0.45);
            let p = belt.rock_position(rock);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - rock.radius).abs() < 1e-3);
            assert_eq!(p.y, rock.height);
        }
    }

    #[test]
    fn belt_advances_at_belt_speed() {
        let mut belt = AsteroidBelt::generate(&spec(), 7);
        belt.advance(1.0);
        assert!((belt.angle() - 0.12).abs() < 1e-6);
    }

    #[test]
    fn belt_is_deterministic() {
        assert_eq!(AsteroidBelt::generate(&spec(), 7), AsteroidBelt::generate(&spec(), 7));
        assert_ne!(AsteroidBelt::generate(&spec(), 7), AsteroidBelt::generate(&spec(), 8));
    }

    #[test]
    fn starfield_fills_cube() {
        let stars = starfield(1000, 2000.0, 7);
        assert_eq!(stars.len(), 1000);
        assert!(stars.iter().all(|s| s.abs().max_element() <= 1000.0));
        assert!(stars.iter().any(|s| s.x > 500.0));
        assert!(stars.iter().any(|s| s.x < -500.0));
    }

    #[test]
    fn orbit_ring_is_closed_circle() {
        let ring = orbit_ring(27.0, 64);
        assert_eq!(ring.len(), 64);
        assert!((ring[0] - Vec3::new(27.0, 0.0, 0.0)).length() < 1e-5);
        for p in &ring {
            assert!((p.length() - 27.0).abs() < 1e-3);
        }
    }
}
