/// Presentation layer: engine entities and vector guides for the simulation.
///
/// Bodies stay plain records in `SimulationContext`; this module owns the
/// renderable handles, related to bodies by `BodyId` → `EntityId`, and copies
/// state into them once per frame.

use glam::{Vec2, Vec3};
use orrery_engine::*;

use crate::body::BodyId;
use crate::scenery;
use crate::sim::SimulationContext;

const PLANET_SHININESS: f32 = 16.0;
const SUN_EMISSIVE: f32 = 1.0;
const ROCK_SHININESS: f32 = 4.0;

pub struct SceneView {
    sun: EntityId,
    /// Indexed by `BodyId`.
    planets: Vec<EntityId>,
    rocks: Vec<EntityId>,
    stars: Vec<Vec3>,
    rings: Vec<Vec<Vec3>>,
}

impl SceneView {
    /// Spawn one entity per body, the sun and every belt rock, and set up lighting.
    pub fn spawn(ctx: &mut EngineContext, sim: &SimulationContext) -> Self {
        let config = sim.config();
        let catalog = sim.catalog();

        let sun = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun)
                .with_tag("Sun")
                .with_mesh(
                    MeshComponent::sphere(catalog.sun.size, SDFColor::from_hex(catalog.sun.color))
                        .with_emissive(SUN_EMISSIVE),
                ),
        );

        let planets = sim
            .bodies()
            .iter()
            .map(|body| {
                let id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(id)
                        .with_tag(body.name.clone())
                        .with_pos(body.position)
                        .with_mesh(
                            MeshComponent::sphere(body.size, SDFColor::from_hex(body.color))
                                .with_shininess(PLANET_SHININESS),
                        ),
                );
                id
            })
            .collect();

        let rocks = match sim.belt() {
            Some(belt) => belt
                .rocks
                .iter()
                .map(|rock| {
                    let id = ctx.next_id();
                    ctx.scene.spawn(
                        Entity::new(id)
                            .with_tag("asteroid")
                            .with_pos(belt.rock_position(rock))
                            .with_mesh(
                                MeshComponent::sphere(rock.size, SDFColor::from_hex(belt.color))
                                    .with_shininess(ROCK_SHININESS),
                            ),
                    );
                    id
                })
                .collect(),
            None => Vec::new(),
        };

        let ambient = SDFColor::from_hex(config.ambient_color);
        ctx.lights.set_ambient(ambient.r, ambient.g, ambient.b);
        let sun_light = SDFColor::from_hex(config.sun_light_color);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [sun_light.r, sun_light.g, sun_light.b],
            config.sun_light_intensity,
        ));

        let stars = scenery::starfield(config.star_count, config.star_spread, config.seed);
        let rings = sim
            .bodies()
            .iter()
            .map(|b| scenery::orbit_ring(b.distance, config.orbit_segments))
            .collect();

        Self { sun, planets, rocks, stars, rings }
    }

    pub fn sun(&self) -> EntityId {
        self.sun
    }

    pub fn entity_for(&self, body: BodyId) -> Option<EntityId> {
        self.planets.get(body.0).copied()
    }

    pub fn rock_count(&self) -> usize {
        self.rocks.len()
    }

    /// Copy body positions, spins and the camera into the engine.
    pub fn sync(&self, ctx: &mut EngineContext, sim: &SimulationContext) {
        for body in sim.bodies() {
            let Some(id) = self.entity_for(body.id) else { continue };
            if let Some(entity) = ctx.scene.get_mut(id) {
                entity.pos = body.position;
                entity.rotation = body.spin;
            }
        }

        if let Some(belt) = sim.belt() {
            for (id, pos) in self.rocks.iter().zip(belt.positions()) {
                if let Some(entity) = ctx.scene.get_mut(*id) {
                    entity.pos = pos;
                }
            }
        }

        ctx.camera.clone_from(sim.camera());
    }

    /// Tessellate the starfield and orbit guides for this frame's camera.
    pub fn draw(&self, ctx: &mut EngineContext, sim: &SimulationContext) {
        let config = sim.config();
        let camera = &ctx.camera;
        let vectors = &mut ctx.vectors;

        let half = config.star_size * 0.5;
        for star in &self.stars {
            let Some(p) = camera.project(*star) else { continue };
            if p.depth > camera.far || !on_screen(camera, p.pos) {
                continue;
            }
            vectors.fill_rect(p.pos - Vec2::splat(half), config.star_size, config.star_size, VectorColor::WHITE);
        }

        let ring_color = VectorColor::WHITE.with_alpha(config.orbit_alpha);
        for ring in &self.rings {
            let projected: Vec<Option<Vec2>> = ring.iter().map(|p| camera.project(*p).map(|p| p.pos)).collect();
            if projected.iter().all(Option::is_some) {
                let points: Vec<Vec2> = projected.into_iter().flatten().collect();
                vectors.stroke_polygon(&points, config.orbit_width, ring_color);
                continue;
            }
            // Part of the ring is behind the camera: stroke the visible runs.
            for run in visible_runs(&projected) {
                vectors.stroke_polyline(&run, config.orbit_width, ring_color);
            }
        }
    }
}

/// Split a closed ring into the runs of consecutive visible points. A run that
/// crosses the seam between the last and first point comes back as one run.
fn visible_runs(ring: &[Option<Vec2>]) -> Vec<Vec<Vec2>> {
    let mut runs: Vec<Vec<Vec2>> = ring
        .split(Option::is_none)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().flatten().copied().collect())
        .collect();
    let wraps = matches!((ring.first(), ring.last()), (Some(Some(_)), Some(Some(_))));
    if wraps && runs.len() > 1 {
        let head = runs.remove(0);
        if let Some(tail) = runs.last_mut() {
            tail.extend(head);
        }
    }
    runs.retain(|run| run.len() >= 2);
    runs
}

fn on_screen(camera: &Camera3D, pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= camera.viewport_width && pos.y <= camera.viewport_height
}
