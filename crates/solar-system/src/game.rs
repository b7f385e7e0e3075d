/// Solar System: interactive 3D orrery.
///
/// SDF spheres for the sun, planets and belt, vectors for stars and orbit
/// guides. Click a planet to frame it, click empty space to return, wheel to
/// zoom; the host UI drives speed sliders, reset and pause via custom events.

use orrery_engine::*;

use crate::catalog::Catalog;
use crate::config::SceneConfig;
use crate::sim::{Change, SimulationContext};
use crate::view::SceneView;

// ── Game event kinds to the host ─────────────────────────────────────

const EVENT_TOOLTIP: f32 = 1.0;
const EVENT_SELECTION: f32 = 2.0;
const EVENT_SPEED: f32 = 3.0;
const EVENT_PAUSE: f32 = 4.0;

pub struct SolarSystem {
    sim: SimulationContext,
    view: Option<SceneView>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        let catalog = Catalog::load(config.catalog).expect("Failed to load embedded catalog");
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: SceneConfig, catalog: Catalog) -> Self {
        let engine = GameConfig::default();
        Self {
            sim: SimulationContext::new(config, catalog, engine.viewport_width, engine.viewport_height),
            view: None,
        }
    }

    pub fn sim(&self) -> &SimulationContext {
        &self.sim
    }

    pub fn view(&self) -> Option<&SceneView> {
        self.view.as_ref()
    }

    /// The active catalog as JSON, for the host to build labels and sliders.
    pub fn catalog_json(&self) -> String {
        self.sim.catalog().to_json().unwrap_or_else(|err| {
            log::error!("catalog serialization failed: {}", err);
            String::new()
        })
    }

    /// Tooltip and selection go first; speed and pause updates follow.
    fn emit_events(&mut self, ctx: &mut EngineContext) {
        let tip = self.sim.tooltip();
        let tip_idx = tip.body.map(|i| i as f32).unwrap_or(-1.0);
        ctx.emit_event(GameEvent::new(EVENT_TOOLTIP, tip_idx, tip.pos.x, tip.pos.y));

        let selection = match self.sim.info_panel() {
            Some(info) => GameEvent::new(EVENT_SELECTION, info.body.0 as f32, info.distance, info.size),
            None => GameEvent::new(EVENT_SELECTION, -1.0, 0.0, 0.0),
        };
        ctx.emit_event(selection);

        for change in self.sim.drain_changes() {
            match change {
                Change::Speed(id, speed) => {
                    ctx.emit_event(GameEvent::new(EVENT_SPEED, id.0 as f32, speed, 0.0));
                }
                Change::AllSpeeds => {
                    for (id, _, speed) in self.sim.speeds().iter() {
                        ctx.emit_event(GameEvent::new(EVENT_SPEED, id.0 as f32, speed, 0.0));
                    }
                }
                Change::Paused(paused) => {
                    ctx.emit_event(GameEvent::new(EVENT_PAUSE, if paused { 1.0 } else { 0.0 }, 0.0, 0.0));
                }
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        let catalog = self.sim.catalog();
        let spheres = 1 + catalog.len() + catalog.belt.map(|b| b.count).unwrap_or(0);
        // Tooltip + selection plus four full speed sweeps.
        let events = (2 + 4 * catalog.len()).next_power_of_two().max(32);
        GameConfig {
            max_sdf_instances: spheres.next_power_of_two().max(64),
            max_events: events,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.sim.resize(ctx.camera.viewport_width, ctx.camera.viewport_height);
        self.view = Some(SceneView::spawn(ctx, &self.sim));
        log::info!(
            "catalog {:?}: {} planets, {} asteroids",
            self.sim.catalog().version,
            self.sim.bodies().len(),
            self.sim.belt().map(|b| b.rocks.len()).unwrap_or(0)
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // ── Input, in arrival order, before anything moves ───────────
        for event in input.iter() {
            self.sim.handle(event);
        }

        // ── Simulation + tooltip ─────────────────────────────────────
        self.sim.frame(dt);

        // ── Presentation ─────────────────────────────────────────────
        if let Some(view) = &self.view {
            view.sync(ctx, &self.sim);
            view.draw(ctx, &self.sim);
        }

        self.emit_events(ctx);
    }
}
