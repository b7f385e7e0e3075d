use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of projected spheres (default: 512).
    pub max_sdf_instances: usize,
    /// Maximum number of vector vertices (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Optional cap on the frame delta handed to the game, in seconds
    /// (default: none, deltas are the raw wall-clock time).
    pub max_frame_dt: Option<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_sdf_instances: 512,
            max_vector_vertices: 65536,
            max_events: 32,
            max_lights: crate::bridge::protocol::DEFAULT_MAX_LIGHTS,
            max_frame_dt: None,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. `input` holds everything that arrived since the previous
    /// frame, in arrival order; `dt` is the wall-clock delta in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    /// Camera used to project the scene for this frame.
    pub camera: Camera3D,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context whose buffers are sized from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Camera3D::default();
        camera.resize(config.viewport_width, config.viewport_height);
        Self {
            scene: Scene::new(),
            camera,
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            lights: LightState::with_capacity(config.max_lights),
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full ({}): dropping kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, vector geometry).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
