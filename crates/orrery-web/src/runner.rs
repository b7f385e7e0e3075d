use orrery_engine::bridge::protocol::{
    HEADER_AMBIENT_B, HEADER_AMBIENT_G, HEADER_AMBIENT_R, HEADER_EVENT_COUNT,
    HEADER_FRAME_COUNTER, HEADER_LIGHT_COUNT, HEADER_SDF_INSTANCE_COUNT,
    HEADER_VECTOR_VERTEX_COUNT, HEADER_VIEWPORT_HEIGHT, HEADER_VIEWPORT_WIDTH,
};
use orrery_engine::{
    build_sdf_buffer, EngineContext, FrameClock, Game, GameConfig, InputEvent, InputQueue,
    ProtocolLayout, SDFBuffer, HEADER_FLOATS,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    sdf_buffer: SDFBuffer,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame_counter: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let mut header = [0.0; HEADER_FLOATS];
        layout.write_capacities(&mut header);

        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            sdf_buffer: SDFBuffer::with_capacity(config.max_sdf_instances),
            clock: FrameClock::new(config.max_frame_dt),
            layout,
            header,
            config,
            frame_counter: 0,
            initialized: false,
            game,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue. It is applied at the start of the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame from a `requestAnimationFrame` timestamp (milliseconds).
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms);
        self.step(dt);
    }

    /// Run one frame with an explicit delta in seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = self.clock.advance(dt);
        self.step(dt);
    }

    fn step(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input, dt);
        self.input.drain();

        build_sdf_buffer(self.ctx.scene.iter(), &self.ctx.camera, &mut self.sdf_buffer);
        self.ctx.lights.project(&self.ctx.camera);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.write_header();
    }

    fn write_header(&mut self) {
        let [ar, ag, ab] = self.ctx.lights.ambient();
        let vertex_count = self.vector_vertex_count() as f32;
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        h[HEADER_VIEWPORT_WIDTH] = self.ctx.camera.viewport_width;
        h[HEADER_VIEWPORT_HEIGHT] = self.ctx.camera.viewport_height;
        h[HEADER_SDF_INSTANCE_COUNT] = self.sdf_buffer.instance_count() as f32;
        h[HEADER_VECTOR_VERTEX_COUNT] = vertex_count;
        h[HEADER_LIGHT_COUNT] = self.ctx.lights.projected().len() as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_AMBIENT_R] = ar;
        h[HEADER_AMBIENT_G] = ag;
        h[HEADER_AMBIENT_B] = ab;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_counter
    }

    pub fn sdf_buffer(&self) -> &SDFBuffer {
        &self.sdf_buffer
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.projected().len() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.camera.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.camera.viewport_height
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    #[cfg(not(feature = "vectors"))]
    pub fn vector_vertex_count(&self) -> u32 {
        0
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_sdf_instances(&self) -> u32 {
        self.layout.max_sdf_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::HEADER_MAX_SDF_INSTANCES;
    use orrery_engine::{Entity, GameEvent, MeshComponent, SDFColor};
    use glam::Vec3;

    /// Spawns one sphere at the origin and echoes every frame's input count and dt.
    struct Probe {
        frames: Vec<(usize, f32)>,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            GameConfig { max_sdf_instances: 4, ..GameConfig::default() }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_mesh(MeshComponent::sphere(1.0, SDFColor::default())),
            );
            ctx.camera.set_pose(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
            self.frames.push((input.len(), dt));
            ctx.emit_event(GameEvent::new(1.0, input.len() as f32, dt, 0.0));
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut r = GameRunner::new(Probe { frames: Vec::new() });
        r.init();
        r
    }

    #[test]
    fn frame_before_init_does_nothing() {
        let mut r = GameRunner::new(Probe { frames: Vec::new() });
        r.frame(0.0);
        assert!(r.game().frames.is_empty());
        assert_eq!(r.frame_count(), 0);
    }

    #[test]
    fn first_frame_has_zero_delta_and_later_frames_are_wall_clock() {
        let mut r = runner();
        r.frame(1000.0);
        r.frame(1016.0);
        r.frame(9000.0);
        let dts: Vec<f32> = r.game().frames.iter().map(|f| f.1).collect();
        assert_eq!(dts[0], 0.0);
        assert!((dts[1] - 0.016).abs() < 1e-4);
        assert!((dts[2] - 7.984).abs() < 1e-4);
    }

    #[test]
    fn input_is_delivered_once_in_next_frame() {
        let mut r = runner();
        r.push_input(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        r.push_input(InputEvent::Wheel { delta_y: 3.0 });
        r.tick(0.016);
        r.tick(0.016);
        assert_eq!(r.game().frames[0].0, 2);
        assert_eq!(r.game().frames[1].0, 0);
    }

    #[test]
    fn frame_builds_buffers_and_header() {
        let mut r = runner();
        r.tick(0.016);

        assert_eq!(r.sdf_instance_count(), 1);
        assert_eq!(r.game_events_len(), 1);
        let header = r.header();
        assert_eq!(header[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(header[HEADER_SDF_INSTANCE_COUNT], 1.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(header[HEADER_MAX_SDF_INSTANCES], 4.0);
        assert_eq!(header[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(header[HEADER_VECTOR_VERTEX_COUNT], r.vector_vertex_count() as f32);
    }
}
