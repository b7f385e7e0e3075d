/// SharedArrayBuffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [SDF instances: max_sdf_instances × 12 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame alongside the counts.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_VIEWPORT_WIDTH: usize = 3;
pub const HEADER_VIEWPORT_HEIGHT: usize = 4;
pub const HEADER_MAX_SDF_INSTANCES: usize = 5;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 6;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 7;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 8;
pub const HEADER_MAX_LIGHTS: usize = 9;
pub const HEADER_LIGHT_COUNT: usize = 10;
pub const HEADER_MAX_EVENTS: usize = 11;
pub const HEADER_EVENT_COUNT: usize = 12;
pub const HEADER_AMBIENT_R: usize = 13;
pub const HEADER_AMBIENT_G: usize = 14;
pub const HEADER_AMBIENT_B: usize = 15;

pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per SDF instance: x, y, radius, rotation, r, g, b, shininess, emissive, depth, pad×2.
pub const SDF_INSTANCE_FLOATS: usize = 12;

/// Floats per vector vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per projected light: x, y, depth, r, g, b, intensity, visible.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_sdf_instances: usize,
    pub max_vector_vertices: usize,
    pub max_lights: usize,
    pub max_events: usize,

    pub sdf_data_floats: usize,
    pub vector_data_floats: usize,
    pub light_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where SDF data begins.
    pub sdf_data_offset: usize,
    pub vector_data_offset: usize,
    pub light_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(
        max_sdf_instances: usize,
        max_vector_vertices: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let sdf_data_floats = max_sdf_instances * SDF_INSTANCE_FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let vector_data_offset = sdf_data_offset + sdf_data_floats;
        let light_data_offset = vector_data_offset + vector_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_sdf_instances,
            max_vector_vertices,
            max_lights,
            max_events,
            sdf_data_floats,
            vector_data_floats,
            light_data_floats,
            event_data_floats,
            sdf_data_offset,
            vector_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_sdf_instances,
            config.max_vector_vertices,
            config.max_lights,
            config.max_events,
        )
    }

    /// Fill the capacity fields of a header. Counts are left untouched.
    pub fn write_capacities(&self, header: &mut [f32; HEADER_FLOATS]) {
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_SDF_INSTANCES] = self.max_sdf_instances as f32;
        header[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        header[HEADER_MAX_LIGHTS] = self.max_lights as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
    }
}
