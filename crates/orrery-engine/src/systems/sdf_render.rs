use crate::components::entity::Entity;
use crate::renderer::camera::Camera3D;
use crate::renderer::sdf_instance::{SDFBuffer, SDFInstance};

/// Build the SDF instance buffer from entities with mesh components.
///
/// Every visible mesh is projected through `camera`, sized by its perspective
/// scale and sorted back-to-front (painter's algorithm). Meshes behind the
/// near plane are skipped. When there are more meshes than the buffer holds,
/// the farthest ones are dropped.
pub fn build_sdf_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    buffer: &mut SDFBuffer,
) {
    buffer.clear();

    let mut projected: Vec<SDFInstance> = entities
        .filter(|e| e.active)
        .filter_map(|entity| {
            let mesh = entity.mesh.as_ref()?;
            let proj = camera.project(entity.pos)?;
            Some(SDFInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                radius: mesh.shape.bounding_radius() * proj.scale,
                rotation: entity.rotation,
                r: mesh.color.r,
                g: mesh.color.g,
                b: mesh.color.b,
                shininess: mesh.shininess,
                emissive: mesh.emissive,
                depth: proj.depth,
                _pad0: 0.0,
                _pad1: 0.0,
            })
        })
        .collect();

    projected.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));

    let overflow = projected.len().saturating_sub(buffer.capacity());
    if overflow > 0 {
        log::warn!("sdf buffer full: dropping {} farthest meshes", overflow);
    }
    for instance in projected.into_iter().skip(overflow) {
        buffer.push(instance);
    }
}
