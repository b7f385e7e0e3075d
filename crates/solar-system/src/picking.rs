/// Ray-cast picking against body spheres.
///
/// Recomputed on demand every frame; nothing is cached between calls.

use glam::Vec2;
use orrery_engine::{Camera3D, Ray};

use crate::body::{Body, BodyId};

/// The closest body under an NDC point, if any.
pub fn pick(ndc: Vec2, camera: &Camera3D, bodies: &[Body]) -> Option<BodyId> {
    pick_ray(&camera.ray_from_ndc(ndc), bodies)
}

/// The body whose sphere `ray` enters first.
pub fn pick_ray(ray: &Ray, bodies: &[Body]) -> Option<BodyId> {
    bodies
        .iter()
        .filter_map(|b| ray.intersect_sphere(b.position, b.size).map(|t| (t, b.id)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use glam::Vec3;

    fn body_at(id: usize, distance: f32, size: f32) -> Body {
        let entry = CatalogEntry {
            name: format!("B{}", id),
            distance,
            size,
            color: 0xffffff,
            speed: 0.01,
        };
        Body::from_entry(BodyId(id), &entry, 0.0)
    }

    fn camera_on_x_axis() -> Camera3D {
        let mut cam = Camera3D::new(45.0, 0.1, 2000.0, 800.0, 600.0);
        cam.set_pose(Vec3::new(200.0, 0.0, 0.0), Vec3::ZERO);
        cam
    }

    #[test]
    fn nearest_of_stacked_bodies_wins() {
        // Both sit on the +X axis in line with the camera.
        let bodies = vec![body_at(0, 20.0, 2.0), body_at(1, 50.0, 2.0)];
        assert_eq!(pick(Vec2::ZERO, &camera_on_x_axis(), &bodies), Some(BodyId(1)));
    }

    #[test]
    fn miss_and_empty_return_none() {
        let bodies = vec![body_at(0, 20.0, 2.0)];
        assert_eq!(pick(Vec2::new(0.9, 0.9), &camera_on_x_axis(), &bodies), None);
        assert_eq!(pick(Vec2::ZERO, &camera_on_x_axis(), &[]), None);
    }

    #[test]
    fn pick_uses_projected_position() {
        let mut cam = Camera3D::new(45.0, 0.1, 2000.0, 800.0, 600.0);
        cam.set_pose(Vec3::new(0.0, 100.0, 150.0), Vec3::ZERO);
        let body = body_at(3, 35.0, 2.8);
        let screen = cam.project(body.position).unwrap().pos;
        let ndc = cam.screen_to_ndc(screen);
        assert_eq!(pick(ndc, &cam, &[body]), Some(BodyId(3)));
    }
}
