//! Ray casting against box colliders for picking.

use glam::Vec3;

use crate::engine::scene::{ObjectId, Scene};

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned box in the owning object's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxCollider {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub fn from_layers(layers: &[u32]) -> Self {
        LayerMask(layers.iter().fold(0, |acc, &l| acc | (1u32 << l.min(31))))
    }

    pub fn contains(&self, layer: u32) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub object: ObjectId,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Slab test in the box's own space. Returns the entry distance and the local face normal.
/// A box that contains the origin is not hit.
fn intersect_box(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<(f32, Vec3)> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut near_normal = Vec3::ZERO;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let mut axis_normal = Vec3::ZERO;
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let mut t0 = (min[axis] - o) / d;
        let mut t1 = (max[axis] - o) / d;
        axis_normal[axis] = -1.0;
        let mut n0 = axis_normal;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
            n0 = -axis_normal;
        }
        if t0 > t_near {
            t_near = t0;
            near_normal = n0;
        }
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_near < 0.0 {
        return None;
    }
    Some((t_near, near_normal))
}

/// Returns the nearest collider hit within `max_distance` on a layer selected by `mask`.
pub fn raycast(scene: &Scene, ray: &Ray, max_distance: f32, mask: LayerMask) -> Option<RaycastHit> {
    let mut best: Option<RaycastHit> = None;

    for (id, object) in scene.iter() {
        let Some(collider) = object.collider else { continue };
        if !mask.contains(object.layer) {
            continue;
        }
        let world = scene.world_matrix(id);
        if world.determinant().abs() < f32::EPSILON {
            continue;
        }
        let inv = world.inverse();
        // Direction stays unnormalized so `t` is still measured in world units.
        let local_origin = inv.transform_point3(ray.origin);
        let local_dir = inv.transform_vector3(ray.direction);

        let Some((t, local_normal)) = intersect_box(local_origin, local_dir, collider.min(), collider.max()) else {
            continue;
        };
        if t > max_distance || best.is_some_and(|b| b.distance <= t) {
            continue;
        }
        let normal = inv.transpose().transform_vector3(local_normal).normalize_or_zero();
        best = Some(RaycastHit {
            object: id,
            point: ray.at(t),
            normal,
            distance: t,
        });
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::{SceneObject, Transform};
    use glam::Quat;

    fn boxed(scene: &mut Scene, name: &str, pos: Vec3, layer: u32) -> ObjectId {
        scene.spawn(
            SceneObject::new(name, Transform::from_position(pos))
                .with_collider(BoxCollider::new(Vec3::ZERO, Vec3::splat(0.5)))
                .with_layer(layer),
        )
    }

    #[test]
    fn hits_nearest_box() {
        let mut scene = Scene::new();
        let far = boxed(&mut scene, "far", Vec3::new(0.0, 0.0, -6.0), 0);
        let near = boxed(&mut scene, "near", Vec3::new(0.0, 0.0, -3.0), 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = raycast(&scene, &ray, 10.0, LayerMask::ALL).unwrap();
        assert_eq!(hit.object, near);
        assert_ne!(hit.object, far);
        assert!((hit.distance - 2.5).abs() < 1e-5);
        assert!(hit.normal.abs_diff_eq(Vec3::Z, 1e-5));
        assert!(hit.point.abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-5));
    }

    #[test]
    fn respects_range_and_layers() {
        let mut scene = Scene::new();
        boxed(&mut scene, "ignored", Vec3::new(0.0, 0.0, -3.0), 4);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(raycast(&scene, &ray, 2.0, LayerMask::ALL).is_none());
        assert!(raycast(&scene, &ray, 10.0, LayerMask::from_layers(&[1, 2])).is_none());
        assert!(raycast(&scene, &ray, 10.0, LayerMask::from_layers(&[4])).is_some());
    }

    #[test]
    fn ignores_boxes_behind_origin() {
        let mut scene = Scene::new();
        boxed(&mut scene, "behind", Vec3::new(0.0, 0.0, 3.0), 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(raycast(&scene, &ray, 10.0, LayerMask::ALL).is_none());
    }

    #[test]
    fn hits_rotated_and_scaled_box() {
        let mut scene = Scene::new();
        let id = scene.spawn(
            SceneObject::new(
                "thin",
                Transform::from_position(Vec3::new(2.0, 0.0, 0.0))
                    .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2))
                    .with_scale(Vec3::new(1.0, 2.0, 1.0)),
            )
            .with_collider(BoxCollider::new(Vec3::ZERO, Vec3::new(0.5, 0.1, 0.5))),
        );
        // Local Y (scaled to 0.2 half extent) lies along world X after the rotation.
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = raycast(&scene, &ray, 10.0, LayerMask::ALL).unwrap();
        assert_eq!(hit.object, id);
        assert!((hit.distance - 1.8).abs() < 1e-4);
        assert!(hit.normal.abs_diff_eq(Vec3::NEG_X, 1e-4));
    }

    #[test]
    fn box_around_origin_is_skipped() {
        let mut scene = Scene::new();
        boxed(&mut scene, "around", Vec3::ZERO, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(raycast(&scene, &ray, 10.0, LayerMask::ALL).is_none());

        let above = boxed(&mut scene, "above", Vec3::new(0.0, 3.0, 0.0), 0);
        let hit = raycast(&scene, &ray, 10.0, LayerMask::ALL).unwrap();
        assert_eq!(hit.object, above);
        assert!((hit.distance - 2.5).abs() < 1e-5);
    }
}
