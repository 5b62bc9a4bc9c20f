//! Flat object store with parent/child links.

use glam::{Mat4, Vec3};
use log::debug;

use crate::engine::physics::BoxCollider;
use crate::engine::scene::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: [f32; 4],
}

impl Material {
    pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub parent: Option<ObjectId>,
    pub children: Vec<ObjectId>,
    pub material: Option<Material>,
    pub collider: Option<BoxCollider>,
    /// Physics layer, 0..=31.
    pub layer: u32,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            parent: None,
            children: Vec::new(),
            material: None,
            collider: None,
            layer: 0,
            visible: true,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_collider(mut self, collider: BoxCollider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer.min(31);
        self
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Spawns `object` as the last child of `parent`. Returns `None` when the parent does not exist.
    pub fn spawn_child(&mut self, parent: ObjectId, mut object: SceneObject) -> Option<ObjectId> {
        if parent.0 >= self.objects.len() {
            return None;
        }
        object.parent = Some(parent);
        let id = self.spawn(object);
        self.objects[parent.0].children.push(id);
        Some(id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn child(&self, id: ObjectId, index: usize) -> Option<ObjectId> {
        self.get(id)?.children.get(index).copied()
    }

    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.get(id).map(|o| o.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id)?.parent
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(cur) = current {
            match self.get(cur) {
                Some(obj) => {
                    mat = obj.transform.to_matrix() * mat;
                    current = obj.parent;
                }
                None => break,
            }
        }
        mat
    }

    pub fn world_transform(&self, id: ObjectId) -> Transform {
        Transform::from_matrix(&self.world_matrix(id))
    }

    pub fn world_position(&self, id: ObjectId) -> Vec3 {
        self.world_matrix(id).w_axis.truncate()
    }

    /// Moves `id` under `new_parent` (or to the root) without changing where it sits in the world.
    pub fn set_parent_keep_world(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> bool {
        if self.get(id).is_none() || new_parent.is_some_and(|p| self.get(p).is_none()) {
            return false;
        }
        let world = self.world_matrix(id);
        let parent_inv = new_parent
            .map(|p| self.world_matrix(p).inverse())
            .unwrap_or(Mat4::IDENTITY);

        if let Some(old) = self.objects[id.0].parent {
            self.objects[old.0].children.retain(|c| *c != id);
        }
        if let Some(p) = new_parent {
            self.objects[p.0].children.push(id);
        }
        let obj = &mut self.objects[id.0];
        obj.parent = new_parent;
        obj.transform = Transform::from_matrix(&(parent_inv * world));
        debug!("Reparented {} to {:?}", obj.name, new_parent);
        true
    }
}
