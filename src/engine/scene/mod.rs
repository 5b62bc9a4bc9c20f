//! Scene graph: objects, transforms and materials.

pub mod graph;
pub mod transform;

pub use graph::{Material, ObjectId, Scene, SceneObject};
pub use transform::Transform;
