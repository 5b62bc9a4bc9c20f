//! Engine module containing graphics, input, window management, the scene graph,
//! picking and per-frame animation.

pub mod animation;
pub mod graphics;
pub mod input;
pub mod physics;
pub mod scene;
pub mod window;

// Re-export commonly used types
pub use animation::{Timers, Tweens};
pub use graphics::{renderer::Renderer, vertex::Instance};
pub use physics::{raycast, LayerMask, Ray, RaycastHit};
pub use scene::{ObjectId, Scene, SceneObject, Transform};
