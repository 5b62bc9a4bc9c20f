pub mod raycast;

pub use raycast::{raycast, BoxCollider, LayerMask, Ray, RaycastHit};
