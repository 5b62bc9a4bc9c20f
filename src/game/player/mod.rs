pub mod controlled_view;

pub use controlled_view::{lerp_angle, ControlledView, Crosshair, ViewRequests};
