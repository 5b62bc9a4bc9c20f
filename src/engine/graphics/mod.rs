pub mod renderer;
pub mod vertex;

pub use renderer::Renderer;
pub use vertex::{Instance, Vertex};
