//! WebGPU rendering module
//!
//! Colored-triangle pipeline; entity meshes are built once per session and
//! translated into a single vertex list each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::SceneMeshes;
