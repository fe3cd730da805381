//! Scene description, per-frame planning and the renderer that executes it.

pub mod blocks;
pub mod camera;
pub mod flags;
pub mod frame;
pub mod input;
pub mod programs;
pub mod quad;
pub mod renderer;
pub mod scene;
pub mod viewport;

pub use renderer::Renderer;
