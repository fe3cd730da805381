//! Thin RAII wrappers over the OpenGL objects the renderer uses, plus the SDL2 window that
//! owns the context.

pub mod app;
pub mod debug;
pub mod framebuffer;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod uniform_buffer;

pub use app::*;
pub use framebuffer::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
pub use uniform_buffer::*;
