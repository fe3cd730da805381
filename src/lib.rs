//! A small OpenGL demo: four colored walls and a normal-mapped grass floor, rendered into an
//! offscreen target and blitted to an SDL2 window.

pub mod abs;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use error::{Error, Result};
