//! Error type shared by the whole crate.

use std::path::PathBuf;

/// Everything that can go wrong while setting up or running the renderer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to build window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("OpenGL error: {0}")]
    Gl(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("program `{program}` failed to link: {log}")]
    ProgramLink { program: &'static str, log: String },

    #[error("failed to load texture {}: {source}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to set up logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
