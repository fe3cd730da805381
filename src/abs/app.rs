//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2 window and the
//! OpenGL 4.5 core context the renderer draws with.

use std::sync::Arc;

use crate::abs::debug;
use crate::error::{Error, Result};

/// The OpenGL version requested from the window system.
pub const GL_VERSION: (u8, u8) = (4, 5);

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a resizable window of the given size with a debug-enabled core context.
    ///
    /// GL debug output is routed into the `log` facade before the context is shared.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl.video().map_err(Error::Sdl)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(GL_VERSION.0, GL_VERSION.1);
        gl_attr.set_context_flags().debug().set();
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()?;
        let gl_context = window.gl_create_context().map_err(Error::Sdl)?;
        window.gl_make_current(&gl_context).map_err(Error::Sdl)?;

        let mut gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        log::info!(
            "created {}x{} window with OpenGL {}.{} context",
            width,
            height,
            GL_VERSION.0,
            GL_VERSION.1
        );
        debug::install(&mut gl);

        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Size of the window's drawable surface in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}
