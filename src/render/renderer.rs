//! The scene renderer.
//!
//! [`Renderer`] owns every GPU resource of the demo and draws one frame per call to
//! [`Renderer::draw_frame`]. It is created once the GL context exists and is handed window
//! events by the main loop.

use std::{path::Path, sync::Arc};

use glam::Vec3;
use glow::HasContext;

use crate::abs::{Framebuffer, Mesh, ShaderProgram, Texture, UniformBuffer, location};
use crate::config::TextureConfig;
use crate::error::Result;
use crate::render::{
    blocks::{LIGHT_BLOCK_SLOT, LightBlock, VIEW_BLOCK_SLOT, ViewBlock},
    camera::Camera,
    frame::{DrawCall, FramePlan, TextureBinding},
    input::{ButtonAction, MouseTracker},
    programs::ProgramSet,
    quad,
    scene::{self, Surface},
    viewport::Viewport,
};

/// Placeholder used when the diffuse map cannot be decoded.
const FALLBACK_DIFFUSE: [u8; 4] = [255, 255, 255, 255];
/// Placeholder used when the normal map cannot be decoded: a flat, unperturbed normal.
const FALLBACK_NORMAL: [u8; 4] = [128, 128, 255, 255];

const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

pub const DIFFUSE_UNIT: u32 = 0;
pub const NORMAL_MAP_UNIT: u32 = 1;

fn load_or_fallback(gl: &Arc<glow::Context>, path: &Path, fallback: [u8; 4]) -> Result<Texture> {
    match Texture::from_file(gl, path) {
        Ok(texture) => Ok(texture),
        Err(e) => {
            log::error!("{}; using a placeholder", e);
            Texture::solid(gl, fallback)
        }
    }
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    programs: ProgramSet,
    quad: Mesh,
    camera: Camera,
    view_block: ViewBlock,
    view_buffer: UniformBuffer<ViewBlock>,
    light_buffer: UniformBuffer<LightBlock>,
    diffuse: Texture,
    normal_map: Texture,
    target: Option<Framebuffer>,
    viewport: Viewport,
    surfaces: Vec<Surface>,
    mouse: MouseTracker,
    frames: u64,
}

impl Renderer {
    /// Creates every GPU resource for a viewport of the given size.
    ///
    /// Shader problems and unreadable textures are logged, not returned; only failures to
    /// allocate GL objects are errors.
    pub fn new(
        gl: &Arc<glow::Context>,
        width: u32,
        height: u32,
        textures: &TextureConfig,
    ) -> Result<Self> {
        let programs = ProgramSet::new(gl);
        let quad = quad::mesh(gl)?;

        let camera = Camera::default();
        let mut viewport = Viewport::new(width, height);
        let view_block = camera.block(viewport.aspect());
        let view_buffer = UniformBuffer::new(gl, &view_block)?;

        let target = match viewport.take_rebuild() {
            Some(size) => Some(Framebuffer::new(gl, size.x, size.y)?),
            None => None,
        };

        let light_buffer = UniformBuffer::new(gl, &LightBlock::point(LIGHT_POSITION))?;

        let diffuse = load_or_fallback(gl, &textures.diffuse, FALLBACK_DIFFUSE)?;
        let normal_map = load_or_fallback(gl, &textures.normal_map, FALLBACK_NORMAL)?;

        log::info!(
            "renderer ready: {}x{}, {} indices per surface",
            width,
            height,
            quad.index_count()
        );

        Ok(Self {
            gl: Arc::clone(gl),
            programs,
            quad,
            camera,
            view_block,
            view_buffer,
            light_buffer,
            diffuse,
            normal_map,
            target,
            viewport,
            surfaces: scene::surfaces(),
            mouse: MouseTracker::default(),
            frames: 0,
        })
    }

    /// Records a new framebuffer size. The target is rebuilt on the next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {}x{}", width, height);
        self.viewport.resize(width, height);
    }

    pub fn handle_left_button(&mut self, action: ButtonAction) {
        self.mouse.handle_left_button(action);
    }

    pub fn handle_mouse_motion(&mut self, x: f64, y: f64) {
        if let Some(rotation) = self.mouse.handle_motion(x, y) {
            // Not applied to the scene yet.
            log::trace!("drag rotation {:?}", rotation);
        }
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Brings the camera block and render target up to date with the viewport.
    fn rebuild_if_stale(&mut self) -> Result<()> {
        let Some(size) = self.viewport.take_rebuild() else {
            return Ok(());
        };
        self.view_block = self.camera.block(self.viewport.aspect());
        self.view_buffer.write(&self.view_block);

        // Free the old attachments before allocating the new ones.
        self.target = None;
        self.target = Some(Framebuffer::new(&self.gl, size.x, size.y)?);
        log::debug!("render target rebuilt at {}x{}", size.x, size.y);
        Ok(())
    }

    /// Plans the draws for the current camera.
    pub fn plan(&self) -> FramePlan {
        FramePlan::build(&self.surfaces, &self.view_block.view)
    }

    /// Draws one frame into the offscreen target and blits it to the window.
    pub fn draw_frame(&mut self) -> Result<()> {
        self.rebuild_if_stale()?;
        if !self.viewport.is_drawable() {
            return Ok(());
        }
        let Some(target) = self.target.as_ref() else {
            return Ok(());
        };

        let size = self.viewport.size();
        let gl = &self.gl;
        target.bind();
        unsafe {
            gl.viewport(0, 0, size.x as i32, size.y as i32);
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT | glow::STENCIL_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::CULL_FACE);
            gl.cull_face(glow::BACK);
            gl.enable(glow::MULTISAMPLE);
        }

        self.view_buffer.bind_base(VIEW_BLOCK_SLOT);
        self.light_buffer.bind_base(LIGHT_BLOCK_SLOT);

        let plan = self.plan();
        self.quad.bind();
        let mut bound = None;
        for draw in &plan.draws {
            let Some(program) = self.programs.get(draw.program) else {
                log::trace!("skipping {}: program unavailable", draw.surface);
                continue;
            };
            if bound != Some(draw.program) {
                program.use_program();
                bound = Some(draw.program);
            }
            self.submit(program, draw);
        }
        Mesh::unbind(gl);
        Framebuffer::unbind(gl);

        target.blit_to_default();
        self.frames += 1;
        Ok(())
    }

    fn submit(&self, program: &ShaderProgram, draw: &DrawCall) {
        if draw.textures == TextureBinding::DiffuseAndNormal {
            self.diffuse.bind(DIFFUSE_UNIT);
            self.normal_map.bind(NORMAL_MAP_UNIT);
        }
        program.set_uniform(location::MODEL, draw.model);
        if let Some(color) = draw.color {
            program.set_uniform(location::COLOR, color);
        }
        program.set_uniform(location::SETTINGS, draw.flags.as_uniform());
        program.set_uniform(location::KA, draw.ka);
        program.set_uniform(location::KD, draw.kd);
        program.set_uniform(location::KS, draw.ks);
        program.set_uniform(location::SHININESS, draw.shininess);
        program.set_uniform(location::NORMAL_MATRIX, draw.normal_matrix);
        self.quad.draw_bound();
    }
}
