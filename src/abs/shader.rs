//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! Uniforms are addressed by explicit `layout(location = N)` slots rather than by name, so the
//! [`Uniform`] trait takes a location.

use std::sync::Arc;

use glam::{Mat3, Mat4, Vec3, Vec4};
use glow::HasContext;

use crate::error::{Error, Result};

/// Uniform locations shared by every program in the crate.
pub mod location {
    pub const MODEL: u32 = 0;
    pub const COLOR: u32 = 1;
    pub const SETTINGS: u32 = 2;
    pub const KA: u32 = 3;
    pub const KD: u32 = 4;
    pub const KS: u32 = 5;
    pub const SHININESS: u32 = 6;
    pub const NORMAL_MATRIX: u32 = 7;
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self> {
        let stage = stage_name(shader_type);
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(Error::Gl)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(Error::ShaderCompile { stage, log });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a uniform location of the bound program.
pub trait Uniform {
    /// Writes the value to `location` of the currently bound program.
    fn set_uniform(&self, gl: &glow::Context, location: u32);
}

fn loc(location: u32) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(location)
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_1_i32(Some(&loc(location)), *self);
        }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_1_f32(Some(&loc(location)), *self);
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_3_f32(Some(&loc(location)), self.x, self.y, self.z);
        }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_4_f32(Some(&loc(location)), self.x, self.y, self.z, self.w);
        }
    }
}

impl Uniform for Mat3 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_matrix_3_f32_slice(Some(&loc(location)), false, &self.to_cols_array());
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(&loc(location)), false, self.as_ref());
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, location: u32) {
        (*self).set_uniform(gl, location);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    ///
    /// `name` only identifies the program in error reports.
    pub fn new(gl: &Arc<glow::Context>, name: &'static str, shaders: &[&Shader]) -> Result<Self> {
        unsafe {
            let program = gl.create_program().map_err(Error::Gl)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(Error::ProgramLink { program: name, log });
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform of this program. The program must be bound.
    pub fn set_uniform<T: Uniform>(&self, location: u32, value: T) {
        value.set_uniform(&self.gl, location);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
