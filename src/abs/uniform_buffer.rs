//! Uniform buffer objects.
//!
//! A [`UniformBuffer`] holds exactly one value of a `#[repr(C)]` block type whose layout
//! matches a `std140` uniform block in GLSL.

use std::{marker::PhantomData, sync::Arc};

use glow::HasContext;

use crate::error::{Error, Result};

/// A GPU buffer holding one `T`, bindable to an indexed uniform block slot.
pub struct UniformBuffer<T: bytemuck::Pod> {
    gl: Arc<glow::Context>,
    id: glow::Buffer,
    _block: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformBuffer<T> {
    /// Allocates the buffer and uploads the initial value.
    pub fn new(gl: &Arc<glow::Context>, value: &T) -> Result<Self> {
        let id = unsafe { gl.create_buffer().map_err(Error::Gl)? };
        let buffer = Self {
            gl: Arc::clone(gl),
            id,
            _block: PhantomData,
        };
        buffer.write(value);
        Ok(buffer)
    }

    /// Replaces the buffer contents.
    pub fn write(&self, value: &T) {
        unsafe {
            self.gl.bind_buffer(glow::UNIFORM_BUFFER, Some(self.id));
            self.gl.buffer_data_u8_slice(
                glow::UNIFORM_BUFFER,
                bytemuck::bytes_of(value),
                glow::STATIC_DRAW,
            );
            self.gl.bind_buffer(glow::UNIFORM_BUFFER, None);
        }
    }

    /// Binds the buffer to uniform block binding point `slot`.
    pub fn bind_base(&self, slot: u32) {
        unsafe {
            self.gl
                .bind_buffer_base(glow::UNIFORM_BUFFER, slot, Some(self.id));
        }
    }

    /// Size of the block in bytes.
    pub const fn size() -> usize {
        std::mem::size_of::<T>()
    }
}

impl<T: bytemuck::Pod> Drop for UniformBuffer<T> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.id);
        }
    }
}
