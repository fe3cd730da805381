//! Module to work with OpenGL framebuffers.
//!
//! This module provides the offscreen [`Framebuffer`] the scene is drawn into. It always carries
//! an RGBA8 color attachment and a packed 24-bit depth / 8-bit stencil attachment, and is
//! presented by blitting its color buffer onto the window.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::Texture;
use crate::error::{Error, Result};

/// Where an attachment is bound on the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentPoint {
    Color0,
    DepthStencil,
}

impl AttachmentPoint {
    fn gl_enum(self) -> u32 {
        match self {
            AttachmentPoint::Color0 => glow::COLOR_ATTACHMENT0,
            AttachmentPoint::DepthStencil => glow::DEPTH_STENCIL_ATTACHMENT,
        }
    }
}

/// Storage description of one framebuffer attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSpec {
    pub point: AttachmentPoint,
    pub width: u32,
    pub height: u32,
    pub internal_format: u32,
    pub format: u32,
    pub ty: u32,
}

impl AttachmentSpec {
    /// The attachments of a render target of the given size.
    pub fn for_size(width: u32, height: u32) -> [AttachmentSpec; 2] {
        [
            AttachmentSpec {
                point: AttachmentPoint::Color0,
                width,
                height,
                internal_format: glow::RGBA8,
                format: glow::RGBA,
                ty: glow::UNSIGNED_BYTE,
            },
            AttachmentSpec {
                point: AttachmentPoint::DepthStencil,
                width,
                height,
                internal_format: glow::DEPTH24_STENCIL8,
                format: glow::DEPTH_STENCIL,
                ty: glow::UNSIGNED_INT_24_8,
            },
        ]
    }
}

/// Represents an OpenGL framebuffer with a color and a depth/stencil attachment.
pub struct Framebuffer {
    gl: Arc<glow::Context>,
    fbo: glow::Framebuffer,
    // Only held so the attachments are freed with the framebuffer.
    _color_tex: Texture,
    _depth_stencil_tex: Texture,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Creates a new framebuffer with the specified width and height.
    ///
    /// An incomplete framebuffer is logged and still returned.
    pub fn new(gl: &Arc<glow::Context>, width: u32, height: u32) -> Result<Self> {
        let [color_spec, depth_spec] = AttachmentSpec::for_size(width, height);
        unsafe {
            let fbo = gl.create_framebuffer().map_err(Error::Gl)?;
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));

            let attach = |spec: &AttachmentSpec| -> Result<Texture> {
                let tex = Texture::empty(
                    gl,
                    spec.width,
                    spec.height,
                    spec.internal_format,
                    spec.format,
                    spec.ty,
                )?;
                gl.framebuffer_texture_2d(
                    glow::FRAMEBUFFER,
                    spec.point.gl_enum(),
                    glow::TEXTURE_2D,
                    Some(tex.id),
                    0,
                );
                Ok(tex)
            };

            let attachments = attach(&color_spec).and_then(|c| Ok((c, attach(&depth_spec)?)));
            let (color_tex, depth_stencil_tex) = match attachments {
                Ok(pair) => pair,
                Err(e) => {
                    gl.bind_framebuffer(glow::FRAMEBUFFER, None);
                    gl.delete_framebuffer(fbo);
                    return Err(e);
                }
            };

            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            if status != glow::FRAMEBUFFER_COMPLETE {
                log::error!(
                    "framebuffer {}x{} incomplete (status {:#x})",
                    width,
                    height,
                    status
                );
            }

            gl.bind_framebuffer(glow::FRAMEBUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                fbo,
                _color_tex: color_tex,
                _depth_stencil_tex: depth_stencil_tex,
                width,
                height,
            })
        }
    }

    /// Binds the framebuffer for rendering.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo));
        }
    }

    /// Unbinds the framebuffer, reverting to the default framebuffer.
    pub fn unbind(gl: &glow::Context) {
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }
    }

    /// Copies the color buffer onto the default framebuffer at the same size.
    pub fn blit_to_default(&self) {
        let (w, h) = (self.width as i32, self.height as i32);
        unsafe {
            self.gl
                .bind_framebuffer(glow::READ_FRAMEBUFFER, Some(self.fbo));
            self.gl.bind_framebuffer(glow::DRAW_FRAMEBUFFER, None);
            self.gl.blit_framebuffer(
                0,
                0,
                w,
                h,
                0,
                0,
                w,
                h,
                glow::COLOR_BUFFER_BIT,
                glow::NEAREST,
            );
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_framebuffer(self.fbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_match_requested_size() {
        for (w, h) in [(800, 600), (1, 1), (1920, 1080), (333, 4096)] {
            let specs = AttachmentSpec::for_size(w, h);
            assert_eq!(specs.len(), 2);
            for spec in &specs {
                assert_eq!((spec.width, spec.height), (w, h));
            }
        }
    }

    #[test]
    fn test_attachment_formats() {
        let [color, depth] = AttachmentSpec::for_size(640, 480);
        assert_eq!(color.point, AttachmentPoint::Color0);
        assert_eq!(color.internal_format, glow::RGBA8);
        assert_eq!(depth.point, AttachmentPoint::DepthStencil);
        assert_eq!(depth.internal_format, glow::DEPTH24_STENCIL8);
        assert_eq!(depth.ty, glow::UNSIGNED_INT_24_8);
    }

    #[test]
    fn test_rebuilding_at_same_size_is_idempotent() {
        assert_eq!(
            AttachmentSpec::for_size(1024, 768),
            AttachmentSpec::for_size(1024, 768)
        );
    }
}
